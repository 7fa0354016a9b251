//! Session token issuing and verification

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::{Account, Claims};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and verifying signed session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Token validity window in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.config.ttl_seconds
    }

    /// Issues a session token for an account
    ///
    /// # Returns
    ///
    /// * `Ok((token, claims))` - The encoded token and the claims it carries
    /// * `Err(DomainError::Token(TokenGenerationFailed))` - Signing failed
    pub fn issue(&self, account: &Account) -> Result<(String, Claims), DomainError> {
        let claims = Claims::new(
            &account.email,
            account.role,
            self.config.ttl_seconds,
            &self.config.issuer,
            &self.config.audience,
        );
        let token = self.encode_jwt(&claims)?;
        Ok((token, claims))
    }

    /// Verifies a session token
    ///
    /// Checks signature, issuer, audience, not-before and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::ImmatureSignature => DomainError::Token(TokenError::TokenNotYetValid),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        Ok(token_data.claims)
    }

    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }
}

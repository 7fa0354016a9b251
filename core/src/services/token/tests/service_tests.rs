//! Unit tests for token service

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::{Account, Claims, Role};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    }
}

fn account() -> Account {
    Account::new("a@x.com".to_string(), "hash".to_string(), Role::Customer)
}

#[test]
fn test_issue_and_verify() {
    let service = TokenService::new(config());
    let (token, issued) = service.issue(&account()).unwrap();

    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.role, Role::Customer);
    assert_eq!(claims.jti, issued.jti);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_each_token_has_unique_id() {
    let service = TokenService::new(config());
    let (_, first) = service.issue(&account()).unwrap();
    let (_, second) = service.issue(&account()).unwrap();
    assert_ne!(first.jti, second.jti);
}

#[test]
fn test_wrong_secret_rejected() {
    let issuer = TokenService::new(config());
    let verifier = TokenService::new(TokenServiceConfig {
        jwt_secret: "other-secret".to_string(),
        ..Default::default()
    });

    let (token, _) = issuer.issue(&account()).unwrap();
    let result = verifier.verify(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_expired_token_rejected() {
    let cfg = config();
    let service = TokenService::new(cfg.clone());
    let claims = Claims::new("a@x.com", Role::Customer, -120, &cfg.issuer, &cfg.audience);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_wrong_audience_rejected() {
    let cfg = config();
    let service = TokenService::new(cfg.clone());
    let claims = Claims::new("a@x.com", Role::Customer, 600, &cfg.issuer, "someone-else");
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .unwrap();

    assert!(service.verify(&token).is_err());
}

#[test]
fn test_garbage_rejected() {
    let service = TokenService::new(config());
    assert!(matches!(
        service.verify("not.a.jwt"),
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

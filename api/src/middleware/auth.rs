//! Bearer-token authentication middleware for protected account routes.
//!
//! The middleware extracts the session token from the `Authorization`
//! header, verifies it with the [`TokenService`] held in the application
//! state and injects an [`AuthContext`] into the request extensions.
//! Handlers receive the context through the `FromRequest` extractor.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use re_core::{
    domain::entities::{Claims, Role},
    errors::{DomainError, TokenError},
};
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use crate::app::AppState;
use crate::handlers::error::ApiError;

/// Identity decoded from a verified session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Account email carried in the `sub` claim
    pub email: String,
    /// Role at issue time; authorization re-reads the stored account
    pub role: Role,
    /// Token id, for log correlation
    pub jti: String,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            role: claims.role,
            jti: claims.jti,
        }
    }
}

/// Authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(context) => {
                tracing::debug!(jti = %context.jti, "Bearer token accepted");
                req.extensions_mut().insert(context);
                let service = Rc::clone(&self.service);
                Box::pin(async move {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(err) => {
                tracing::debug!(code = err.error_code(), "Bearer token rejected");
                let response = ApiError::from(err).error_response();
                let res = req.into_response(response).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthContext, DomainError> {
    let token = extract_bearer_token(req).ok_or(TokenError::MissingToken)?;
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| DomainError::internal("application state is not registered"))?;
    let claims = state.tokens.verify(&token)?;
    Ok(AuthContext::from(claims))
}

/// Extracts the bearer token from the Authorization header
pub fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(TokenError::MissingToken));
        ready(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req).as_deref(), Some("abc.def.ghi"));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "bearer  token "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req).as_deref(), Some("token"));
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_schemes() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_srv_request();
        assert!(extract_bearer_token(&req).is_none());

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer"))
            .to_srv_request();
        assert!(extract_bearer_token(&req).is_none());

        let req = TestRequest::default().to_srv_request();
        assert!(extract_bearer_token(&req).is_none());
    }
}

use actix_cors::Cors;
use actix_web::http::header;

use crate::consts::consts::{
    MaxAgeSeconds, ALLOWED_METHODS, DEFAULT_ALLOWED_ORIGIN, DEFAULT_MAX_AGE,
};
use crate::error::ConfigError;

/// Cross-origin policy for the frontend. Only one origin is ever allowed, requests from anywhere
/// else never see it echoed back in `Access-Control-Allow-Origin`.
#[derive(Debug, Clone)]
pub struct CorsOptions {
    pub allowed_origin: String,
    pub max_age: MaxAgeSeconds,
    pub supports_credentials: bool,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl CorsOptions {
    pub fn set_allowed_origin(mut self, allowed_origin: String) -> Self {
        self.allowed_origin = allowed_origin;
        self
    }

    /// How long (in seconds) browsers may cache a preflight result
    pub fn set_max_age(mut self, max_age: MaxAgeSeconds) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn set_supports_credentials(mut self, supports_credentials: bool) -> Self {
        self.supports_credentials = supports_credentials;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_bare_origin(&self.allowed_origin) {
            return Err(ConfigError::InvalidOrigin(self.allowed_origin.clone()));
        }

        if self.max_age == 0 {
            return Err(ConfigError::InvalidMaxAge);
        }

        Ok(())
    }

    /// Builds the middleware. `actix_cors` panics on a malformed origin, so callers should
    /// `validate` first.
    pub fn build(&self) -> Cors {
        let cors = Cors::default()
            .allowed_origin(&self.allowed_origin)
            .allowed_methods(ALLOWED_METHODS)
            .allowed_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
            .max_age(self.max_age);

        if self.supports_credentials {
            cors.supports_credentials()
        } else {
            cors
        }
    }
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            max_age: DEFAULT_MAX_AGE,
            supports_credentials: true,
        }
    }
}

/// Scheme and host (optionally a port), nothing after
fn is_bare_origin(origin: &str) -> bool {
    let host = match origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    {
        Some(host) => host,
        None => return false,
    };

    !host.is_empty()
        && !host.contains(|c: char| matches!(c, '/' | '?' | '#' | '*') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header, Method, StatusCode},
        test as actix_test, web, App, HttpResponse,
    };
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = CorsOptions::default();

        assert_eq!(options.allowed_origin, "http://localhost:3000");
        assert_eq!(options.max_age, 43200);
        assert!(options.supports_credentials);
        assert_eq!(options.validate(), Ok(()));
    }

    #[rstest]
    #[case("http://localhost:3000")]
    #[case("https://example.com")]
    #[case("http://127.0.0.1")]
    fn accepts_bare_origins(#[case] origin: &str) {
        let options = CorsOptions::default().set_allowed_origin(origin.to_string());

        assert_eq!(options.validate(), Ok(()));
    }

    #[rstest]
    #[case("localhost:3000")]
    #[case("http://")]
    #[case("http://localhost:3000/")]
    #[case("http://localhost:3000/app")]
    #[case("*")]
    #[case("ftp://localhost")]
    fn rejects_non_origins(#[case] origin: &str) {
        let options = CorsOptions::default().set_allowed_origin(origin.to_string());

        assert_eq!(
            options.validate(),
            Err(ConfigError::InvalidOrigin(origin.to_string()))
        );
    }

    #[test]
    fn rejects_zero_max_age() {
        let options = CorsOptions::default().set_max_age(0);

        assert_eq!(options.validate(), Err(ConfigError::InvalidMaxAge));
    }

    #[actix_web::test]
    async fn credentials_can_be_disabled() {
        let app = actix_test::init_service(
            App::new()
                .wrap(CorsOptions::default().set_supports_credentials(false).build())
                .route(
                    "/",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                ),
        )
        .await;

        let req = actix_test::TestRequest::default()
            .method(Method::GET)
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }
}

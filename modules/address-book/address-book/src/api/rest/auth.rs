//! Static shared-secret check on a request header.
//!
//! A request passes only when the configured header is present and its value equals the
//! configured key. Anything else is answered with `401 Unauthorized` as a Problem.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderName, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use secrecy::{ExposeSecret, SecretString};

use super::problem::Problem;

#[derive(Clone)]
pub struct ApiKeyAuth {
    header: HeaderName,
    key: Arc<SecretString>,
}

impl ApiKeyAuth {
    #[must_use]
    pub fn new(header: HeaderName, key: SecretString) -> Self {
        Self {
            header,
            key: Arc::new(key),
        }
    }

    // Compares every byte regardless of where the first mismatch is.
    fn accepts(&self, presented: &[u8]) -> bool {
        let expected = self.key.expose_secret().as_bytes();
        if expected.len() != presented.len() {
            return false;
        }
        expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

fn unauthorized_response(path: &str, detail: &str) -> Response {
    Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized", detail)
        .with_code("address_book.unauthorized")
        .with_instance(path)
        .into_response()
}

/// Middleware rejecting requests without the expected API key.
pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    req: Request,
    next: Next,
) -> Response {
    let verdict = req
        .headers()
        .get(&auth.header)
        .map(|value| auth.accepts(value.as_bytes()));

    match verdict {
        Some(true) => next.run(req).await,
        Some(false) => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                "Rejected request with invalid API key"
            );
            unauthorized_response(req.uri().path(), "Invalid API key")
        }
        None => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                header = %auth.header,
                "Rejected request without API key"
            );
            unauthorized_response(
                req.uri().path(),
                &format!("Missing API key header '{}'", auth.header),
            )
        }
    }
}

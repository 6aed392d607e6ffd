//! HTTP Response Utilities
//!
//! Status and transport error mapping shared by API providers. Embedding
//! failures always surface as `EmbeddingUnavailable`; vector store failures
//! are split into transient (`BackendUnavailable`) and rejected requests
//! (`VectorDb`).

use insights_domain::constants::AUTHENTICATION_FAILED;
use insights_domain::error::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::utils::JsonExt;

/// Which kind of service a response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    /// Text embedding API
    Embedding,
    /// Vector database API
    VectorStore,
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `role` - Service kind, selects the error variant
    ///
    /// # Returns
    /// Parsed body on success, or an appropriate error
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        role: ServiceRole,
    ) -> Result<T> {
        let response = Self::check_status(response, provider_name, role).await?;
        response.json::<T>().await.map_err(|e| {
            Self::failure(
                provider_name,
                role,
                false,
                format!("response parse failed: {e}"),
            )
        })
    }

    /// Check response status, returning the response untouched on success
    pub async fn check_status(
        response: Response,
        provider_name: &str,
        role: ServiceRole,
    ) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(Self::status_error(status, &error_text, provider_name, role))
    }

    /// Map a non-success status to a domain error
    pub fn status_error(
        status: StatusCode,
        body: &str,
        provider_name: &str,
        role: ServiceRole,
    ) -> Error {
        let code = status.as_u16();
        let details = extract_message(body);
        let (context, transient) = match code {
            401 | 403 => (AUTHENTICATION_FAILED.to_string(), true),
            429 => ("rate limit exceeded".to_string(), true),
            500..=599 => (format!("server error ({code})"), true),
            _ => (format!("request failed ({code})"), false),
        };
        Self::failure(provider_name, role, transient, format!("{context}: {details}"))
    }

    /// Map a transport error (timeout, connection failure) to a domain error
    pub fn request_error(error: reqwest::Error, provider_name: &str, role: ServiceRole) -> Error {
        let message = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "connection failed".to_string()
        } else {
            format!("HTTP request failed: {error}")
        };
        match role {
            ServiceRole::Embedding => Error::EmbeddingUnavailable {
                provider: provider_name.to_string(),
                message,
                source: Some(Box::new(error)),
            },
            ServiceRole::VectorStore => {
                Error::backend_unavailable_with_source(provider_name, message, error)
            }
        }
    }

    fn failure(provider_name: &str, role: ServiceRole, transient: bool, message: String) -> Error {
        match role {
            ServiceRole::Embedding => Error::embedding_unavailable(provider_name, message),
            ServiceRole::VectorStore if transient => {
                Error::backend_unavailable(provider_name, message)
            }
            ServiceRole::VectorStore => Error::vector_db(format!("{provider_name} {message}")),
        }
    }
}

/// Prefer the service's own message over the raw body
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.path_str(&["error", "message"])
                .or_else(|| json.opt_str("message"))
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

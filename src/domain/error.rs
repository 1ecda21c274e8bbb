//! Error types for explorer operations.
//!
//! Failures are kept structured so the error renderer can show the
//! backend's own messages instead of a generic "request failed".

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Server Error Envelope
// ============================================================================

/// A single error entry reported by the explorer backend.
///
/// The backend answers failed requests with
/// `{"errors": [{"type": "...", "field": "...", "message": "..."}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerError {
    /// Error category, e.g. `field-validation-error`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The request field the error refers to, if any.
    #[serde(default)]
    pub field: Option<String>,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ServerErrorEnvelope {
    errors: Vec<ServerError>,
}

/// Decodes a failed response body into server error entries.
///
/// Bodies that are not the explorer's error envelope are kept verbatim as a
/// single entry so nothing the server said is lost.
#[must_use]
pub fn parse_server_errors(body: &str) -> Vec<ServerError> {
    match serde_json::from_str::<ServerErrorEnvelope>(body) {
        Ok(envelope) => envelope.errors,
        Err(_) if body.trim().is_empty() => Vec::new(),
        Err(_) => vec![ServerError {
            kind: "raw".to_string(),
            field: None,
            message: body.trim().to_string(),
        }],
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error type for explorer client operations.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The explorer does not know the transaction.
    #[error("transaction '{txid}' not found")]
    NotFound {
        /// The identifier that was requested.
        txid: String,
    },

    /// Non-success response other than 404.
    #[error("Server error ({status}){}", format_server_errors(.errors))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Decoded error entries from the response body.
        errors: Vec<ServerError>,
    },

    /// Success response whose body could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP client could not be built.
    #[error("Client init error: {0}")]
    ClientInit(String),
}

fn format_server_errors(errors: &[ServerError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    format!(": {}", messages.join("; "))
}

impl ExplorerError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    #[must_use]
    pub fn not_found(txid: impl Into<String>) -> Self {
        Self::NotFound { txid: txid.into() }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client init error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a server error from a status code and the raw response body.
    #[must_use]
    pub fn server(status: u16, body: &str) -> Self {
        Self::Server {
            status,
            errors: parse_server_errors(body),
        }
    }

    /// The messages a user should see for this failure, one per line.
    #[must_use]
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Server { status, errors } if errors.is_empty() => {
                vec![format!("Server returned status {status}")]
            }
            Self::Server { errors, .. } => errors
                .iter()
                .map(|e| match &e.field {
                    Some(field) => format!("{field}: {}", e.message),
                    None => e.message.clone(),
                })
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_error_display() {
        let parse_err = ExplorerError::parse("test error");
        assert_eq!(format!("{}", parse_err), "Parse error: test error");

        let not_found_err = ExplorerError::not_found("abc123");
        assert_eq!(
            format!("{}", not_found_err),
            "transaction 'abc123' not found"
        );

        let invalid_err = ExplorerError::invalid_input("bad input");
        assert_eq!(format!("{}", invalid_err), "Invalid input: bad input");
    }

    #[test]
    fn test_server_error_decodes_envelope() {
        let body = r#"{"errors":[{"type":"field-validation-error","field":"transactionId","message":"Invalid transaction"}]}"#;
        let err = ExplorerError::server(400, body);

        match &err {
            ExplorerError::Server { status, errors } => {
                assert_eq!(*status, 400);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, "field-validation-error");
                assert_eq!(errors[0].field.as_deref(), Some("transactionId"));
            }
            _ => panic!("Expected Server variant"),
        }
        assert_eq!(
            err.to_string(),
            "Server error (400): Invalid transaction"
        );
        assert_eq!(
            err.user_messages(),
            vec!["transactionId: Invalid transaction".to_string()]
        );
    }

    #[test]
    fn test_server_error_keeps_raw_body() {
        let errors = parse_server_errors("  Bad Gateway \n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, "raw");
        assert_eq!(errors[0].message, "Bad Gateway");
    }

    #[test]
    fn test_server_error_empty_body() {
        let err = ExplorerError::server(503, "");
        assert_eq!(err.to_string(), "Server error (503)");
        assert_eq!(
            err.user_messages(),
            vec!["Server returned status 503".to_string()]
        );
    }

    #[test]
    fn test_user_messages_for_simple_variants() {
        let err = ExplorerError::not_found("deadbeef");
        assert_eq!(
            err.user_messages(),
            vec!["transaction 'deadbeef' not found".to_string()]
        );
    }
}

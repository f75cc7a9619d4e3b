//! Error taxonomy for calls against the pricing API.

use serde::Deserialize;
use thiserror::Error;

/// Message shown when a rejection body carries no usable `detail`.
pub const GENERIC_REJECTION: &str = "El servidor rechazó la solicitud";
/// Message shown for a 404 without `detail`.
pub const GENERIC_NOT_FOUND: &str = "Recurso no encontrado";

/// Failure of a client-side precondition.
///
/// The `Display` text is what the form shows to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationFailure {
    #[error("Seleccione un diseño")]
    DesignNotSelected,
    #[error("El diseño seleccionado aún no se ha cargado")]
    DesignNotLoaded,
    #[error("{0} es obligatorio")]
    MissingField(&'static str),
    #[error("{field} debe ser un número")]
    NotNumeric { field: &'static str },
    #[error("{field} debe estar entre {min} y {max} (valor: {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Seleccione referencia y color para el material #{}", .slot + 1)]
    SlotIncomplete { slot: usize },
    #[error("{field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Errors surfaced by API calls and the flows built on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure, unreadable body or non-2xx status without detail
    #[error("Error de red: {0}")]
    Network(String),
    /// HTTP 404 or an id that does not resolve; the server `detail` verbatim
    #[error("{0}")]
    NotFound(String),
    /// A value that cannot be coerced or is out of its domain
    #[error("Dato inválido: {0}")]
    InvalidInput(String),
    /// Client-side form validation failed
    #[error("{}", join_failures(.0))]
    Validation(Vec<ValidationFailure>),
    /// Non-2xx response carrying a server `detail` message, shown verbatim
    #[error("{0}")]
    RequestRejected(String),
}

fn join_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Extract the user-facing message from an error response body.
///
/// FastAPI-style bodies carry `detail` either as a string or as a list of
/// `{ "msg": ... }` objects for schema errors; both are flattened to text.
pub fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

impl ApiError {
    /// Map a non-2xx response to an error.
    ///
    /// 404 becomes `NotFound`; any other status becomes `RequestRejected`
    /// with the parsed `detail`, or the generic message when there is none.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        if status == 404 {
            return ApiError::NotFound(detail.unwrap_or_else(|| GENERIC_NOT_FOUND.to_string()));
        }
        match detail {
            Some(message) => ApiError::RequestRejected(message),
            None => ApiError::RequestRejected(GENERIC_REJECTION.to_string()),
        }
    }

    /// Text stored in the component's error state
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_detail_verbatim() {
        let err = ApiError::from_status(400, r#"{"detail":"insufficient stock"}"#);
        assert_eq!(err, ApiError::RequestRejected("insufficient stock".into()));
        assert_eq!(err.user_message(), "insufficient stock");
    }

    #[test]
    fn test_rejection_falls_back_when_body_unparseable() {
        let err = ApiError::from_status(500, "<html>Internal Server Error</html>");
        assert_eq!(err.user_message(), GENERIC_REJECTION);
    }

    #[test]
    fn test_schema_error_list_is_flattened() {
        let body = r#"{"detail":[{"loc":["body","ancho"],"msg":"Las dimensiones deben estar entre 20 y 500 cm"}]}"#;
        assert_eq!(
            parse_detail(body).as_deref(),
            Some("Las dimensiones deben estar entre 20 y 500 cm")
        );
    }

    #[test]
    fn test_not_found_status() {
        let err = ApiError::from_status(404, r#"{"detail":"Cortina no encontrada"}"#);
        assert_eq!(err, ApiError::NotFound("Cortina no encontrada".into()));
        assert_eq!(err.user_message(), "Cortina no encontrada");
    }

    #[test]
    fn test_not_found_without_detail_uses_fallback() {
        let err = ApiError::from_status(404, "");
        assert_eq!(err.user_message(), GENERIC_NOT_FOUND);
    }

    #[test]
    fn test_validation_message_joins_failures() {
        let err = ApiError::Validation(vec![
            ValidationFailure::DesignNotSelected,
            ValidationFailure::SlotIncomplete { slot: 1 },
        ]);
        assert_eq!(
            err.to_string(),
            "Seleccione un diseño; Seleccione referencia y color para el material #2"
        );
    }
}

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response, carrying the user-facing explanation.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Transport-level failure (connection, timeout, invalid URL).
    #[error("error de red: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body was not what the operation expected.
    #[error("respuesta inválida del servicio: {0}")]
    InvalidResponse(String),

    /// Credential storage failed while persisting a login.
    #[error(transparent)]
    Auth(#[from] rsv_auth::AuthError),
}

/// Fixed explanation for an HTTP status, used when the response body does
/// not bring its own `detail`/`message`.
#[must_use]
pub const fn explain_status(status: u16) -> &'static str {
    match status {
        400 => "Solicitud incorrecta",
        401 => "Credenciales incorrectas",
        403 => "No tienes permisos para realizar esta acción",
        404 => "Recurso no encontrado",
        409 => "Conflicto con el estado actual del recurso",
        422 => "Datos enviados no válidos",
        500..=599 => "Error interno del servidor",
        _ => "Error en la petición",
    }
}

/// Error body shape shared by the services: `{ detail }` or `{ message }`.
/// `detail` may be a plain string or a structured validation report.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        match self.detail {
            Some(Value::String(text)) if !text.is_empty() => Some(text),
            Some(Value::Null) | Some(Value::String(_)) | None => self.message,
            // Structured detail (e.g. a validation report) is surfaced
            // as compact JSON rather than dropped.
            Some(other) => serde_json::to_string(&other).ok(),
        }
    }
}

/// Build the `Status` error for a non-2xx response.
///
/// An unparsable body degrades to the status-keyed explanation; it is not
/// a distinct error kind.
pub(crate) fn status_error(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| explain_status(status).to_string());
    ApiError::Status { status, message }
}

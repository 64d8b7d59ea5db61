use serde::Serialize;

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {message}")]
    Database {
        message: String,
        /// SQLSTATE for server-side errors, the I/O error kind for
        /// connection failures, `TIMEOUT` when the connect deadline passed.
        code: Option<String>,
    },
}

impl AppError {
    /// Machine-readable code of the underlying error, when it has one.
    pub fn code(&self) -> Option<&str> {
        match self {
            AppError::Configuration(_) => None,
            AppError::Database { code, .. } => code.as_deref(),
        }
    }

    /// Whether the failure happened before any connection attempt.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::Configuration(_))
    }

    /// Connect deadline exceeded.
    pub fn timeout(secs: u64) -> Self {
        AppError::Database {
            message: format!("Connection timed out after {} seconds", secs),
            code: Some("TIMEOUT".to_string()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let code = match &err {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            sqlx::Error::Io(io_err) => Some(format!("{:?}", io_err.kind())),
            sqlx::Error::Tls(_) => Some("TLS".to_string()),
            sqlx::Error::PoolTimedOut => Some("TIMEOUT".to_string()),
            _ => None,
        };

        match err {
            sqlx::Error::Configuration(e) => {
                AppError::Configuration(format!("Invalid DATABASE_URL: {}", e))
            }
            other => AppError::Database {
                message: other.to_string(),
                code,
            },
        }
    }
}

/// JSON shape of a failure, printed by `db-check --json`.
#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
}

impl<'a> From<&'a AppError> for ErrorReport<'a> {
    fn from(err: &'a AppError) -> Self {
        Self {
            ok: false,
            error: err.to_string(),
            code: err.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_kind_code() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AppError::from(sqlx::Error::Io(io));
        assert_eq!(err.code(), Some("ConnectionRefused"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_error_has_no_code() {
        let err = AppError::Configuration("DATABASE_URL is not set".to_string());
        assert_eq!(err.code(), None);
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Configuration error: DATABASE_URL is not set"
        );
    }

    #[test]
    fn test_timeout_error() {
        let err = AppError::timeout(10);
        assert_eq!(err.code(), Some("TIMEOUT"));
        assert!(err.to_string().contains("10 seconds"));
    }

    #[test]
    fn test_error_report_json() {
        let err = AppError::timeout(3);
        let json = serde_json::to_value(ErrorReport::from(&err)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["code"], "TIMEOUT");

        let err = AppError::Configuration("missing".to_string());
        let json = serde_json::to_value(ErrorReport::from(&err)).unwrap();
        assert!(json.get("code").is_none());
    }
}

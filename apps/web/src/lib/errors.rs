use thiserror::Error;

// Only the catalog variant is built off-wasm, by the conversion tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<catalog::CatalogError> for AppError {
    fn from(err: catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_error_message() {
        let err = AppError::Http {
            status: 503,
            message: "catalog unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (503): catalog unavailable");
    }

    #[test]
    fn catalog_error_converts() {
        let err: AppError = catalog::CatalogError::EmptyCategory.into();
        assert!(matches!(err, AppError::Catalog(_)));
    }
}

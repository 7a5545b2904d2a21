use crate::api;
use anyhow::{Context, Result};
use catalog::Catalog;
use std::{fs, path::Path, path::PathBuf, sync::Arc};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub catalog_file: Option<PathBuf>,
    pub web_root: Option<PathBuf>,
    pub frontend_base_url: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the catalog cannot be loaded or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let catalog = load_catalog(args.catalog_file.as_deref())?;

    info!(
        products = catalog.len(),
        categories = catalog.categories().len(),
        "Catalog ready"
    );

    if let Some(root) = &args.web_root {
        if !root.join("index.html").is_file() {
            anyhow::bail!("Web root has no index.html: {}", root.display());
        }
    }

    let config = api::ServerConfig {
        port: args.port,
        web_root: args.web_root,
        frontend_base_url: args.frontend_base_url,
    };

    api::new(config, Arc::new(catalog)).await
}

/// Loads the product table from `path`, or the built-in table when no path is given.
///
/// # Errors
/// Returns an error if the file cannot be read or fails validation.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            debug!("Loading catalog from {}", path.display());
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            Catalog::from_json(&json)
                .with_context(|| format!("Invalid catalog file: {}", path.display()))
        }
        None => catalog::standard().context("Built-in catalog is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_catalog_when_no_path() {
        let catalog = load_catalog(None).expect("built-in catalog");
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"categories": ["Cans"], "products": [
                {{"id": 1, "name": "Slim can", "category": "Cans", "image": "/can.png", "details": "MOQ 1000"}}
            ]}}"#
        )
        .expect("write catalog");

        let catalog = load_catalog(Some(file.path())).expect("catalog from file");
        assert_eq!(catalog.categories(), ["Cans"]);
    }

    #[test]
    fn invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"categories": [], "products": [
                {{"id": 1, "name": "x", "category": "Jars", "image": "", "details": ""}}
            ]}}"#
        )
        .expect("write catalog");

        let err = load_catalog(Some(file.path())).expect_err("undeclared category");
        assert!(err.to_string().contains("Invalid catalog file"));
        assert!(format!("{err:#}").contains("undeclared category"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_catalog(Some(Path::new("/nonexistent/bevpack/catalog.json")));
        assert!(result.is_err());
    }
}

//! Arguments for the catalog source and the hosted frontend.

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_CATALOG_FILE: &str = "catalog-file";
pub const ARG_WEB_ROOT: &str = "web-root";
pub const ARG_FRONTEND_BASE_URL: &str = "frontend-base-url";

#[derive(Debug, Default)]
pub struct Options {
    pub catalog_file: Option<PathBuf>,
    pub web_root: Option<PathBuf>,
    pub frontend_base_url: Option<String>,
}

impl Options {
    /// # Errors
    /// Returns an error if the frontend base URL is present but not a valid absolute URL.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let frontend_base_url = matches.get_one::<String>(ARG_FRONTEND_BASE_URL).cloned();
        if let Some(value) = &frontend_base_url {
            url::Url::parse(value)
                .map_err(|err| anyhow::anyhow!("invalid --{ARG_FRONTEND_BASE_URL}: {err}"))?;
        }

        Ok(Self {
            catalog_file: matches.get_one::<PathBuf>(ARG_CATALOG_FILE).cloned(),
            web_root: matches.get_one::<PathBuf>(ARG_WEB_ROOT).cloned(),
            frontend_base_url,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_CATALOG_FILE)
                .long(ARG_CATALOG_FILE)
                .help("JSON product table to serve instead of the built-in catalog")
                .env("BEVPACK_CATALOG_FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_WEB_ROOT)
                .long(ARG_WEB_ROOT)
                .help("Directory with the built frontend (index.html, wasm, assets)")
                .env("BEVPACK_WEB_ROOT")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_FRONTEND_BASE_URL)
                .long(ARG_FRONTEND_BASE_URL)
                .help("Frontend origin allowed to call the API cross-origin, example: https://bevpack.dev")
                .env("BEVPACK_FRONTEND_BASE_URL"),
        )
}

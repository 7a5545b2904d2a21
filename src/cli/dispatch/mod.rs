//! Maps parsed CLI arguments to the action the binary runs.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{self, site};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if an argument is present but malformed.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(commands::ARG_PORT).copied().unwrap_or(8080);
    let site_opts = site::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        catalog_file: site_opts.catalog_file,
        web_root: site_opts.web_root,
        frontend_base_url: site_opts.frontend_base_url,
    }))
}

pub mod site;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";
pub const ARG_VERBOSITY: &str = "verbosity";

/// Log level names, indexed by the verbosity count they stand for.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts a level name (any case) or its verbosity count, so
/// `BEVPACK_LOG_LEVEL=debug` and `-vvv` mean the same thing.
fn parse_log_level(value: &str) -> Result<u8, String> {
    let value = value.trim();
    let index = LOG_LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(value))
        .or_else(|| {
            value
                .parse::<usize>()
                .ok()
                .filter(|count| *count < LOG_LEVELS.len())
        });

    index.and_then(|i| u8::try_from(i).ok()).ok_or_else(|| {
        format!(
            "unknown log level {value:?}, expected one of {} or 0-{}",
            LOG_LEVELS.join(", "),
            LOG_LEVELS.len() - 1
        )
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("bevpack")
        .about("Beverage packaging product catalog")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("8080")
                .env("BEVPACK_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Log level: error, warn, info, debug or trace; repeat -v to raise it")
                .env("BEVPACK_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(parse_log_level),
        );

    site::with_args(command)
}

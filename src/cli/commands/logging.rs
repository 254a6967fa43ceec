use clap::{builder::ValueParser, Arg, ArgAction, ArgMatches, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Accepted by `ADMIN_PAGER_LOG_LEVEL`, quietest first.
pub const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// Parses a level name into the same count `-v` flags produce.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> std::result::Result<u8, String> {
        let level = level.to_lowercase();
        LEVEL_NAMES
            .iter()
            .position(|name| *name == level)
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("expected one of: {}", LEVEL_NAMES.join(", ")))
    })
}

/// Log level selected by `-v` flags or `ADMIN_PAGER_LOG_LEVEL`. Defaults to errors only.
#[must_use]
pub fn level(matches: &ArgMatches) -> Level {
    let count = matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0);
    LEVELS[usize::from(count).min(LEVELS.len() - 1)]
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more to stderr, repeat for more detail (-v warn .. -vvvv trace)")
            .long_help(
                "Log more to stderr: -v warn, -vv info, -vvv debug, -vvvv trace. \
                 ADMIN_PAGER_LOG_LEVEL takes a level name instead. RUST_LOG overrides both.",
            )
            .env("ADMIN_PAGER_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_from(args: &[&str]) -> ArgMatches {
        with_args(Command::new("admin-pager")).get_matches_from(args)
    }

    #[test]
    fn defaults_to_errors_only() {
        temp_env::with_var("ADMIN_PAGER_LOG_LEVEL", None::<&str>, || {
            assert_eq!(level(&matches_from(&["admin-pager"])), Level::ERROR);
        });
    }

    #[test]
    fn counts_verbose_flags() {
        temp_env::with_var("ADMIN_PAGER_LOG_LEVEL", None::<&str>, || {
            let matches = matches_from(&["admin-pager", "-vvv"]);
            assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(3));
            assert_eq!(level(&matches), Level::DEBUG);
        });
    }

    #[test]
    fn extra_flags_cap_at_trace() {
        temp_env::with_var("ADMIN_PAGER_LOG_LEVEL", None::<&str>, || {
            let matches = matches_from(&["admin-pager", "-vvvvvvv"]);
            assert_eq!(level(&matches), Level::TRACE);
        });
    }

    #[test]
    fn named_levels_from_env() {
        for (name, expected) in LEVEL_NAMES.iter().zip(LEVELS) {
            temp_env::with_var("ADMIN_PAGER_LOG_LEVEL", Some(name.to_uppercase()), || {
                assert_eq!(level(&matches_from(&["admin-pager"])), expected, "{name}");
            });
        }
    }

    #[test]
    fn numeric_env_level_is_rejected() {
        temp_env::with_var("ADMIN_PAGER_LOG_LEVEL", Some("3"), || {
            let result = with_args(Command::new("admin-pager")).try_get_matches_from(["admin-pager"]);
            let error = result.expect_err("numbers are not level names");
            assert!(error.to_string().contains("error, warn, info, debug, trace"));
        });
    }
}

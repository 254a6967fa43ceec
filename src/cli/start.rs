use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Parses the command line, sets up logging and returns the action to run.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the arguments do not
/// describe a runnable action
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(commands::logging::level(&matches))?;

    dispatch::handler(&matches)
}

//! Maps validated CLI arguments to the action the binary runs.

use crate::cli::actions::{list::Args, Action};
use crate::cli::commands::{view, ARG_FILE};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Map validated CLI matches to a list action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let file = matches
        .get_one::<String>(ARG_FILE)
        .map(PathBuf::from)
        .context("missing required argument: --file")?;

    let view = view::Options::parse(matches);

    Ok(Action::List(Args {
        file,
        search: view.search,
        sort: view.sort,
        descending: view.descending,
        per_page: view.per_page,
        page: view.page,
    }))
}

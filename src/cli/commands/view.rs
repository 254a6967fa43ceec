use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use clap::{Arg, ArgAction, ArgMatches, Command};

pub const ARG_SEARCH: &str = "search";
pub const ARG_SORT: &str = "sort";
pub const ARG_DESCENDING: &str = "descending";
pub const ARG_PER_PAGE: &str = "per-page";
pub const ARG_PAGE: &str = "page";

/// Search, sort and paging options for a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub descending: bool,
    pub per_page: usize,
    pub page: usize,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let read_optional = |id: &str| -> Option<String> {
            matches
                .get_one::<String>(id)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            search: read_optional(ARG_SEARCH),
            sort: read_optional(ARG_SORT),
            descending: matches.get_flag(ARG_DESCENDING),
            per_page: matches
                .get_one::<usize>(ARG_PER_PAGE)
                .copied()
                .unwrap_or(DEFAULT_ITEMS_PER_PAGE),
            page: matches.get_one::<usize>(ARG_PAGE).copied().unwrap_or(1),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SEARCH)
                .short('s')
                .long(ARG_SEARCH)
                .help("Only list users whose name, nickname, email or id contains this text")
                .env("ADMIN_PAGER_SEARCH"),
        )
        .arg(
            Arg::new(ARG_SORT)
                .long(ARG_SORT)
                .help("Sort by field, example: name, email, created_at")
                .env("ADMIN_PAGER_SORT"),
        )
        .arg(
            Arg::new(ARG_DESCENDING)
                .long(ARG_DESCENDING)
                .help("Sort in descending order")
                .env("ADMIN_PAGER_DESCENDING")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_PER_PAGE)
                .short('n')
                .long(ARG_PER_PAGE)
                .help("Users per page: 10, 20, 50, 100, 200 or 500")
                .default_value("20")
                .env("ADMIN_PAGER_PER_PAGE")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new(ARG_PAGE)
                .short('p')
                .long(ARG_PAGE)
                .help("Page to show, starting at 1")
                .default_value("1")
                .env("ADMIN_PAGER_PAGE")
                .value_parser(clap::value_parser!(usize)),
        )
}

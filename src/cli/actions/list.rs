use crate::{
    pagination::{PageEntry, PagedCollection, ITEMS_PER_PAGE_OPTIONS},
    users::{self, UserAdvanced},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, io::Write, path::PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct Args {
    pub file: PathBuf,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub descending: bool,
    pub per_page: usize,
    pub page: usize,
}

/// One rendered page of the user list.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub page: usize,
    pub pages: usize,
    pub per_page: usize,
    pub total: usize,
    pub start_row: usize,
    pub end_row: usize,
    pub search: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub descending: bool,
    pub entries: &'a [PageEntry],
    pub items: Vec<&'a UserAdvanced>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(collection: &'a PagedCollection<UserAdvanced>) -> Self {
        Self {
            page: collection.page(),
            pages: collection.pages(),
            per_page: collection.items_per_page(),
            total: collection.item_count(),
            start_row: collection.start_row(),
            end_row: collection.end_row(),
            search: collection.search_key(),
            sort: collection.sort_field(),
            descending: collection.is_sort_descending(),
            entries: collection.page_entries(),
            items: collection.page_items().collect(),
        }
    }
}

/// Parse the user list JSON.
///
/// # Errors
/// Returns an error if the input is not a JSON array of users.
pub fn parse_users(json: &str) -> Result<Vec<UserAdvanced>> {
    serde_json::from_str(json).context("Invalid user list JSON")
}

/// Build the collection for `args` and move to the requested page.
#[must_use]
pub fn paginate(users: Vec<UserAdvanced>, args: &Args) -> PagedCollection<UserAdvanced> {
    if !ITEMS_PER_PAGE_OPTIONS.contains(&args.per_page) {
        warn!(
            per_page = args.per_page,
            "page size is not one of {:?}", ITEMS_PER_PAGE_OPTIONS
        );
    }

    let mut collection = users::collection(users, args.per_page);

    if let Some(search) = &args.search {
        collection.search(search);
    }
    if let Some(field) = &args.sort {
        if !users::SORT_FIELDS.contains(&field.as_str()) {
            warn!(field = field.as_str(), "unknown sort field, order unchanged");
        }
        collection.sort(Some(field.as_str()), args.descending);
    }

    collection.set_page(args.page);
    if args.page > collection.pages() {
        warn!(
            page = args.page,
            pages = collection.pages(),
            "requested page is past the last page"
        );
    }

    collection
}

/// Execute the list action.
/// # Errors
/// Returns an error if the user file cannot be read or parsed, or stdout fails.
pub fn execute(args: &Args) -> Result<()> {
    let json = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read user list: {}", args.file.display()))?;
    let users = parse_users(&json)?;
    debug!(count = users.len(), "loaded users");

    let collection = paginate(users, args);
    info!(
        page = collection.page(),
        pages = collection.pages(),
        total = collection.item_count(),
        "listing users"
    );

    let report = Report::new(&collection);
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write report")?;
    writeln!(stdout)?;

    Ok(())
}

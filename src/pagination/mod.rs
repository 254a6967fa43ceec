//! Client-side search, sort and pagination for admin list views.
//!
//! A [`PagedCollection`] owns the full list fetched from the API and derives
//! the view the table renders: the filtered and sorted `items`, the page count,
//! the rows on the current page and the pager controls.
//!
//! Structural changes (new source, page size, search key, sort) recompute
//! everything and reset to page 1. Moving between pages only recomputes the
//! current page rows and the pager entries.
//!
//! Nothing here fails: empty sources, a zero page size, unknown sort fields and
//! out-of-range pages all resolve to empty or unchanged views.

pub mod column;
pub mod entries;
pub mod field;

pub use self::column::{ColumnSort, SortDirection};
pub use self::entries::{page_entries, PageEntry, PAGE_ENTRY_PADDING};
pub use self::field::{FieldAccessor, FieldComparator, FieldValue};

use self::field::compare_values;
use std::{collections::HashMap, fmt, ops::Range, time::Instant};
use tracing::{debug, trace};

/// Page sizes offered by the page size selector.
pub const ITEMS_PER_PAGE_OPTIONS: [usize; 6] = [10, 20, 50, 100, 200, 500];

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

type SearchMatcher<T> = Box<dyn Fn(&T, &str) -> bool>;

/// Derived item order. `Source` avoids copying when neither a filter nor a
/// sort is active.
enum View {
    Source,
    Indexed(Vec<usize>),
}

pub struct PagedCollection<T> {
    source: Vec<T>,
    items_per_page: usize,
    search_key: Option<String>,
    sort_field: Option<String>,
    is_sort_descending: bool,
    search_matcher: Option<SearchMatcher<T>>,
    accessors: HashMap<String, FieldAccessor<T>>,
    comparators: HashMap<String, FieldComparator>,

    view: View,
    item_count: usize,
    pages: usize,
    page: usize,
    page_range: Range<usize>,
    page_entries: Vec<PageEntry>,
    revision: u64,
}

impl<T> PagedCollection<T> {
    /// Creates the collection and computes the first page.
    ///
    /// Without source items the collection is empty with a single page.
    #[must_use]
    pub fn new(source: Option<Vec<T>>, items_per_page: usize) -> Self {
        let mut collection = Self {
            source: source.unwrap_or_default(),
            items_per_page,
            search_key: None,
            sort_field: None,
            is_sort_descending: false,
            search_matcher: None,
            accessors: HashMap::new(),
            comparators: HashMap::new(),
            view: View::Indexed(Vec::new()),
            item_count: 0,
            pages: 1,
            page: 1,
            page_range: 0..0,
            page_entries: Vec::new(),
            revision: 0,
        };
        collection.update_pages();
        collection
    }

    #[must_use]
    pub fn source_items(&self) -> &[T] {
        &self.source
    }

    /// Replaces the source items and recomputes from page 1.
    ///
    /// Returns the previous source.
    pub fn set_source_items(&mut self, items: Vec<T>) -> Vec<T> {
        let previous = std::mem::replace(&mut self.source, items);
        self.update_pages();
        previous
    }

    /// Mutable access to the source items.
    ///
    /// Derived views are not refreshed until [`reload`](Self::reload) is
    /// called; until then rows that no longer exist are skipped.
    pub fn source_items_mut(&mut self) -> &mut Vec<T> {
        &mut self.source
    }

    /// Removes every source item matching `predicate` and reloads when
    /// anything was removed. Returns the number of removed items.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.source.len();
        self.source.retain(|item| !predicate(item));
        let removed = before - self.source.len();
        if removed > 0 {
            self.reload();
        }
        removed
    }

    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Changes the page size. Zero empties the view.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page != self.items_per_page {
            self.items_per_page = items_per_page;
            self.update_pages();
        }
    }

    /// Filtered and sorted items across all pages.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.resolve(0..self.item_count)
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    #[must_use]
    pub const fn pages(&self) -> usize {
        self.pages
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Moves to `page` without recomputing the filtered items.
    ///
    /// The value is not clamped. A page outside `1..=pages` shows no rows.
    pub fn set_page(&mut self, page: usize) {
        if page != self.page {
            self.page = page;
            self.update_page();
        }
    }

    /// Items on the current page.
    pub fn page_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.resolve(self.page_range.clone())
    }

    #[must_use]
    pub fn page_item_count(&self) -> usize {
        self.page_range.len()
    }

    #[must_use]
    pub fn page_entries(&self) -> &[PageEntry] {
        &self.page_entries
    }

    #[must_use]
    pub fn search_key(&self) -> Option<&str> {
        self.search_key.as_deref()
    }

    #[must_use]
    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref()
    }

    #[must_use]
    pub const fn is_sort_descending(&self) -> bool {
        self.is_sort_descending
    }

    /// First row number on the current page, 1-based.
    #[must_use]
    pub const fn start_row(&self) -> usize {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            .saturating_add(1)
    }

    /// Last row number on the current page, 1-based and inclusive.
    #[must_use]
    pub fn end_row(&self) -> usize {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            .saturating_add(self.page_range.len())
    }

    /// Counter bumped on every full recomputation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Recomputes everything from the current source, e.g. after editing it
    /// through [`source_items_mut`](Self::source_items_mut).
    pub fn reload(&mut self) {
        self.update_pages();
    }

    /// Sorts by `field`. `None` or an empty name restores source order.
    ///
    /// Does nothing when neither the field nor the direction changed.
    pub fn sort(&mut self, field: Option<&str>, is_descending: bool) {
        let field = field.filter(|f| !f.is_empty());
        if field == self.sort_field.as_deref() && is_descending == self.is_sort_descending {
            return;
        }
        self.sort_field = field.map(ToString::to_string);
        self.is_sort_descending = is_descending;
        self.update_pages();
    }

    /// Filters by `key` with the installed matcher. An empty key clears it.
    ///
    /// An empty key and no key are the same state, so `search("")` without an
    /// active search keeps the current page.
    pub fn search(&mut self, key: &str) {
        let key = Some(key).filter(|k| !k.is_empty());
        if key == self.search_key.as_deref() {
            return;
        }
        self.search_key = key.map(ToString::to_string);
        self.update_pages();
    }

    /// Installs the search predicate. Applies from the next recomputation.
    pub fn set_search_matcher<F>(&mut self, matcher: F)
    where
        F: Fn(&T, &str) -> bool + 'static,
    {
        self.search_matcher = Some(Box::new(matcher));
    }

    /// Registers how to read `field` from an item. Sorting by a field without
    /// an accessor leaves the order unchanged.
    pub fn set_field_accessor<F>(&mut self, field: &str, accessor: F)
    where
        F: Fn(&T) -> Option<FieldValue> + 'static,
    {
        self.accessors.insert(field.to_string(), Box::new(accessor));
    }

    /// Overrides the primitive ordering of present values for `field`.
    pub fn set_field_comparator<F>(&mut self, field: &str, comparator: F)
    where
        F: Fn(&FieldValue, &FieldValue) -> std::cmp::Ordering + 'static,
    {
        self.comparators
            .insert(field.to_string(), Box::new(comparator));
    }

    pub fn next_page(&mut self) {
        if self.page < self.pages {
            self.set_page(self.page + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.set_page(self.page - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(self.pages);
    }

    fn resolve(&self, range: Range<usize>) -> impl Iterator<Item = &T> + '_ {
        let source = &self.source;
        let mut direct: &[T] = &[];
        let mut indexed: &[usize] = &[];
        match &self.view {
            View::Source => {
                let end = range.end.min(source.len());
                direct = &source[range.start.min(end)..end];
            }
            View::Indexed(indices) => {
                let end = range.end.min(indices.len());
                indexed = &indices[range.start.min(end)..end];
            }
        }
        direct
            .iter()
            .chain(indexed.iter().filter_map(move |&index| source.get(index)))
    }

    fn update_pages(&mut self) {
        self.revision = self.revision.wrapping_add(1);

        if self.source.is_empty() || self.items_per_page == 0 {
            self.view = View::Indexed(Vec::new());
            self.item_count = 0;
            self.pages = 1;
            self.page = 1;
            self.update_page();
            debug!(
                items_per_page = self.items_per_page,
                "no items to paginate"
            );
            return;
        }

        let mut indices: Option<Vec<usize>> = None;

        if let (Some(matcher), Some(key)) = (&self.search_matcher, &self.search_key) {
            indices = Some(
                self.source
                    .iter()
                    .enumerate()
                    .filter(|&(_, item)| matcher(item, key.as_str()))
                    .map(|(index, _)| index)
                    .collect(),
            );
        }

        if let Some(field) = &self.sort_field {
            let mut sorted = indices.unwrap_or_else(|| (0..self.source.len()).collect());
            if let Some(accessor) = self.accessors.get(field) {
                let started = Instant::now();
                let comparator = self.comparators.get(field);
                let descending = self.is_sort_descending;

                let mut keyed: Vec<(usize, Option<FieldValue>)> = sorted
                    .iter()
                    .map(|&index| (index, accessor(&self.source[index])))
                    .collect();
                keyed.sort_by(|(_, a), (_, b)| {
                    compare_values(a.as_ref(), b.as_ref(), comparator, descending)
                });
                sorted = keyed.into_iter().map(|(index, _)| index).collect();

                debug!(
                    field = field.as_str(),
                    descending,
                    elapsed = ?started.elapsed(),
                    "sorted items"
                );
            } else {
                debug!(field = field.as_str(), "no accessor for sort field");
            }
            indices = Some(sorted);
        }

        match indices {
            Some(indices) => {
                self.item_count = indices.len();
                self.view = View::Indexed(indices);
            }
            None => {
                self.item_count = self.source.len();
                self.view = View::Source;
            }
        }

        self.pages = self.item_count.div_ceil(self.items_per_page).max(1);
        self.page = 1;
        self.update_page();

        debug!(
            source = self.source.len(),
            items = self.item_count,
            pages = self.pages,
            "recomputed pages"
        );
    }

    fn update_page(&mut self) {
        self.page_entries = page_entries(self.page, self.pages);

        self.page_range = if self.page < 1 || self.page > self.pages {
            0..0
        } else {
            let start = (self.page - 1) * self.items_per_page;
            let end = (start + self.items_per_page).min(self.item_count);
            start..end
        };

        trace!(
            page = self.page,
            pages = self.pages,
            rows = self.page_range.len(),
            "updated page"
        );
    }
}

impl<T> Default for PagedCollection<T> {
    fn default() -> Self {
        Self::new(None, DEFAULT_ITEMS_PER_PAGE)
    }
}

impl<T> From<Vec<T>> for PagedCollection<T> {
    fn from(source: Vec<T>) -> Self {
        Self::new(Some(source), DEFAULT_ITEMS_PER_PAGE)
    }
}

impl<T: fmt::Debug> fmt::Debug for PagedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedCollection")
            .field("source_len", &self.source.len())
            .field("items_per_page", &self.items_per_page)
            .field("search_key", &self.search_key)
            .field("sort_field", &self.sort_field)
            .field("is_sort_descending", &self.is_sort_descending)
            .field("item_count", &self.item_count)
            .field("pages", &self.pages)
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

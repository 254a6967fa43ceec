use serde::Serialize;

/// Number of pages shown on each side of the current page.
pub const PAGE_ENTRY_PADDING: usize = 3;

/// One control in a pager: a page link or an ellipsis gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageEntry {
    Page { page: usize, is_current: bool },
    Ellipsis,
}

impl PageEntry {
    /// Page number, `None` for an ellipsis.
    #[must_use]
    pub const fn page(&self) -> Option<usize> {
        match self {
            Self::Page { page, .. } => Some(*page),
            Self::Ellipsis => None,
        }
    }

    #[must_use]
    pub const fn is_current(&self) -> bool {
        matches!(self, Self::Page { is_current: true, .. })
    }

    #[must_use]
    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

/// Builds the pager window around `page` for a collection of `pages` pages.
///
/// The window covers `page - 3 ..= page + 3` clamped to `1..=pages`. Page 1 and
/// the last page are always reachable; gaps of more than one page between them
/// and the window are shown as an ellipsis.
#[must_use]
pub fn page_entries(page: usize, pages: usize) -> Vec<PageEntry> {
    let start = page.saturating_sub(PAGE_ENTRY_PADDING).max(1);
    let end = page.saturating_add(PAGE_ENTRY_PADDING).min(pages);

    let mut entries = Vec::with_capacity(end.saturating_sub(start) + 5);

    if start > 1 {
        entries.push(PageEntry::Page {
            page: 1,
            is_current: false,
        });
    }
    if start > 2 {
        entries.push(PageEntry::Ellipsis);
    }

    entries.extend((start..=end).map(|i| PageEntry::Page {
        page: i,
        is_current: i == page,
    }));

    if end.saturating_add(1) < pages {
        entries.push(PageEntry::Ellipsis);
    }
    if end < pages {
        entries.push(PageEntry::Page {
            page: pages,
            is_current: false,
        });
    }

    entries
}

//! # admin-pager
//!
//! Client-side list handling for the identity admin console. Admin list views
//! fetch complete lists from the API once and let the operator search, sort and
//! page through them without further requests.
//!
//! - [`pagination`] holds the generic [`pagination::PagedCollection`] with
//!   its pager window and header sort cycle.
//! - [`users`] wires the admin user list into a collection: search across
//!   name, nickname, email and id, plus accessors for every sortable column.
//! - [`cli`] is the `admin-pager` binary, which pages through a user list
//!   exported from the admin users endpoint and prints one page as JSON.

pub mod cli;
pub mod pagination;
pub mod users;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

//! Admin user list bindings. The users view fetches every account once and
//! lets the operator search, sort and page through them client-side.

pub mod types;

pub use self::types::{Group, User, UserAdvanced};

use crate::pagination::{FieldValue, PagedCollection};
use tracing::debug;

/// Columns the user table can be sorted by.
pub const SORT_FIELDS: [&str; 9] = [
    "id",
    "name",
    "nickname",
    "email",
    "is_active",
    "is_email_confirmed",
    "created_at",
    "modified_at",
    "email_confirmed_at",
];

/// Case-insensitive match on name, nickname and email, plain match on the id.
#[must_use]
pub fn matches_search(user: &UserAdvanced, key: &str) -> bool {
    let key = key.to_lowercase();
    let contains = |value: &str| value.to_lowercase().contains(&key);

    contains(user.user.name.as_str())
        || user.user.id.to_string().contains(&key)
        || user.user.nickname.as_deref().is_some_and(contains)
        || user.user.email.as_deref().is_some_and(contains)
}

fn text(value: Option<&String>) -> Option<FieldValue> {
    value.map(|v| FieldValue::Text(v.clone()))
}

/// Installs the user search matcher and the accessors for [`SORT_FIELDS`].
pub fn install(collection: &mut PagedCollection<UserAdvanced>) {
    collection.set_search_matcher(matches_search);

    collection.set_field_accessor("id", |u| Some(u.user.id.into()));
    collection.set_field_accessor("name", |u| Some(u.user.name.as_str().into()));
    collection.set_field_accessor("nickname", |u| text(u.user.nickname.as_ref()));
    collection.set_field_accessor("email", |u| text(u.user.email.as_ref()));
    collection.set_field_accessor("is_active", |u| Some(u.user.is_active.into()));
    collection.set_field_accessor("is_email_confirmed", |u| Some(u.is_email_confirmed.into()));
    collection.set_field_accessor("created_at", |u| text(u.created_at.as_ref()));
    collection.set_field_accessor("modified_at", |u| text(u.modified_at.as_ref()));
    collection.set_field_accessor("email_confirmed_at", |u| text(u.email_confirmed_at.as_ref()));
}

/// Builds a user collection with search and sorting wired up.
#[must_use]
pub fn collection(users: Vec<UserAdvanced>, items_per_page: usize) -> PagedCollection<UserAdvanced> {
    let mut collection = PagedCollection::new(Some(users), items_per_page);
    install(&mut collection);
    collection
}

/// Drops a deleted user from the list. Returns `false` if the id is unknown.
pub fn remove_user(collection: &mut PagedCollection<UserAdvanced>, id: i64) -> bool {
    let Some(index) = collection
        .source_items()
        .iter()
        .position(|user| user.user.id == id)
    else {
        return false;
    };

    collection.source_items_mut().remove(index);
    collection.reload();
    debug!(id, "removed user from list");
    true
}

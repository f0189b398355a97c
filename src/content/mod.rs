//! Content items and their on-disk JSON form.

/// Plain-text video description.
pub mod description;
/// The [`ContentItem`](item::ContentItem) value type and its builder.
pub mod item;

pub use description::{DescriptionHeader, render_description};
pub use item::{ContentItem, ContentItemBuilder, read_items_json, write_items_json};

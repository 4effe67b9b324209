pub mod content_items;

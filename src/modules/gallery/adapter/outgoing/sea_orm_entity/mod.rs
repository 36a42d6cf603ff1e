pub mod gallery_items;

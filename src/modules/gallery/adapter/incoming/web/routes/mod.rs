mod delete_gallery_item;
mod get_gallery;
mod save_gallery;

pub use delete_gallery_item::delete_gallery_item_handler;
pub use get_gallery::get_gallery_handler;
pub use save_gallery::save_gallery_handler;

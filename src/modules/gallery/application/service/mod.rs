pub mod delete_gallery_item_service;
pub mod get_gallery_service;
pub mod save_gallery_service;

use crate::gallery::application::ports::incoming::use_cases::GalleryItemView;
use crate::gallery::application::ports::outgoing::gallery_repository::GalleryItemRecord;
use crate::storage::application::domain::location::public_url;

pub(crate) fn record_to_view(record: GalleryItemRecord, public_base_url: &str) -> GalleryItemView {
    GalleryItemView {
        id: record.id,
        title: record.title,
        category: record.category,
        url: public_url(&record.location, public_base_url),
        order_index: record.order_index,
    }
}

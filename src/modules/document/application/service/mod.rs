pub mod delete_document_service;
pub mod get_documents_service;
pub mod save_documents_service;

use crate::document::application::ports::incoming::use_cases::DocumentView;
use crate::document::application::ports::outgoing::document_repository::DocumentRecord;
use crate::storage::application::domain::location::public_url;

pub(crate) fn record_to_view(record: DocumentRecord, public_base_url: &str) -> DocumentView {
    DocumentView {
        id: record.id,
        title: record.title,
        category: record.category,
        url: public_url(&record.location, public_base_url),
        order_index: record.order_index,
    }
}

mod delete_document;
mod get_documents;
mod save_documents;

pub use delete_document::delete_document_handler;
pub use get_documents::get_documents_handler;
pub use save_documents::save_documents_handler;

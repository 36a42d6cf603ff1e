mod create_folder;
mod delete_folder;
mod delete_object;
mod init_upload;
mod list_folder;

pub use create_folder::create_folder_handler;
pub use delete_folder::delete_folder_handler;
pub use delete_object::delete_object_handler;
pub use init_upload::init_upload_handler;
pub use list_folder::list_folder_handler;

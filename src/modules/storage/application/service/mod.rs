pub mod browse_folder_service;
pub mod create_folder_service;
pub mod delete_folder_service;
pub mod delete_object_service;
pub mod init_upload_service;

mod create_project;
mod delete_project;
mod get_projects;
mod save_projects;
mod update_project;

pub use create_project::create_project_handler;
pub use create_project::ProjectRequestDto;
pub use delete_project::delete_project_handler;
pub use get_projects::get_projects_handler;
pub use save_projects::save_projects_handler;
pub use update_project::update_project_handler;

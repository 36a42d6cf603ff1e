mod get_resume;
mod save_certifications;
mod save_education;
mod save_experience;

pub use get_resume::get_resume_handler;
pub use save_certifications::save_certifications_handler;
pub use save_education::save_education_handler;
pub use save_experience::save_experience_handler;

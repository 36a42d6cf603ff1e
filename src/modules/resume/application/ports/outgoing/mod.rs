pub mod resume_repository;

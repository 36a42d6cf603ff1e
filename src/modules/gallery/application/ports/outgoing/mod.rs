pub mod gallery_repository;

pub mod auth;
pub mod contact;
pub mod document;
pub mod gallery;
pub mod profile;
pub mod project;
pub mod resume;
pub mod skill;
pub mod storage;

pub mod certifications;
pub mod education;
pub mod experience;

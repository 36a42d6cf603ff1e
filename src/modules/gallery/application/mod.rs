pub mod gallery_use_cases;
pub mod ports;
pub mod service;

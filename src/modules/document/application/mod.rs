pub mod document_use_cases;
pub mod ports;
pub mod service;

pub mod domain;
pub mod ports;
pub mod service;
pub mod storage_use_cases;

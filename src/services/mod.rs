pub mod dispatch_service;
pub mod extract_service;
pub mod gateway;

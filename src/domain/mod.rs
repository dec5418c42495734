pub mod message;
pub mod recipient;
pub mod report;

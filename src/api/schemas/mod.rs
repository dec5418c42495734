pub mod recipients;
pub mod send;

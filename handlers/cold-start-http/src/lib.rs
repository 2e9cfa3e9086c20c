//! Cold-start HTTP function

pub mod handler;

pub use handler::ColdStart;

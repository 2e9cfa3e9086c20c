//! Empty HTTP function

pub mod handler;

pub use handler::handle;

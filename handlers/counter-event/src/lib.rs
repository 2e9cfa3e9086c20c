//! Counter event function

pub mod handler;

pub use handler::handle;

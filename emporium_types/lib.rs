pub mod common;
pub mod entity;
pub mod errors;

pub use errors::Result;

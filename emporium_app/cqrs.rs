mod command;
mod context;
mod query;

pub mod commands;
pub mod queries;

pub use command::*;
pub use context::*;
pub use query::*;

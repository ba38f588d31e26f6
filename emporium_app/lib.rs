pub mod bus;
pub mod change_set;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod dto;
pub mod queries_handlers;
pub mod repository;
pub mod services;
pub mod session;
pub mod uow;
pub mod user_context;
pub mod validation;

pub mod test_utils;

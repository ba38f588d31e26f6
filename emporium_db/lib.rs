pub mod seed;
pub mod session;
pub mod uow;

mod connection;
mod sql;

pub use connection::{
    DbPool, establish_connection_pool, establish_test_connection_pool, run_migrations,
};
pub use seed::seed_delivery_methods;

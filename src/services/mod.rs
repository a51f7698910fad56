// Service exports
pub mod postgres;

pub use postgres::{NewUser, PostgresClient, PostgresError};

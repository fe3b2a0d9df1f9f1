pub mod connection;
pub mod players;
pub mod rankings;
pub mod setup;
pub mod statistics;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use setup::open_database;
pub use store::{CommitBatch, RecordStore, SqliteStore};

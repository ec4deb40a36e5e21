mod connection;
mod key_value_store;

pub use connection::SqliteStorage;
pub use key_value_store::SqliteKeyValueStore;

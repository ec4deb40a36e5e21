pub mod traits;
pub mod sqlite;

pub use traits::KeyValueStore;
pub use sqlite::{SqliteKeyValueStore, SqliteStorage};

#[cfg(test)]
pub use traits::MockKeyValueStore;

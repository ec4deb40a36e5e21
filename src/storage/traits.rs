use crate::errors::BlogrollResult;

/// Synchronous string key/value store backing the widget cache.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> BlogrollResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> BlogrollResult<()>;
    fn remove_item(&self, key: &str) -> BlogrollResult<()>;
    fn clear(&self) -> BlogrollResult<()>;
}

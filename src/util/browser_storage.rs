//! `window.localStorage` as a [`KeyValueStore`].

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use layout::store::{KeyValueStore, StoreError};

/// Origin-scoped browser storage. Looks the storage object up on every call
/// so a denied or missing `localStorage` surfaces as an error, not a panic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(err) => {
            log::warn!("localStorage access denied: {err:?}");
            Err(StoreError::Unavailable)
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|err| StoreError::ReadFailed {
                key: key.to_owned(),
                reason: format!("{err:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|err| StoreError::WriteRejected {
                key: key.to_owned(),
                reason: format!("{err:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

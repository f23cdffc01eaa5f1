//! Flat key-value persistence used by stats and settings.

use anyhow::{Context, Result, anyhow};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Browser `window.localStorage`.
pub struct LocalStorage {
    store: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let win = web_sys::window().context("no global window")?;
        let store = win
            .local_storage()
            .map_err(|e| anyhow!("localStorage access denied: {:?}", e))?
            .context("localStorage unavailable")?;
        Ok(Self { store })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.store
            .get_item(key)
            .map_err(|e| anyhow!("reading '{}': {:?}", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.store
            .set_item(key, value)
            .map_err(|e| anyhow!("writing '{}': {:?}", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.store
            .remove_item(key)
            .map_err(|e| anyhow!("removing '{}': {:?}", key, e))
    }
}

/// In-process store; backs tests and browsers without localStorage.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage when available, otherwise a session-only memory store.
pub fn open_store() -> Rc<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(ls) => Rc::new(ls),
        Err(e) => {
            log::warn!("falling back to in-memory storage: {:#}", e);
            Rc::new(MemoryStore::default())
        }
    }
}

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// Where the bearer token is kept between requests. Browser builds back this with
/// local storage; everything else can use [`MemoryTokenStore`].
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn store(&self, token: String);
    fn clear(&self);
}

#[derive(Clone)]
pub struct MemoryTokenStore {
    key: String,
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        slots.get(&self.key).cloned()
    }

    fn store(&self, token: String) {
        log::debug!("storing token under {}", self.key);
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.insert(self.key.clone(), token);
    }

    fn clear(&self) {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.remove(&self.key);
    }
}

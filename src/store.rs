use std::collections::HashMap;
use std::sync::RwLock;

pub trait ScoreStore: Send + Sync {
    fn player_score(&self, name: &str) -> u32;
    fn record_win(&self, name: &str);
}

pub struct InMemoryStore {
    inner: RwLock<HashMap<String, u32>>,
}

impl InMemoryStore {
    pub fn new() -> InMemoryStore {
        InMemoryStore {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl ScoreStore for InMemoryStore {
    fn player_score(&self, name: &str) -> u32 {
        let inner = self.inner.read().unwrap();
        inner.get(name).copied().unwrap_or(0)
    }

    fn record_win(&self, name: &str) {
        let mut inner = self.inner.write().unwrap();
        *inner.entry(name.to_string()).or_insert(0) += 1;
    }
}

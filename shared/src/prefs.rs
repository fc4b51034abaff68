use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key/value capability backing user preferences.
///
/// Implementations never fail: unreadable entries behave as absent and writes
/// are best-effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, used in tests and when no browser storage is reachable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    Language,
    GameSearch,
    RankRange,
}

impl PrefKey {
    pub const ALL: [PrefKey; 3] = [PrefKey::Language, PrefKey::GameSearch, PrefKey::RankRange];

    pub fn as_str(self) -> &'static str {
        match self {
            PrefKey::Language => "currentLang",
            PrefKey::GameSearch => "gameSearch",
            PrefKey::RankRange => "rankRange",
        }
    }
}

/// The three persisted dashboard preferences.
#[derive(Debug, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self, key: PrefKey, value: &str) {
        self.store.set(key.as_str(), value);
    }

    /// Stored value, or `fallback` when the entry is missing or empty.
    pub fn load(&self, key: PrefKey, fallback: &str) -> String {
        self.store
            .get(key.as_str())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| fallback.to_owned())
    }

    pub fn clear(&self, key: PrefKey) {
        self.store.remove(key.as_str());
    }

    pub fn clear_all(&self) {
        for key in PrefKey::ALL {
            self.clear(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_fallback_when_missing_or_empty() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.load(PrefKey::RankRange, "1-20"), "1-20");

        prefs.save(PrefKey::RankRange, "");
        assert_eq!(prefs.load(PrefKey::RankRange, "1-20"), "1-20");

        prefs.save(PrefKey::RankRange, "21-40");
        assert_eq!(prefs.load(PrefKey::RankRange, "1-20"), "21-40");
    }

    #[test]
    fn uses_well_known_storage_keys() {
        let prefs = Preferences::new(MemoryStore::new());
        prefs.save(PrefKey::Language, "ja");
        prefs.save(PrefKey::GameSearch, "go");
        prefs.save(PrefKey::RankRange, "5-10");

        let store = prefs.store();
        assert_eq!(store.get("currentLang").as_deref(), Some("ja"));
        assert_eq!(store.get("gameSearch").as_deref(), Some("go"));
        assert_eq!(store.get("rankRange").as_deref(), Some("5-10"));
    }

    #[test]
    fn clear_all_removes_every_preference() {
        let prefs = Preferences::new(MemoryStore::new());
        for key in PrefKey::ALL {
            prefs.save(key, "x");
        }
        prefs.store().set("unrelated", "kept");

        prefs.clear_all();

        assert_eq!(prefs.store().len(), 1);
        assert_eq!(prefs.store().get("unrelated").as_deref(), Some("kept"));
    }
}

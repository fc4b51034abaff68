use streamtree_shared::KeyValueStore;

/// `window.localStorage`, holding raw strings. Storage that is blocked or
/// missing reads as empty and swallows writes.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage()
            && storage.set_item(key, value).is_err()
        {
            web_sys::console::warn_1(&format!("Could not save preference {key}").into());
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

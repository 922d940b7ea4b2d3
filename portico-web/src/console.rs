//! Shared application context for the SPA.
//!
//! One [`Console`] is constructed on first use and lives for the page's
//! lifetime. Browser local storage backs the persistence seam, so the
//! tenant/user identifiers survive a reload.

use client::Console;
use client::storage::KeyValueStore;
use gloo_storage::{LocalStorage, Storage};
use once_cell::unsync::OnceCell;
use shared::config::ConsoleConfig;
use std::sync::Arc;

thread_local! {
    static SHARED_CONSOLE: OnceCell<Console> = OnceCell::new();
}

/// Browser local storage behind the client's persistence seam.
#[derive(Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = LocalStorage::set(key, value.to_string());
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// The process-wide console context.
pub fn shared() -> Console {
    SHARED_CONSOLE.with(|cell| {
        cell.get_or_init(|| Console::new(ConsoleConfig::new(), Arc::new(BrowserStorage)))
            .clone()
    })
}

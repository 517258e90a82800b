//! # Application State
//!
//! Core business state for naiken. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Store                  // records + id counter
//! ├── status_message: String        // title bar text, one per action
//! └── config: ResolvedConfig        // currency + form defaults
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations. The store is
//! owned here rather than living in a static so tests can spin up as many
//! independent instances as they like.

use crate::core::config::ResolvedConfig;
use crate::core::store::Store;

pub struct App {
    pub store: Store,
    pub status_message: String,
    pub config: ResolvedConfig,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            store: Store::new(),
            status_message: String::from("Record an apartment to get started"),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Record an apartment to get started");
        assert!(app.store.is_empty());
        assert_eq!(app.config.currency, "¥");
    }
}

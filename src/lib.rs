//! Admin Console State Library
//!
//! Provides the shared session state layer for the admin console front-end,
//! including:
//! - Admin menu state (sidebar collapse flag)
//! - User settings state (locale, access token, theme overrides) with
//!   durable key-value persistence
//! - Icon descriptor helper for the view layer
//!
//! The storage medium is abstracted through the [`SettingsStore`] trait so
//! the layer is testable without a real browser-style environment; ship
//! adapters cover a JSON settings file and plain memory.

pub mod error;
pub mod i18n;
pub mod icon;
pub mod session;
pub mod state;
pub mod store;
pub mod theme;

// Re-export common types
pub use error::{StateError, StateResult};
pub use i18n::Language;
pub use icon::{render_icon, render_icon_sized, Icon, DEFAULT_ICON_SIZE};
pub use session::{SessionState, SessionStateBuilder};
pub use state::{AdminMenuState, SettingsState};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
pub use theme::{ThemeCommon, ThemeOverrides, ThemeVars};

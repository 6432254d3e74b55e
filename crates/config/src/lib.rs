//! `gridbase-config` — user settings.

pub mod settings;

pub use settings::Settings;

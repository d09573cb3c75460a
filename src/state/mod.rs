mod persistence;

pub use persistence::{SelectionSettings, SettingsFile};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::codec::{self, EncodedRegions};
use crate::error::SettingsResult;
use crate::selection::SelectionMode;
use crate::store::{NO_REGION, RegionStore};

/// The `select` section of the settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SelectionSettings {
    /// Shape used for new drags and detector batches
    pub ellipse_mode: bool,
    /// Region shown in the edit panel, `0` for none
    pub selected: usize,
    /// Encoded box regions
    pub boxes: String,
    /// Encoded ellipse regions
    pub ellipses: String,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            ellipse_mode: true,
            selected: NO_REGION,
            boxes: String::new(),
            ellipses: String::new(),
        }
    }
}

impl SelectionSettings {
    /// Capture the current store and GUI selection state
    pub fn capture(store: &RegionStore, mode: SelectionMode, selected: usize) -> Self {
        let EncodedRegions { boxes, ellipses } = codec::encode(store);
        Self {
            ellipse_mode: mode.is_ellipse(),
            selected: if store.is_valid(selected) { selected } else { NO_REGION },
            boxes,
            ellipses,
        }
    }

    /// Rebuild `store` from these settings.
    ///
    /// Returns the selection mode and the selected index, which falls back to
    /// `0` when it no longer addresses a loaded region.
    pub fn restore(&self, store: &RegionStore) -> (SelectionMode, usize) {
        store.parse(&self.boxes, &self.ellipses);

        let selected = if store.is_valid(self.selected) {
            self.selected
        } else {
            if self.selected != NO_REGION {
                log::warn!("Selected region {} no longer exists", self.selected);
            }
            NO_REGION
        };

        (SelectionMode::from_ellipse_flag(self.ellipse_mode), selected)
    }
}

/// Settings document on disk
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the settings, or the defaults when the file does not exist yet
    pub fn load(&self) -> SettingsResult<SelectionSettings> {
        if !self.path.exists() {
            log::info!("No settings at {}, using defaults", self.path.display());
            return Ok(SelectionSettings::default());
        }

        let json = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn save(&self, settings: &SelectionSettings) -> SettingsResult<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings: SelectionSettings = serde_json::from_str(r#"{"boxes": "1,2,3,4"}"#).unwrap();
        assert!(settings.ellipse_mode);
        assert_eq!(settings.selected, NO_REGION);
        assert_eq!(settings.boxes, "1,2,3,4");
        assert_eq!(settings.ellipses, "");
    }

    #[test]
    fn test_capture_drops_stale_selection() {
        let store = RegionStore::new();
        store.add(SelectionMode::Box, 0, 0, 5, 5);
        let settings = SelectionSettings::capture(&store, SelectionMode::Box, 4);
        assert_eq!(settings.selected, NO_REGION);
        assert!(!settings.ellipse_mode);
        assert_eq!(settings.boxes, "0,0,5,5");
    }

    #[test]
    fn test_restore_resets_stale_selection() {
        let settings = SelectionSettings {
            ellipse_mode: false,
            selected: 3,
            boxes: "0,0,5,5".to_string(),
            ellipses: "1,1,2,2".to_string(),
        };
        let store = RegionStore::new();
        let (mode, selected) = settings.restore(&store);
        assert_eq!(mode, SelectionMode::Box);
        assert_eq!(selected, NO_REGION);
        assert_eq!(store.count(), 2);
    }
}

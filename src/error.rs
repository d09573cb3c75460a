use thiserror::Error;

/// Errors that can occur while loading or saving the settings document
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while writing region crops
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to prepare export directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("No enabled regions to export")]
    NothingToExport,
}

pub type SettingsResult<T> = Result<T, SettingsError>;
pub type ExportResult<T> = Result<T, ExportError>;

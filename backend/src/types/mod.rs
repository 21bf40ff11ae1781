mod environment;
mod error;
mod settings;

pub use environment::Environment;
pub use error::AppError;
pub use settings::{Settings, SettingsError, DEFAULT_SETTINGS_PATH};

mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, OcrProvider, OcrSettings, ServerSettings, Settings, SettingsError,
};

use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::environment::Environment;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_RENDER_DPI: f32 = 150.0;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub ocr: OcrSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct OcrSettings {
    pub provider: OcrProvider,
    pub language: String,
    pub datapath: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrProvider {
    Tesseract,
    Mock,
}

impl FromStr for OcrProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tesseract" => Ok(Self::Tesseract),
            "mock" => Ok(Self::Mock),
            other => Err(format!(
                "invalid ocr provider '{other}', expected tesseract or mock"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractionSettings {
    pub timeout: Duration,
    pub render_dpi: f32,
}

impl Settings {
    /// Reads all settings from the environment. Absent variables fall back
    /// to defaults; present but malformed ones are an error, not a silent
    /// fallback.
    pub fn from_env() -> Result<Self, SettingsError> {
        let server = ServerSettings {
            host: optional_var("SERVER_HOST")?.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed_var("SERVER_PORT", DEFAULT_PORT)?,
            environment: parsed_var("APP_ENVIRONMENT", Environment::Local)?,
        };

        let ocr = OcrSettings {
            provider: parsed_var("OCR_PROVIDER", OcrProvider::Tesseract)?,
            language: optional_var("OCR_LANGUAGE")?.unwrap_or_else(|| "eng".to_string()),
            datapath: optional_var("TESSDATA_PATH")?,
        };

        let extraction = ExtractionSettings {
            timeout: Duration::from_secs(parsed_var(
                "EXTRACTION_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            render_dpi: parsed_var("RENDER_DPI", DEFAULT_RENDER_DPI)?,
        };

        Ok(Self {
            server,
            ocr,
            extraction,
        })
    }
}

fn optional_var(name: &'static str) -> Result<Option<String>, SettingsError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(SettingsError::Invalid {
            name,
            reason: "value is not valid UTF-8".to_string(),
        }),
    }
}

fn parsed_var<T>(name: &'static str, default: T) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match optional_var(name)? {
        Some(raw) => raw.parse().map_err(|e: T::Err| SettingsError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::loader::ContactSource;

/// Settings that can be loaded from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhonebookConfig {
    /// File path or http(s) URL of the contact list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// File that receives debug logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl PhonebookConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: PhonebookConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// `<config dir>/phonebook/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("phonebook").join("config.json"))
    }

    /// Load the explicit path if given, otherwise the default path when it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply command-line overrides on top of the file settings
    pub fn merge(mut self, source: Option<String>, log_file: Option<PathBuf>) -> Self {
        if source.is_some() {
            self.source = source;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    pub fn resolve_source(&self) -> ContactSource {
        self.source
            .as_deref()
            .map(ContactSource::parse)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let json = r#"{"source": "https://example.com/contacts.json", "logFile": "/tmp/pb.log"}"#;
        let config: PhonebookConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.resolve_source(),
            ContactSource::Url("https://example.com/contacts.json".to_string())
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/pb.log")));
    }

    #[test]
    fn test_parse_config_minimal() {
        let config: PhonebookConfig = serde_json::from_str("{}").unwrap();
        assert!(config.source.is_none());
        assert_eq!(config.resolve_source(), ContactSource::default());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = PhonebookConfig {
            source: Some("a.json".to_string()),
            log_file: Some(PathBuf::from("a.log")),
        }
        .merge(Some("b.json".to_string()), None);

        assert_eq!(config.source.as_deref(), Some("b.json"));
        assert_eq!(config.log_file, Some(PathBuf::from("a.log")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"source": "contacts.json"}"#).unwrap();

        let config = PhonebookConfig::discover(Some(file.path())).unwrap();
        assert_eq!(
            config.resolve_source(),
            ContactSource::File(PathBuf::from("contacts.json"))
        );
    }

    #[test]
    fn test_load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let err = PhonebookConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "classdeck";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Deck presented when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,

    /// Animation time scale; 2.0 plays twice as fast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `classdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# classdeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.deck" => {
                if value.is_empty() {
                    anyhow::bail!("Invalid deck: path must not be empty.");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .deck = Some(PathBuf::from(value));
            }
            "defaults.windowed" => {
                let windowed = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => anyhow::bail!("Invalid windowed: {value}. Must be 'true' or 'false'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .windowed = Some(windowed);
            }
            "defaults.speed" => {
                let speed = value
                    .parse::<f32>()
                    .ok()
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .ok_or_else(|| {
                        anyhow::anyhow!("Invalid speed: {value}. Must be a positive number.")
                    })?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .speed = Some(speed);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.deck, defaults.windowed, defaults.speed"
            ),
        }
        Ok(())
    }

    pub fn deck(&self) -> Option<&Path> {
        self.defaults.as_ref().and_then(|d| d.deck.as_deref())
    }

    pub fn windowed(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.windowed)
            .unwrap_or(false)
    }

    pub fn speed(&self) -> f32 {
        self.defaults.as_ref().and_then(|d| d.speed).unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_valid_keys() {
        let mut config = Config::default();
        config.set("defaults.deck", "talks/ai.yaml").unwrap();
        config.set("defaults.windowed", "yes").unwrap();
        config.set("defaults.speed", "1.5").unwrap();
        assert_eq!(config.deck(), Some(Path::new("talks/ai.yaml")));
        assert!(config.windowed());
        assert_eq!(config.speed(), 1.5);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.speed", "0").is_err());
        assert!(config.set("defaults.speed", "-2").is_err());
        assert!(config.set("defaults.speed", "fast").is_err());
        assert!(config.set("defaults.windowed", "maybe").is_err());
        assert!(config.set("defaults.deck", "").is_err());
        assert!(config.set("defaults.theme", "dark").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::default();
        assert_eq!(config.deck(), None);
        assert!(!config.windowed());
        assert_eq!(config.speed(), 1.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("classdeck-config-{}", std::process::id()));
        let path = dir.join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.speed", "2").unwrap();
        config.save_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# classdeck configuration"));
        assert_eq!(Config::load_from(&path).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/classdeck.yaml")).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }
}

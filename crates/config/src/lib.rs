//! Read-only settings file plus environment overrides.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cards_core::{LayoutDirection, Settings};

pub const ENV_DIRECTION: &str = "CARDS_DIRECTION";
pub const ENV_ASSET_ROOT: &str = "CARDS_ASSET_ROOT";
pub const ENV_WELCOME: &str = "CARDS_WELCOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    File,
    Defaults,
}

#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: SettingsSource,
}

#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file when present; a missing file means defaults.
    pub fn load(&self) -> anyhow::Result<LoadedSettings> {
        let (mut settings, source) = match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let settings: Settings = serde_json::from_str(&raw)
                    .with_context(|| format!("parse settings {}", self.path.display()))?;
                (settings, SettingsSource::File)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                (Settings::default(), SettingsSource::Defaults)
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read settings {}", self.path.display()));
            }
        };
        settings.normalize();
        Ok(LoadedSettings { settings, source })
    }

    pub fn load_with_env(&self) -> anyhow::Result<LoadedSettings> {
        let mut loaded = self.load()?;
        apply_env_overrides(&mut loaded.settings, |key| std::env::var(key).ok());
        Ok(loaded)
    }
}

/// Applies `CARDS_*` overrides. Unparseable values are ignored with a warning.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(value) = lookup(ENV_DIRECTION) {
        match value.parse::<LayoutDirection>() {
            Ok(direction) => settings.direction = direction,
            Err(err) => tracing::warn!(%value, err, "ignoring {ENV_DIRECTION}"),
        }
    }

    if let Some(value) = lookup(ENV_ASSET_ROOT)
        && !value.trim().is_empty()
    {
        settings.asset_root = value.trim().to_string();
    }

    if let Some(value) = lookup(ENV_WELCOME) {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => settings.show_welcome = true,
            "0" | "false" | "no" | "off" | "" => settings.show_welcome = false,
            _ => tracing::warn!(%value, "ignoring {ENV_WELCOME}"),
        }
    }

    settings.normalize();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_file_uses_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let loaded = ConfigFile::new(dir.path().join("settings.json")).load()?;
        assert_eq!(loaded.source, SettingsSource::Defaults);
        assert_eq!(loaded.settings, Settings::default());
        Ok(())
    }

    #[test]
    fn partial_file_fills_defaults_and_normalizes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"direction":"ltr","swipe_threshold_px":0}"#)?;

        let loaded = ConfigFile::new(&path).load()?;
        assert_eq!(loaded.source, SettingsSource::File);
        assert_eq!(loaded.settings.direction, LayoutDirection::Ltr);
        assert_eq!(loaded.settings.swipe_threshold_px, 1);
        assert_eq!(loaded.settings.fade_out_ms, 300);
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ nope")?;
        let err = ConfigFile::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("parse settings"));
        Ok(())
    }

    #[test]
    fn env_overrides_apply() {
        let mut settings = Settings::default();
        apply_env_overrides(
            &mut settings,
            env(&[
                (ENV_DIRECTION, "LTR"),
                (ENV_ASSET_ROOT, " /srv/cards "),
                (ENV_WELCOME, "yes"),
            ]),
        );
        assert_eq!(settings.direction, LayoutDirection::Ltr);
        assert_eq!(settings.asset_root, "/srv/cards");
        assert!(settings.show_welcome);
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let mut settings = Settings::default();
        apply_env_overrides(
            &mut settings,
            env(&[(ENV_DIRECTION, "sideways"), (ENV_WELCOME, "maybe")]),
        );
        assert_eq!(settings, Settings::default());
    }
}

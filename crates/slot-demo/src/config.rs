use crate::catalog::{self, CatalogEntry};
use crate::gui::screen::Settings;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use reel::{Orientation, OverlayGradient};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Initial reel settings. Every key is optional; values that are not one of
/// the catalog options are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub orientation: Option<Orientation>,
    pub duration_ms: Option<u32>,
    pub twist_duration_ms: Option<u32>,
    pub item_gap: Option<u32>,
    pub overlay_gradient: Option<OverlayGradient>,
}

impl Config {
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            orientation: pick(
                "orientation",
                catalog::ORIENTATIONS,
                self.orientation,
                defaults.orientation,
            ),
            duration_ms: pick(
                "duration_ms",
                catalog::DURATIONS,
                self.duration_ms,
                defaults.duration_ms,
            ),
            twist_duration_ms: pick(
                "twist_duration_ms",
                catalog::TWIST_DURATIONS,
                self.twist_duration_ms,
                defaults.twist_duration_ms,
            ),
            item_gap: pick(
                "item_gap",
                catalog::ITEM_GAPS,
                self.item_gap,
                defaults.item_gap,
            ),
            overlay_gradient: pick(
                "overlay_gradient",
                catalog::OVERLAYS,
                self.overlay_gradient,
                defaults.overlay_gradient,
            ),
        }
    }
}

fn pick<T: PartialEq + Copy + Debug>(
    key: &str,
    catalog: &[CatalogEntry<T>],
    value: Option<T>,
    fallback: T,
) -> T {
    match value {
        Some(v) if catalog::contains(catalog, &v) => v,
        Some(v) => {
            log::warn!("Ignoring {key} = {v:?}: not one of the available options");
            fallback
        }
        None => fallback,
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "example", "slot-demo").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub const ENV_PREFIX: &str = "SLOT_DEMO";

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    from_sources(
        config::File::from(config_path).required(false),
        config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
    )
}

/// Layers `env` over `file`.
pub fn from_sources<S>(file: S, env: config::Environment) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let s = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

use crate::events::AppEvent;
use async_channel::Sender;
use std::path::{Path, PathBuf};

/// Directory to watch for `config_path`, if it already exists. Nothing is
/// created; without a config directory there is nothing to reload.
pub fn watch_dir(config_path: &Path) -> Option<PathBuf> {
    let dir = config_path.parent()?;
    match fs_err::metadata(dir) {
        Ok(meta) if meta.is_dir() => Some(dir.to_path_buf()),
        Ok(_) => {
            log::warn!("Not watching config: {} is not a directory", dir.display());
            None
        }
        Err(e) => {
            log::debug!("Not watching config: {}", e);
            None
        }
    }
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = watch_dir(&config_path) else {
        return;
    };

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.settings(), Settings::default());
    }

    #[test]
    fn test_catalog_values_are_applied() {
        let config: Config = serde_json::from_str(
            r#"{
                "orientation": "Horizontal",
                "duration_ms": 3500,
                "twist_duration_ms": 200,
                "item_gap": 8,
                "overlay_gradient": "left-right"
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.settings(),
            Settings {
                orientation: Orientation::Horizontal,
                duration_ms: 3500,
                twist_duration_ms: 200,
                item_gap: 8,
                overlay_gradient: OverlayGradient::LeftRight,
            }
        );
    }

    #[test]
    fn test_values_outside_catalog_fall_back() {
        let config = Config {
            duration_ms: Some(1234),
            item_gap: Some(32),
            ..Config::default()
        };
        let settings = config.settings();

        assert_eq!(settings.duration_ms, Settings::default().duration_ms);
        assert_eq!(settings.item_gap, 32);
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(map))
    }

    #[test]
    fn test_toml_file_is_loaded() {
        let file = config::File::from_str(
            "orientation = \"horizontal\"\noverlay_gradient = \"none\"\nitem_gap = 8\n",
            config::FileFormat::Toml,
        );
        let config = from_sources(file, env(&[])).unwrap();

        assert_eq!(config.orientation, Some(Orientation::Horizontal));
        assert_eq!(config.overlay_gradient, Some(OverlayGradient::None));
        assert_eq!(config.item_gap, Some(8));
        assert_eq!(config.duration_ms, None);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = config::File::from_str(
            "orientation = \"vertical\"\nitem_gap = 8\n",
            config::FileFormat::Toml,
        );
        let vars = env(&[
            ("SLOT_DEMO_ORIENTATION", "horizontal"),
            ("SLOT_DEMO_DURATION_MS", "3500"),
            ("SLOT_DEMO_TWIST_DURATION_MS", "250"),
            ("OTHER_ITEM_GAP", "32"),
        ]);
        let config = from_sources(file, vars).unwrap();

        assert_eq!(config.orientation, Some(Orientation::Horizontal));
        assert_eq!(config.duration_ms, Some(3500));
        assert_eq!(config.twist_duration_ms, Some(250));
        assert_eq!(config.item_gap, Some(8));

        let settings = config.settings();
        assert_eq!(settings.duration_ms, 3500);
        assert_eq!(settings.twist_duration_ms, Settings::default().twist_duration_ms);
    }

    #[test]
    fn test_missing_config_dir_is_not_created() {
        let dir = std::env::temp_dir().join(format!("slot-demo-missing-{}", std::process::id()));
        let config_path = dir.join("config.toml");

        assert_eq!(watch_dir(&config_path), None);
        assert!(!dir.exists());
    }

    #[test]
    fn test_existing_config_dir_is_watched() {
        let dir = std::env::temp_dir();
        assert_eq!(watch_dir(&dir.join("config.toml")), Some(dir));
    }

    #[test]
    fn test_unknown_orientation_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"orientation": "diagonal"}"#).is_err());
    }
}

//! Configuration for the sketch application, and the YAML helpers shared with
//! hotkey persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::controllers::ReadoutController;
use crate::data::draw::SurfaceSize;
use crate::data::hotkeys::Hotkeys;
use crate::data::mapper::DEFAULT_SCALE;
use crate::data::session::SessionOptions;
use crate::error::SketchError;

pub use crate::color_scheme::ColorScheme;

const CONFIG_DIR: &str = ".curvesketch";
const CONFIG_FILE: &str = "config.yaml";

// ─────────────────────────────────────────────────────────────────────────────
// Persisted settings
// ─────────────────────────────────────────────────────────────────────────────

/// Settings that can be stored in `~/.curvesketch/config.yaml`.
///
/// Missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchSettings {
    /// Native window title.
    pub title: String,
    /// Drawing surface extent in pixels, `[width, height]`.
    pub surface_size: [f32; 2],
    /// Scale at startup and after a scale reset.
    pub default_scale: f64,
    /// Initial state of the derivative toggle.
    pub show_derivative: bool,
    /// Initial state of the integral toggle.
    pub show_integral: bool,
    /// Multiplier applied to native scroll deltas before zooming.
    pub wheel_sensitivity: f64,
    pub color_scheme: ColorScheme,
    pub hotkeys: Hotkeys,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            title: "Curve Sketch".to_string(),
            surface_size: [1000.0, 700.0],
            default_scale: DEFAULT_SCALE,
            show_derivative: true,
            show_integral: true,
            wheel_sensitivity: 1.0,
            color_scheme: ColorScheme::default(),
            hotkeys: Hotkeys::default(),
        }
    }
}

impl SketchSettings {
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::new(
            f64::from(self.surface_size[0]),
            f64::from(self.surface_size[1]),
        )
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            default_scale: self.default_scale,
            show_derivative: self.show_derivative,
            show_integral: self.show_integral,
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SketchError> {
        read_yaml(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SketchError> {
        write_yaml(path, self)
    }

    pub fn default_path() -> Result<PathBuf, SketchError> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// Any failure is logged and yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let resolved = match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::default_path(),
        };
        match resolved.and_then(|p| Self::load_from(&p)) {
            Ok(settings) => settings,
            Err(SketchError::NotFound { path }) if path_is_default(&path) => Self::default(),
            Err(err) => {
                warn!(error = %err, "using default settings");
                Self::default()
            }
        }
    }
}

fn path_is_default(path: &Path) -> bool {
    SketchSettings::default_path().is_ok_and(|p| p == path)
}

// ─────────────────────────────────────────────────────────────────────────────
// SketchConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration handed to [`run_sketch`](crate::run_sketch).
pub struct SketchConfig {
    pub settings: SketchSettings,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Optional handle that receives readout updates.
    pub readout_controller: Option<ReadoutController>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::from_settings(SketchSettings::default())
    }
}

impl SketchConfig {
    pub fn from_settings(settings: SketchSettings) -> Self {
        Self {
            settings,
            native_options: None,
            readout_controller: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File helpers
// ─────────────────────────────────────────────────────────────────────────────

/// `~/.curvesketch`
pub fn config_dir() -> Result<PathBuf, SketchError> {
    let home = std::env::var_os("HOME").ok_or(SketchError::HomeNotSet)?;
    Ok(PathBuf::from(home).join(CONFIG_DIR))
}

pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SketchError> {
    if !path.exists() {
        return Err(SketchError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let s = fs::read_to_string(path).map_err(|source| SketchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&s).map_err(|source| SketchError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), SketchError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| SketchError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let s = serde_yaml::to_string(value).map_err(SketchError::Serialize)?;
    fs::write(path, s).map_err(|source| SketchError::Io {
        path: path.to_path_buf(),
        source,
    })
}

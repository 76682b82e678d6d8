use std::{fs, path::Path};

use serde::Deserialize;

use crate::domain::{DEFAULT_A, DEFAULT_B};
use crate::error::SettingsError;
use crate::render::Margins;
use crate::session::DATA_ROUTE_PREFIX;

pub const DEFAULT_SETTINGS_FILE: &str = "panel.toml";
const ENV_PREFIX: &str = "PANEL__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub initial_a: f64,
    pub initial_b: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub data_route_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        let margins = Margins::default();
        Self {
            initial_a: DEFAULT_A,
            initial_b: DEFAULT_B,
            chart_width: 460.0,
            chart_height: 400.0,
            margin_top: margins.top,
            margin_right: margins.right,
            margin_bottom: margins.bottom,
            margin_left: margins.left,
            data_route_prefix: DATA_ROUTE_PREFIX.into(),
        }
    }
}

impl Settings {
    pub fn margins(&self) -> Margins {
        Margins {
            top: self.margin_top,
            right: self.margin_right,
            bottom: self.margin_bottom,
            left: self.margin_left,
        }
    }
}

/// Reads `path` (or `panel.toml` in the working directory when it exists),
/// then applies `PANEL__*` environment overrides.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
            read_settings_file(Path::new(DEFAULT_SETTINGS_FILE))?
        }
        None => Settings::default(),
    };
    apply_overrides(&mut settings, |name| std::env::var(name).ok())?;
    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn apply_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), SettingsError> {
    let numeric: [(&str, &mut f64); 8] = [
        ("INITIAL_A", &mut settings.initial_a),
        ("INITIAL_B", &mut settings.initial_b),
        ("CHART_WIDTH", &mut settings.chart_width),
        ("CHART_HEIGHT", &mut settings.chart_height),
        ("MARGIN_TOP", &mut settings.margin_top),
        ("MARGIN_RIGHT", &mut settings.margin_right),
        ("MARGIN_BOTTOM", &mut settings.margin_bottom),
        ("MARGIN_LEFT", &mut settings.margin_left),
    ];

    for (suffix, slot) in numeric {
        let name = format!("{ENV_PREFIX}{suffix}");
        if let Some(value) = lookup(&name) {
            *slot = value
                .trim()
                .parse::<f64>()
                .map_err(|_| SettingsError::InvalidOverride {
                    name: name.clone(),
                    value: value.clone(),
                })?;
        }
    }

    if let Some(value) = lookup(&format!("{ENV_PREFIX}DATA_ROUTE_PREFIX")) {
        settings.data_route_prefix = value;
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

//! Runtime tuning loaded from `assets/settings.json`.
//!
//! Every field has a compiled-in default; a missing or malformed settings
//! file is logged and ignored rather than treated as fatal.

use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const SETTINGS_PATH: &str = "assets/settings.json";

/// Global tuning for the simulation and presentation.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SolarSettings {
    /// Real seconds one simulated year maps to. Shared by all bodies so
    /// relative periods stay proportionally correct.
    pub seconds_per_year: f32,
    /// Spacing increment between consecutive orbits, scene units.
    pub orbit_gap: f32,
    pub star_count: u32,
    pub starfield_seed: u64,
    pub bloom: BloomSettings,
    /// Multiplier applied to the camera offset when a body is selected.
    pub zoom_factor: f32,
    /// Zoom transition progress increment per rendered frame.
    pub zoom_step: f32,
}

impl Default for SolarSettings {
    fn default() -> Self {
        Self {
            seconds_per_year: 60.0,
            orbit_gap: 0.4,
            star_count: 10_000,
            starfield_seed: 7,
            bloom: BloomSettings::default(),
            zoom_factor: 0.5,
            zoom_step: 0.05,
        }
    }
}

/// Bloom post-processing parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BloomSettings {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            strength: 1.5,
            radius: 0.4,
            threshold: 0.85,
        }
    }
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> anyhow::Result<SolarSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("parsing settings file {}", path.display()))?;
    Ok(settings)
}

/// Settings from `SETTINGS_PATH`, or the defaults when the file is absent
/// or unreadable.
pub fn load_or_default() -> SolarSettings {
    let path = Path::new(SETTINGS_PATH);
    if !path.exists() {
        return SolarSettings::default();
    }
    match load_settings(path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("settings load failed, using defaults: {err:#}");
            SolarSettings::default()
        }
    }
}

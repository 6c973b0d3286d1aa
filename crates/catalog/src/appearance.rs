//! Appearance context (theme, color mode, motion scale) with explicit
//! load/save at the storage boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Storage key the context is persisted under.
pub const STORAGE_KEY: &str = "studio-appearance";

/// Lowest and highest accepted motion scale.
pub const MOTION_SCALE_RANGE: (f32, f32) = (0.0, 2.0);

/// Light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the OS setting.
    #[default]
    System,
}

/// Appearance settings passed explicitly through the render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceContext {
    /// Theme id (e.g. "default", "ocean").
    pub theme: String,
    /// Color mode preference.
    pub mode: ColorMode,
    /// Multiplier on animation durations; 0 disables motion.
    pub motion_scale: f32,
}

impl Default for AppearanceContext {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            mode: ColorMode::System,
            motion_scale: 1.0,
        }
    }
}

impl AppearanceContext {
    /// Replaces the theme id.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Replaces the color mode.
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the motion scale, clamped to [`MOTION_SCALE_RANGE`].
    pub fn with_motion_scale(mut self, scale: f32) -> Self {
        self.motion_scale = clamp_motion(scale);
        self
    }

    /// Repairs values a host may have supplied out of range.
    pub fn normalized(self) -> Self {
        Self {
            motion_scale: clamp_motion(self.motion_scale),
            ..self
        }
    }

    /// Concrete mode given the OS preference.
    pub fn resolved_mode(&self, prefers_dark: bool) -> ColorMode {
        match self.mode {
            ColorMode::System if prefers_dark => ColorMode::Dark,
            ColorMode::System => ColorMode::Light,
            explicit => explicit,
        }
    }

    /// Whether animations should run at all.
    pub fn motion_enabled(&self) -> bool {
        self.motion_scale > 0.0
    }

    /// Scales a duration in milliseconds.
    pub fn scale_duration(&self, millis: f32) -> f32 {
        millis * self.motion_scale
    }

    /// Reads the context from storage. Missing or corrupt data yields the default.
    pub fn load(store: &dyn AppearanceStore) -> Self {
        let Some(raw) = store.read(STORAGE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(&raw) {
            Ok(ctx) => ctx.normalized(),
            Err(err) => {
                log::warn!("ignoring stored appearance: {}", err);
                Self::default()
            }
        }
    }

    /// Writes the context to storage.
    pub fn save(&self, store: &mut dyn AppearanceStore) {
        match serde_json::to_string(self) {
            Ok(raw) => store.write(STORAGE_KEY, raw),
            Err(err) => log::warn!("could not serialize appearance: {}", err),
        }
    }
}

fn clamp_motion(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MOTION_SCALE_RANGE.0, MOTION_SCALE_RANGE.1)
}

/// String key/value storage at the host boundary (e.g. `localStorage`).
pub trait AppearanceStore {
    /// Reads a stored value.
    fn read(&self, key: &str) -> Option<String>;
    /// Writes a value.
    fn write(&mut self, key: &str, value: String);
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppearanceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_restores_context() {
        let mut store = MemoryStore::new();
        let ctx = AppearanceContext::default()
            .with_theme("ocean")
            .with_mode(ColorMode::Dark)
            .with_motion_scale(0.5);
        ctx.save(&mut store);
        assert_eq!(AppearanceContext::load(&store), ctx);
        assert_eq!(
            store.read(STORAGE_KEY).unwrap(),
            r#"{"theme":"ocean","mode":"dark","motionScale":0.5}"#
        );
    }

    #[test]
    fn corrupt_or_missing_storage_falls_back_to_default() {
        let mut store = MemoryStore::new();
        assert_eq!(AppearanceContext::load(&store), AppearanceContext::default());
        store.write(STORAGE_KEY, "{not json".into());
        assert_eq!(AppearanceContext::load(&store), AppearanceContext::default());
    }

    #[test]
    fn partial_and_out_of_range_values_are_repaired() {
        let mut store = MemoryStore::new();
        store.write(STORAGE_KEY, r#"{"mode":"light","motionScale":9}"#.into());
        let ctx = AppearanceContext::load(&store);
        assert_eq!(ctx.theme, "default");
        assert_eq!(ctx.mode, ColorMode::Light);
        assert_eq!(ctx.motion_scale, 2.0);
    }

    #[test]
    fn system_mode_follows_os_preference() {
        let ctx = AppearanceContext::default();
        assert_eq!(ctx.resolved_mode(true), ColorMode::Dark);
        assert_eq!(ctx.resolved_mode(false), ColorMode::Light);
        let light = ctx.with_mode(ColorMode::Light);
        assert_eq!(light.resolved_mode(true), ColorMode::Light);
    }

    #[test]
    fn zero_motion_disables_animation() {
        let ctx = AppearanceContext::default().with_motion_scale(0.0);
        assert!(!ctx.motion_enabled());
        assert_eq!(ctx.scale_duration(300.0), 0.0);
        assert_eq!(
            AppearanceContext::default().with_motion_scale(f32::NAN).motion_scale,
            1.0
        );
    }
}

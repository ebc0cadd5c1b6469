use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::page_utils::{self, Breakpoint};
use crate::validation::ValidationMode;

/// Source that produced the slider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SliderConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Slider tuning. Unset fields fall back to [`constants`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Time (ms) the slide animation runs before the page swap.
    pub transition_duration_ms: Option<u64>,
    /// Viewport breakpoints, in any order.
    pub breakpoints: Option<Vec<Breakpoint>>,
    /// Tiles per page below the narrowest breakpoint. Not a floor: a
    /// breakpoint asking for fewer tiles keeps its own value.
    pub fallback_tiles_per_page: Option<usize>,
    /// What happens when a rebuilt page map fails validation.
    pub validation: Option<ValidationMode>,
}

impl SliderConfig {
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(
            self.transition_duration_ms
                .unwrap_or(constants::transition::DURATION_MS),
        )
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        self.breakpoints
            .as_deref()
            .unwrap_or(constants::layout::BREAKPOINTS)
    }

    pub fn fallback_tiles_per_page(&self) -> usize {
        self.fallback_tiles_per_page
            .unwrap_or(constants::layout::FALLBACK_TILES_PER_PAGE)
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation.unwrap_or_default()
    }

    /// Tiles visible at `viewport_width` under the configured breakpoints.
    pub fn tiles_per_page(&self, viewport_width: u32) -> usize {
        page_utils::tiles_per_page(
            viewport_width,
            self.breakpoints(),
            self.fallback_tiles_per_page(),
        )
    }

    /// Load overrides from the environment.
    /// Evaluation order:
    /// 1) `$MARQUEE_SLIDER_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$MARQUEE_SLIDER_CONFIG_JSON` (inline JSON),
    /// 3) `slider.toml` / `slider.json` in the working directory or its
    ///    `config/` subdirectory,
    /// 4) defaults if none of those exist.
    pub fn load_from_env() -> anyhow::Result<(Self, SliderConfigSource)> {
        if let Ok(path_str) = env::var(constants::env::CONFIG_PATH)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, SliderConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(constants::env::CONFIG_JSON)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw).with_context(|| {
                format!("failed to parse {}", constants::env::CONFIG_JSON)
            })?;
            return Ok((parsed, SliderConfigSource::EnvInline));
        }

        Self::load_from_dir(Path::new("."))
    }

    /// Load the first default config file found under `dir`, or defaults.
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<(Self, SliderConfigSource)> {
        match Self::find_default_file(dir) {
            Some(path) => {
                let config = Self::load_from_file(&path)?;
                Ok((config, SliderConfigSource::File(path)))
            }
            None => Ok((Self::default(), SliderConfigSource::Default)),
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read slider config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid slider config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid slider config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse slider config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid slider config json: {err}"))
    }

    fn find_default_file(dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "slider.toml",
            "slider.json",
            "config/slider.toml",
            "config/slider.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.exists())
    }
}

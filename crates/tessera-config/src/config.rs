//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

const APP_NAME: &str = "tessera";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation settings.
    pub terrain: TerrainConfig,
    /// Viewer placement.
    pub viewer: ViewerConfig,
    /// Preview export settings.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Vertices per chunk edge (odd).
    pub mesh_resolution: u32,
    /// View distance in world units; sizes the square of generated chunks.
    pub map_size: i32,
    /// Noise scale.
    pub noise_scale: f32,
    /// Number of noise octaves (values below 1 are raised to 1).
    pub octaves: i32,
    /// Amplitude decay per octave.
    pub persistence: f32,
    /// Frequency growth per octave (values below 1 are raised to 1).
    pub lacunarity: f32,
    /// Generation seed.
    pub seed: u64,
    /// Vertical mesh scale.
    pub height_multiplier: f32,
    /// Mesh decimation level.
    pub detail_level: i32,
    /// Height bands in classification order.
    pub regions: Vec<RegionConfig>,
}

/// One height band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionConfig {
    /// Band label.
    pub name: String,
    /// Heights strictly below this threshold fall in the band.
    pub height: f32,
    /// RGBA color, components in `[0, 1]`.
    pub color: [f32; 4],
}

/// Viewer placement on the X/Z plane.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// World X.
    pub x: f32,
    /// World Z.
    pub y: f32,
}

/// Which color map a preview image shows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum PreviewMode {
    /// Region colors.
    #[default]
    ColorMap,
    /// Grayscale heights.
    HeightMap,
}

/// Preview export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for per-chunk PNG previews. `None` disables export.
    pub export_dir: Option<PathBuf>,
    /// Color map used for previews.
    pub draw_mode: PreviewMode,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            mesh_resolution: 11,
            map_size: 30,
            noise_scale: 25.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 0,
            height_multiplier: 5.0,
            detail_level: 0,
            regions: vec![
                RegionConfig::new("water", 0.3, [0.20, 0.40, 0.80, 1.0]),
                RegionConfig::new("sand", 0.4, [0.84, 0.80, 0.55, 1.0]),
                RegionConfig::new("grass", 0.6, [0.34, 0.60, 0.20, 1.0]),
                RegionConfig::new("rock", 0.8, [0.42, 0.36, 0.30, 1.0]),
                RegionConfig::new("snow", 1.0, [0.95, 0.95, 0.95, 1.0]),
            ],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl RegionConfig {
    /// Creates a region entry.
    pub fn new(name: impl Into<String>, height: f32, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            height,
            color,
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject values that cannot be corrected silently.
    ///
    /// Octaves and lacunarity below their minimum are accepted here; the
    /// generator clamps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let terrain = &self.terrain;

        if terrain.mesh_resolution < 3 || terrain.mesh_resolution % 2 == 0 {
            return Err(ConfigError::InvalidMeshResolution(terrain.mesh_resolution));
        }

        let finite = [
            ("terrain.noise_scale", terrain.noise_scale),
            ("terrain.persistence", terrain.persistence),
            ("terrain.height_multiplier", terrain.height_multiplier),
            ("viewer.x", self.viewer.x),
            ("viewer.y", self.viewer.y),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name.to_string()));
            }
        }

        for region in &terrain.regions {
            if !region.height.is_finite() {
                return Err(ConfigError::NonFinite(format!(
                    "terrain.regions[{}].height",
                    region.name
                )));
            }
        }

        if terrain
            .regions
            .windows(2)
            .any(|w| w[1].height < w[0].height)
        {
            log::warn!("Region thresholds are not ascending; earlier regions take precedence");
        }

        Ok(())
    }
}

// --- Load / Save / Reload ---

/// Platform config directory for the generator, e.g. `~/.config/tessera`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub recording: RecordingConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

#[derive(Debug, Deserialize)]
pub struct MazeConfig {
    #[serde(default = "default_maze_path")]
    pub path: String,
    #[serde(default)]
    pub disable_ghosts: bool,
}

#[derive(Debug, Deserialize)]
pub struct RecordingConfig {
    #[serde(default = "default_recording_enabled")]
    pub enabled: bool,
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplayConfig {
    /// Pacing between frames during fast seeks; 0 resolves immediately
    #[serde(default)]
    pub fast_delay_ms: u64,
}

// Default values
fn default_maze_path() -> String { "maps/default.txt".to_string() }
fn default_recording_enabled() -> bool { true }
fn default_log_path() -> String { "game.log".to_string() }

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            path: default_maze_path(),
            disable_ghosts: false,
        }
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            enabled: default_recording_enabled(),
            log_path: default_log_path(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { fast_delay_ms: 0 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            recording: RecordingConfig::default(),
            replay: ReplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if the file
    /// doesn't exist
    pub fn load() -> Self {
        Config::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}

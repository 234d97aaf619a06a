//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GOOGLE_CLOUD_PROJECT` / `GOOGLE_CLOUD_LOCATION` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./deepdesk.toml` or `./.deepdesk.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/deepdesk/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;

        // Environment wins over every file source
        Self::apply_env(
            &mut config,
            std::env::var("GOOGLE_CLOUD_PROJECT").ok(),
            std::env::var("GOOGLE_CLOUD_LOCATION").ok(),
        );

        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        Self::apply_env(
            &mut config,
            std::env::var("GOOGLE_CLOUD_PROJECT").ok(),
            std::env::var("GOOGLE_CLOUD_LOCATION").ok(),
        );
        config
    }

    /// Overlay environment-provided runtime settings onto a loaded config.
    ///
    /// Empty values are ignored, matching how unset variables behave.
    fn apply_env(config: &mut FileConfig, project: Option<String>, location: Option<String>) {
        if let Some(project) = project.filter(|s| !s.trim().is_empty()) {
            config.runtime.project = Some(project);
        }
        if let Some(location) = location.filter(|s| !s.trim().is_empty()) {
            config.runtime.location = Some(location);
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/deepdesk/config.toml if set,
    /// otherwise falls back to ~/.config/deepdesk/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("deepdesk").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["deepdesk.toml", ".deepdesk.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ env ] GOOGLE_CLOUD_PROJECT / GOOGLE_CLOUD_LOCATION");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./deepdesk.toml or ./.deepdesk.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

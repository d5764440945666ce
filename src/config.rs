//! Demo configuration.
//!
//! Only presentation knobs live here. The decision threshold and the
//! default weights are fixed and cannot be configured.
//!
//! A config file is plain TOML; every field is optional:
//!
//! ```toml
//! weight_step = 0.05
//!
//! [assets.cat]
//! path = "images/cat.jpeg"
//! caption = "Input Image: Cat"
//!
//! [assets.not_cat]
//! path = "images/not_cat.jpeg"
//! caption = "Input Image: Not a Cat"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DemoError, Result};
use crate::session::ImageSelection;

/// An illustrative image shown for one [`ImageSelection`].
///
/// The demo never opens the file; it only hands the path and caption to
/// the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub caption: String,
}

impl ImageAsset {
    /// Creates an asset from a path and its caption.
    pub fn new(path: impl Into<PathBuf>, caption: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            caption: caption.into(),
        }
    }
}

/// Image per selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub cat: ImageAsset,
    pub not_cat: ImageAsset,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            cat: ImageAsset::new("images/cat.jpeg", "Input Image: Cat"),
            not_cat: ImageAsset::new("images/not_cat.jpeg", "Input Image: Not a Cat"),
        }
    }
}

impl AssetConfig {
    /// Looks up the asset shown for `image`.
    pub fn for_selection(&self, image: ImageSelection) -> &ImageAsset {
        match image {
            ImageSelection::Cat => &self.cat,
            ImageSelection::NotCat => &self.not_cat,
        }
    }
}

/// Configuration for a demo session's front end.
///
/// # Examples
///
/// ```
/// use cat_neuron::config::DemoConfig;
///
/// let config = DemoConfig::default().with_weight_step(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Increment applied when a slider is nudged. Must be in `(0, 1]`.
    pub weight_step: f64,

    /// Illustrative images.
    pub assets: AssetConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            weight_step: 0.01,
            assets: AssetConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Sets the slider increment.
    pub fn with_weight_step(mut self, step: f64) -> Self {
        self.weight_step = step;
        self
    }

    /// Sets the illustrative images.
    pub fn with_assets(mut self, assets: AssetConfig) -> Self {
        self.assets = assets;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_step.is_finite() || self.weight_step <= 0.0 || self.weight_step > 1.0 {
            return Err(DemoError::InvalidConfig(format!(
                "weight_step must be in (0, 1], got {}",
                self.weight_step
            )));
        }
        for (name, asset) in [("cat", &self.assets.cat), ("not_cat", &self.assets.not_cat)] {
            if asset.path.as_os_str().is_empty() {
                return Err(DemoError::InvalidConfig(format!(
                    "assets.{name}.path must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert!((config.weight_step - 0.01).abs() < 1e-12);
        assert_eq!(config.assets.cat.path, PathBuf::from("images/cat.jpeg"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_step() {
        for step in [0.0, -0.1, 1.5, f64::NAN] {
            let config = DemoConfig::default().with_weight_step(step);
            assert!(matches!(
                config.validate(),
                Err(DemoError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_validate_empty_asset_path() {
        let mut assets = AssetConfig::default();
        assets.not_cat.path = PathBuf::new();
        let config = DemoConfig::default().with_assets(assets);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_asset_lookup() {
        let assets = AssetConfig::default();
        assert_eq!(
            assets.for_selection(ImageSelection::NotCat).caption,
            "Input Image: Not a Cat"
        );
        assert_eq!(
            assets.for_selection(ImageSelection::Cat).path,
            PathBuf::from("images/cat.jpeg")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DemoConfig::from_toml_str("weight_step = 0.1").unwrap();
        assert!((config.weight_step - 0.1).abs() < 1e-12);
        assert_eq!(config.assets, AssetConfig::default());
    }

    #[test]
    fn test_toml_assets_override() {
        let raw = r#"
            [assets.not_cat]
            path = "img/lion.png"
            caption = "A lion"
        "#;
        let config = DemoConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.assets.not_cat.path, PathBuf::from("img/lion.png"));
        assert_eq!(config.assets.cat, AssetConfig::default().cat);
    }

    #[test]
    fn test_toml_rejected_values() {
        assert!(matches!(
            DemoConfig::from_toml_str("weight_step = \"big\""),
            Err(DemoError::ConfigParse(_))
        ));
        assert!(matches!(
            DemoConfig::from_toml_str("weight_step = 2.0"),
            Err(DemoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "weight_step = 0.25").unwrap();
        let config = DemoConfig::load(file.path()).unwrap();
        assert!((config.weight_step - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_bundled_demo_config_parses() {
        let config = DemoConfig::from_toml_str(include_str!("../demo.toml")).unwrap();
        assert!((config.weight_step - 0.05).abs() < 1e-12);
        assert_eq!(config.assets, AssetConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = DemoConfig::load("/nonexistent/cat-neuron.toml");
        assert!(matches!(result, Err(DemoError::Io(_))));
    }
}

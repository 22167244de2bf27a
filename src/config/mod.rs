use crate::domain::model::StylePreset;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_directory_path, validate_font_size, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Run configuration. There are no command-line flags or environment switches;
/// the defaults are the fixed directory convention shared with the simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    pub results_dir: PathBuf,
    pub images_dir: PathBuf,
    #[serde(default)]
    pub style: StylePreset,
}

impl PlotConfig {
    pub fn new(results_dir: impl Into<PathBuf>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            images_dir: images_dir.into(),
            style: StylePreset::academic(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new("results", "images")
    }
}

impl ConfigProvider for PlotConfig {
    fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    fn style(&self) -> &StylePreset {
        &self.style
    }
}

impl Validate for PlotConfig {
    fn validate(&self) -> Result<()> {
        validate_directory_path("results_dir", &self.results_dir)?;
        validate_directory_path("images_dir", &self.images_dir)?;
        validate_non_empty_string("style.font_family", &self.style.font_family)?;
        validate_font_size("style.base_pt", self.style.base_pt)?;
        validate_font_size("style.axis_label_pt", self.style.axis_label_pt)?;
        validate_font_size("style.legend_pt", self.style.legend_pt)?;
        validate_font_size("style.annotation_pt", self.style.annotation_pt)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_the_fixed_directory_convention() {
        let config = PlotConfig::default();
        assert_eq!(config.results_dir, PathBuf::from("results"));
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut config = PlotConfig::default();
        config.results_dir = PathBuf::new();
        assert!(config.validate().is_err());

        let mut config = PlotConfig::default();
        config.style.base_pt = 0.0;
        assert!(config.validate().is_err());
    }
}

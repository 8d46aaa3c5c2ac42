use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Result};
use serde::Deserialize;

use crate::carousel::DEFAULT_AUTOPLAY_PERIOD;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Number of slides in the deck. Fixed for the widget's lifetime.
    pub slide_count: usize,
    /// Wire left/right arrow keys to previous/next.
    pub keyboard_control: bool,
    /// Start advancing automatically as soon as the carousel is constructed.
    pub auto_scroll: bool,
    /// Delay between automatic advances (e.g. "3s", "1500ms").
    #[serde(with = "humantime_serde")]
    pub auto_scroll_interval: Duration,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde
    /// defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(self.slide_count >= 1, "slide-count must be at least one");
        ensure!(
            self.auto_scroll_interval > Duration::ZERO,
            "auto-scroll-interval must be positive"
        );
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            slide_count: 1,
            keyboard_control: false,
            auto_scroll: false,
            auto_scroll_interval: DEFAULT_AUTOPLAY_PERIOD,
        }
    }
}

//! Tracker configuration
//!
//! There is no environment configuration; hosts start from the defaults.

/// Storage key used by every release so far
pub const STORAGE_KEY: &str = "HABBIT_KEY";

/// Directory the icon images are served from
pub const ICON_DIR: &str = "images/icons";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Key the habit collection is stored under
    pub storage_key: String,
    /// Base path of the `<icon>.svg` images
    pub icon_dir: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            icon_dir: ICON_DIR.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Image path for an icon identifier
    pub fn icon_src(&self, icon: &str) -> String {
        format!("{}/{}.svg", self.icon_dir, icon)
    }
}

use serde::Deserialize;
use serde::Serialize;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

impl ChartConfig {
    // Below this the margins, labels and legend no longer fit
    pub const MIN_WIDTH: u32 = 320;
    pub const MIN_HEIGHT: u32 = 200;

    pub fn validate(&self) -> crate::Result<()> {
        if self.width < Self::MIN_WIDTH || self.height < Self::MIN_HEIGHT {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "chart must be at least {}x{}, got {}x{}",
                Self::MIN_WIDTH,
                Self::MIN_HEIGHT,
                self.width,
                self.height
            ))));
        }
        Ok(())
    }
}

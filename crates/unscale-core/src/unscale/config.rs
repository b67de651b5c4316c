use serde::{Deserialize, Serialize};

use crate::compare::Comparator;
use crate::consts::{DEFAULT_FUZZINESS, DEFAULT_MAX_VARIATION, MAX_FUZZINESS};
use crate::error::{Result, UnscaleError};

/// How adjacent pixels are compared when looking for contrasts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareMode {
    /// Any channel difference counts.
    #[default]
    Exact,
    /// Channel differences up to `fuzziness` are ignored. Useful for
    /// screenshots with dithering or lossy compression.
    Fuzzy,
}

impl std::fmt::Display for CompareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::Fuzzy => write!(f, "Fuzzy"),
        }
    }
}

/// Settings for one unscaling run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscaleConfig {
    #[serde(default)]
    pub mode: CompareMode,
    /// How much an R, G or B value may differ in fuzzy mode (0-255).
    #[serde(default = "default_fuzziness")]
    pub fuzziness: u32,
    /// Largest tolerated difference between the thinnest and thickest run
    /// on an axis. Images scaled with nearest-neighbor more than once need
    /// more than 1.
    #[serde(default = "default_max_variation")]
    pub max_variation: u32,
}

fn default_fuzziness() -> u32 {
    DEFAULT_FUZZINESS
}
fn default_max_variation() -> u32 {
    DEFAULT_MAX_VARIATION
}

impl Default for UnscaleConfig {
    fn default() -> Self {
        Self {
            mode: CompareMode::default(),
            fuzziness: DEFAULT_FUZZINESS,
            max_variation: DEFAULT_MAX_VARIATION,
        }
    }
}

impl UnscaleConfig {
    /// Reject out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.fuzziness > MAX_FUZZINESS {
            return Err(UnscaleError::InvalidConfig(format!(
                "fuzziness must be between 0 and {MAX_FUZZINESS}, got {}",
                self.fuzziness
            )));
        }
        Ok(())
    }

    /// The comparator selected by this configuration.
    pub fn comparator(&self) -> Result<Comparator> {
        self.validate()?;
        Ok(match self.mode {
            CompareMode::Exact => Comparator::Exact,
            CompareMode::Fuzzy => Comparator::Fuzzy {
                fuzziness: self.fuzziness as u8,
            },
        })
    }
}

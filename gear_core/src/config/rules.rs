//! Decoration composition rules

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable limits on decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearRules {
    /// Highest decoration (and socket) level
    #[serde(default = "default_max_decoration_level")]
    pub max_decoration_level: u32,
    /// Decorations below this level may grant at most one skill
    #[serde(default = "default_combo_decoration_min_level")]
    pub combo_decoration_min_level: u32,
}

impl Default for GearRules {
    fn default() -> Self {
        GearRules {
            max_decoration_level: default_max_decoration_level(),
            combo_decoration_min_level: default_combo_decoration_min_level(),
        }
    }
}

fn default_max_decoration_level() -> u32 {
    4
}
fn default_combo_decoration_min_level() -> u32 {
    4
}

impl GearRules {
    /// Reject rule sets no decoration could satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_decoration_level == 0 {
            return Err(ConfigError::ValidationError(
                "max_decoration_level must be at least 1".to_string(),
            ));
        }
        if self.combo_decoration_min_level > self.max_decoration_level {
            return Err(ConfigError::ValidationError(format!(
                "combo_decoration_min_level {} exceeds max_decoration_level {}",
                self.combo_decoration_min_level, self.max_decoration_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        let rules = GearRules::default();
        assert_eq!(rules.max_decoration_level, 4);
        assert_eq!(rules.combo_decoration_min_level, 4);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_combo_threshold_above_max_rejected() {
        let rules = GearRules {
            max_decoration_level: 3,
            combo_decoration_min_level: 4,
        };
        assert!(matches!(rules.validate(), Err(ConfigError::ValidationError(_))));
    }
}

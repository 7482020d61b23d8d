//! Engine configuration with documented constants

/// Tunables for query resolution.
///
/// The config is built once at startup and passed explicitly to the
/// components that need it; there is no global config state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum normalized edit similarity (0.0 - 1.0) for a query token
    /// to count as a match for a catalog keyword.
    ///
    /// At the default (0.75), "sorrt" still matches "sort" (0.8) while
    /// "st" does not (0.5). Raising it makes resolution stricter;
    /// 1.0 disables typo tolerance entirely.
    pub fuzzy_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.75,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(format!(
                "fuzzy_threshold ({}) must be within 0.0..=1.0",
                self.fuzzy_threshold
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let config = EngineConfig {
            fuzzy_threshold: 1.5,
        };
        assert!(config.validate().is_err());
    }
}

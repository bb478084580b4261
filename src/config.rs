use thiserror::Error;

/// Seed value that selects non-deterministic system entropy instead of a
/// reproducible RNG stream.
pub const ENTROPY_SEED: i64 = -1;

/// Parameters for one grid generation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapConfig {
    /// Grid width in cells. Must be at least 3.
    pub width: usize,
    /// Grid height in cells. Must be at least 3.
    pub height: usize,
    /// Probability, in percent, that a non-border cell starts solid.
    pub fill_percent: f32,
    /// Number of cellular-automaton smoothing passes to run.
    pub automaton_steps: u32,
    /// RNG seed; [`ENTROPY_SEED`] means "use system entropy".
    pub seed: i64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            fill_percent: 50.0,
            automaton_steps: 4,
            seed: ENTROPY_SEED,
        }
    }
}

/// Rejected generation parameters.
///
/// Validation fails fast instead of clamping, so that a caller comparing
/// reproducible outputs is never silently handed a different configuration
/// than the one it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size {width}x{height} is too small; both sides must be at least 3")]
    GridTooSmall { width: usize, height: usize },
    #[error("fill percentage {0} is outside 0..=100")]
    FillPercentOutOfRange(f32),
    #[error("cell size {0} must be a positive finite number")]
    NonPositiveCellSize(f32),
}

impl MapConfig {
    /// Checks the configuration against the documented parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        // NaN fails the range test and is rejected with it.
        if !(0.0..=100.0).contains(&self.fill_percent) {
            return Err(ConfigError::FillPercentOutOfRange(self.fill_percent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MapConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_too_small_grids() {
        let mut cfg = MapConfig::default();
        cfg.width = 2;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::GridTooSmall {
                width: 2,
                height: 15
            })
        );

        cfg.width = 3;
        cfg.height = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::GridTooSmall { .. })
        ));
    }

    #[test]
    fn rejects_fill_percent_outside_range() {
        let mut cfg = MapConfig::default();

        cfg.fill_percent = -0.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::FillPercentOutOfRange(_))
        ));

        cfg.fill_percent = 100.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::FillPercentOutOfRange(_))
        ));

        cfg.fill_percent = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::FillPercentOutOfRange(_))
        ));
    }

    #[test]
    fn accepts_range_endpoints() {
        let mut cfg = MapConfig::default();
        cfg.fill_percent = 0.0;
        assert_eq!(cfg.validate(), Ok(()));
        cfg.fill_percent = 100.0;
        assert_eq!(cfg.validate(), Ok(()));

        cfg.width = 3;
        cfg.height = 3;
        assert_eq!(cfg.validate(), Ok(()));
    }
}

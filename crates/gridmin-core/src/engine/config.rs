use super::error::EngineError;
use super::policy::ExclusionPolicy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    pub num_minima: usize,
    /// `None` selects the unfiltered top-k mode.
    pub policy: Option<ExclusionPolicy>,
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.num_minima == 0 {
            return Err(EngineError::InvalidParameter {
                name: "num_minima",
                reason: "at least one minimum must be requested".to_string(),
            });
        }
        if let Some(policy) = &self.policy {
            policy.validate()?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ExtractionConfigBuilder {
    num_minima: Option<usize>,
    policy: Option<Option<ExclusionPolicy>>,
}

impl ExtractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_minima(mut self, n: usize) -> Self {
        self.num_minima = Some(n);
        self
    }
    pub fn exclusion_policy(mut self, policy: Option<ExclusionPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }
    pub fn spatial_radius(self, radius: f64) -> Self {
        self.exclusion_policy(Some(ExclusionPolicy::SpatialRadius(radius)))
    }
    pub fn value_band(self, band: f64) -> Self {
        self.exclusion_policy(Some(ExclusionPolicy::ValueBand(band)))
    }
    pub fn no_exclusion(self) -> Self {
        self.exclusion_policy(None)
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        Ok(ExtractionConfig {
            num_minima: self
                .num_minima
                .ok_or(ConfigError::MissingParameter("num_minima"))?,
            policy: self
                .policy
                .ok_or(ConfigError::MissingParameter("exclusion_policy"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_every_parameter() {
        assert_eq!(
            ExtractionConfigBuilder::new().spatial_radius(0.1).build(),
            Err(ConfigError::MissingParameter("num_minima"))
        );
        assert_eq!(
            ExtractionConfigBuilder::new().num_minima(3).build(),
            Err(ConfigError::MissingParameter("exclusion_policy"))
        );
    }

    #[test]
    fn builder_distinguishes_policy_variants() {
        let spatial = ExtractionConfigBuilder::new()
            .num_minima(2)
            .spatial_radius(0.25)
            .build()
            .unwrap();
        let band = ExtractionConfigBuilder::new()
            .num_minima(2)
            .value_band(1.0)
            .build()
            .unwrap();
        let none = ExtractionConfigBuilder::new()
            .num_minima(2)
            .no_exclusion()
            .build()
            .unwrap();

        assert_eq!(spatial.policy, Some(ExclusionPolicy::SpatialRadius(0.25)));
        assert_eq!(band.policy, Some(ExclusionPolicy::ValueBand(1.0)));
        assert_eq!(none.policy, None);
    }

    #[test]
    fn later_policy_calls_override_earlier_ones() {
        let config = ExtractionConfigBuilder::new()
            .num_minima(1)
            .value_band(2.0)
            .spatial_radius(0.5)
            .build()
            .unwrap();
        assert_eq!(config.policy, Some(ExclusionPolicy::SpatialRadius(0.5)));
    }

    #[test]
    fn validate_rejects_zero_minima_and_negative_thresholds() {
        let zero = ExtractionConfig {
            num_minima: 0,
            policy: None,
        };
        let negative = ExtractionConfig {
            num_minima: 1,
            policy: Some(ExclusionPolicy::ValueBand(-1.0)),
        };

        assert!(matches!(
            zero.validate(),
            Err(EngineError::InvalidParameter { name: "num_minima", .. })
        ));
        assert!(matches!(
            negative.validate(),
            Err(EngineError::InvalidParameter { name: "threshold", .. })
        ));
    }
}

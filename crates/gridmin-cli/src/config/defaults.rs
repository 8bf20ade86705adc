use super::file::ExclusionMode;

pub struct DefaultsConfig {
    pub num_minima: usize,
    pub mode: ExclusionMode,
    pub exclusion_radius: f64,
    pub value_band: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_minima: 1,
            mode: ExclusionMode::SpatialRadius,
            exclusion_radius: 0.1,
            value_band: 1.0,
        }
    }
}

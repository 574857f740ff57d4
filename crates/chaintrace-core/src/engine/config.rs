use thiserror::Error;

/// Lower bound of the consecutive alpha-carbon distance band, in Angstroms.
pub const DEFAULT_MIN_DISTANCE: f64 = 3.780033465;
/// Upper bound of the consecutive alpha-carbon distance band, in Angstroms.
pub const DEFAULT_MAX_DISTANCE: f64 = 3.857441898;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error(
        "Invalid distance window [{min}, {max}]: bounds must be finite, non-negative and min <= max"
    )]
    InvalidWindow { min: f64, max: f64 },
}

/// The closed interval `[min, max]` of distances accepted as a consecutive-bond length.
///
/// Two points are adjacent iff their distance lies inside this window. A single window is
/// applied uniformly to every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceWindow {
    min: f64,
    max: f64,
}

impl DistanceWindow {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        let valid = min.is_finite() && max.is_finite() && min >= 0.0 && min <= max;
        if !valid {
            return Err(ConfigError::InvalidWindow { min, max });
        }
        Ok(Self { min, max })
    }

    /// The reference Cα–Cα band.
    pub fn alpha_carbon() -> Self {
        Self {
            min: DEFAULT_MIN_DISTANCE,
            max: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min && distance <= self.max
    }
}

impl Default for DistanceWindow {
    fn default() -> Self {
        Self::alpha_carbon()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    pub window: DistanceWindow,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            window: DistanceWindow::alpha_carbon(),
        }
    }
}

#[derive(Default)]
pub struct TraceConfigBuilder {
    min_distance: Option<f64>,
    max_distance: Option<f64>,
}

impl TraceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_distance(mut self, distance: f64) -> Self {
        self.min_distance = Some(distance);
        self
    }
    pub fn max_distance(mut self, distance: f64) -> Self {
        self.max_distance = Some(distance);
        self
    }
    pub fn window(mut self, window: DistanceWindow) -> Self {
        self.min_distance = Some(window.min());
        self.max_distance = Some(window.max());
        self
    }

    pub fn build(self) -> Result<TraceConfig, ConfigError> {
        let min = self
            .min_distance
            .ok_or(ConfigError::MissingParameter("min_distance"))?;
        let max = self
            .max_distance
            .ok_or(ConfigError::MissingParameter("max_distance"))?;
        Ok(TraceConfig {
            window: DistanceWindow::new(min, max)?,
        })
    }
}

use chaintrace::core::io::report::ReportFormat;
use chaintrace::engine::config::{DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE};

pub struct DefaultsConfig {
    pub min_distance: f64,
    pub max_distance: f64,
    pub format: ReportFormat,
    pub front_to_back: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            format: ReportFormat::Text,
            front_to_back: false,
        }
    }
}

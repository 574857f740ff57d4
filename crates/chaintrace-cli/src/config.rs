pub mod defaults;
pub mod models;

use crate::cli::WindowArgs;
use crate::error::{CliError, Result};
use chaintrace::core::io::report::ReportFormat;
use chaintrace::engine::config as core_config;
use defaults::DefaultsConfig;
use models::AppConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialWindowConfig {
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<ReportFormat>,
    #[serde(rename = "front-to-back")]
    front_to_back: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialTraceConfig {
    window: Option<PartialWindowConfig>,
    output: Option<PartialOutputConfig>,
}

/// Output choices given on the command line; `None` defers to the file and defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputOverrides {
    pub format: Option<ReportFormat>,
    pub front_to_back: Option<bool>,
}

impl PartialTraceConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file if one was given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No configuration file given; using built-in defaults.");
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli(
        mut self,
        args: &WindowArgs,
        output: OutputOverrides,
    ) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let window_config = self.window.take().unwrap_or_default();
        let output_config = self.output.take().unwrap_or_default();

        let min_distance = args
            .dmin
            .or(window_config.min)
            .unwrap_or(defaults.min_distance);
        let max_distance = args
            .dmax
            .or(window_config.max)
            .unwrap_or(defaults.max_distance);

        let core_config = core_config::TraceConfigBuilder::new()
            .min_distance(min_distance)
            .max_distance(max_distance)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let format = output
            .format
            .or(output_config.format)
            .unwrap_or(defaults.format);
        let front_to_back = output
            .front_to_back
            .or(output_config.front_to_back)
            .unwrap_or(defaults.front_to_back);

        debug!(
            min = min_distance,
            max = max_distance,
            %format,
            front_to_back,
            "Configuration merged."
        );

        Ok(AppConfig {
            core_config,
            format,
            front_to_back,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "window.min" => {
                    self.window.get_or_insert_with(Default::default).min =
                        Some(parse_float(key, value_str)?);
                }
                "window.max" => {
                    self.window.get_or_insert_with(Default::default).max =
                        Some(parse_float(key, value_str)?);
                }
                "output.format" => {
                    self.output.get_or_insert_with(Default::default).format =
                        Some(value_str.parse().map_err(CliError::Config)?);
                }
                "output.front-to-back" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .front_to_back = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_float(key: &str, value_str: &str) -> Result<f64> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid float value for {}: {}", key, value_str)))
}

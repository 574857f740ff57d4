use chaintrace::core::io::report::ReportFormat;
use chaintrace::engine::config as core_config;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub core_config: core_config::TraceConfig,
    pub format: ReportFormat,
    pub front_to_back: bool,
}

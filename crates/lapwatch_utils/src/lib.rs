pub mod config;
pub mod logger;
pub mod profiler;

pub use crate::config::ReportConfig;
pub use crate::logger::init_logging;
pub use crate::profiler::{PhaseTiming, Profiler};

//! Report configuration
//!
//! Settings are read from `LAPWATCH_*` environment variables first and then
//! overridden by whatever was passed on the command line.

pub const DEFAULT_LOG_FILTER: &str = "lapwatch=info";

/// How timing reports are logged and printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Print reports as JSON instead of text
    pub json_output: bool,

    /// Number of times `run` executes the program (at least 1)
    pub repeat: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json_output: false,
            repeat: 1,
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("LAPWATCH_LOG") {
            if !val.trim().is_empty() {
                config.log_filter = val;
            }
        }

        if let Some(val) = lookup("LAPWATCH_JSON") {
            config.json_output = val.parse().unwrap_or(false);
        }

        if let Some(val) = lookup("LAPWATCH_REPEAT") {
            config.repeat = val.parse().unwrap_or(1).max(1);
        }

        config
    }

    /// Apply command-line overrides (flags take precedence)
    pub fn merge_with_args(mut self, json: bool, repeat: Option<u32>) -> Self {
        if json {
            self.json_output = true;
        }
        if let Some(repeat) = repeat {
            self.repeat = repeat.max(1);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.json_output);
        assert_eq!(config.repeat, 1);
    }

    #[test]
    fn test_env_values_are_applied() {
        let config = ReportConfig::from_lookup(lookup_from(&[
            ("LAPWATCH_LOG", "lapwatch=debug"),
            ("LAPWATCH_JSON", "true"),
            ("LAPWATCH_REPEAT", "4"),
        ]));
        assert_eq!(config.log_filter, "lapwatch=debug");
        assert!(config.json_output);
        assert_eq!(config.repeat, 4);
    }

    #[test]
    fn test_bad_env_values_fall_back() {
        let config = ReportConfig::from_lookup(lookup_from(&[
            ("LAPWATCH_LOG", "  "),
            ("LAPWATCH_JSON", "yes please"),
            ("LAPWATCH_REPEAT", "0"),
        ]));
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_args_override_env() {
        let config = ReportConfig::default().merge_with_args(true, Some(0));
        assert!(config.json_output);
        assert_eq!(config.repeat, 1);

        let config = ReportConfig::default().merge_with_args(false, Some(3));
        assert!(!config.json_output);
        assert_eq!(config.repeat, 3);
    }
}

use crate::constants::SNOWFLAKE_COUNT;

// Upper bound accepted for `?snow=`
pub const SNOWFLAKE_COUNT_MAX: usize = 2_000;

/// Run-time page options.
///
/// Everything has a compiled-in default; the page URL query string may
/// override a few knobs, e.g. `?log=debug&snow=120` or `?snow=off`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub log_level: log::Level,
    pub snowflake_count: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
            snowflake_count: SNOWFLAKE_COUNT,
        }
    }
}

pub fn parse_log_level(s: &str) -> Option<log::Level> {
    match s.to_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" | "warning" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}

pub fn parse_snow_count(s: &str) -> Option<usize> {
    match s.to_lowercase().as_str() {
        "off" | "none" | "false" => Some(0),
        other => other
            .parse::<usize>()
            .ok()
            .map(|n| n.min(SNOWFLAKE_COUNT_MAX)),
    }
}

impl PageConfig {
    /// Build a config from `location.search` (with or without the leading `?`).
    /// Unknown keys and unparsable values are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut cfg = Self::default();
        let query = search.strip_prefix('?').unwrap_or(search);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => {
                    if let Some(level) = parse_log_level(value) {
                        cfg.log_level = level;
                    }
                }
                "snow" => {
                    if let Some(n) = parse_snow_count(value) {
                        cfg.snowflake_count = n;
                    }
                }
                _ => {}
            }
        }
        cfg
    }
}

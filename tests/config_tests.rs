// Host-side tests for query-string page options.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;

#[test]
fn empty_query_gives_defaults() {
    assert_eq!(PageConfig::from_query(""), PageConfig::default());
    assert_eq!(PageConfig::from_query("?"), PageConfig::default());
    assert_eq!(PageConfig::default().snowflake_count, 200);
    assert_eq!(PageConfig::default().log_level, log::Level::Info);
}

#[test]
fn overrides_are_applied() {
    let cfg = PageConfig::from_query("?log=debug&snow=120");
    assert_eq!(cfg.log_level, log::Level::Debug);
    assert_eq!(cfg.snowflake_count, 120);

    let cfg = PageConfig::from_query("snow=off&log=WARN");
    assert_eq!(cfg.snowflake_count, 0);
    assert_eq!(cfg.log_level, log::Level::Warn);
}

#[test]
fn bad_values_fall_back_to_defaults() {
    let cfg = PageConfig::from_query("?log=loud&snow=lots&utm_source=mail&flag");
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn snow_count_is_capped() {
    assert_eq!(parse_snow_count("999999"), Some(SNOWFLAKE_COUNT_MAX));
    assert_eq!(parse_snow_count("none"), Some(0));
    assert_eq!(parse_snow_count("-3"), None);
}

#[test]
fn log_levels_parse_case_insensitively() {
    assert_eq!(parse_log_level("TRACE"), Some(log::Level::Trace));
    assert_eq!(parse_log_level("warning"), Some(log::Level::Warn));
    assert_eq!(parse_log_level("error"), Some(log::Level::Error));
    assert_eq!(parse_log_level(""), None);
}

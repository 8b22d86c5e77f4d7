// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod spring {
    include!("../src/core/spring.rs");
}

use chrono::DateTime;
use constants::*;
use spring::Spring;

#[test]
fn countdown_target_matches_label() {
    let target = DateTime::parse_from_rfc3339(COUNTDOWN_TARGET_LABEL).unwrap();
    assert_eq!(target.timestamp_millis(), COUNTDOWN_TARGET_MS);
    assert_eq!(target.offset().local_minus_utc(), 8 * 3600);
}

#[test]
fn time_units_compose() {
    assert_eq!(MS_PER_DAY, 86_400_000);
    assert_eq!(MS_PER_HOUR * 24, MS_PER_DAY);
    assert_eq!(COUNTDOWN_PERIOD_MS, 1_000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_directions() {
    // Sky layers drift up, ground layers sink
    assert!(STARS_PARALLAX_PX < 0.0);
    assert!(MOON_PARALLAX_PX < 0.0);
    assert!(NEIGHBORHOOD_PARALLAX_PX > 0.0);
    assert!(DIM_SNOW_PARALLAX_PX > NEIGHBORHOOD_PARALLAX_PX);
    assert!(PARALLAX_SCROLL_MAX_PX > PARALLAX_SCROLL_MIN_PX);
}

#[test]
fn layer_springs_do_not_oscillate() {
    for params in [STARS_SPRING, MOON_SPRING, NEIGHBORHOOD_SPRING, DIM_SNOW_SPRING] {
        let s = Spring::from_tuple(params);
        assert!(
            s.damping_ratio() >= 0.999,
            "damping ratio {} for {:?}",
            s.damping_ratio(),
            params
        );
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn snow_ranges_are_ordered() {
    assert!(SNOW_RADIUS_MIN > 0.0 && SNOW_RADIUS_MAX > SNOW_RADIUS_MIN);
    assert!(SNOW_SPEED_MIN > 0.0 && SNOW_SPEED_MAX > SNOW_SPEED_MIN);
    assert!(SNOW_WIND_MAX > SNOW_WIND_MIN);
    assert!(SNOW_TARGET_EASE > 0.0 && SNOW_TARGET_EASE < 1.0);
    assert_eq!(SNOWFLAKE_COUNT, 200);
}

#[test]
fn element_ids_are_unique() {
    let all = [
        ids::MUSIC,
        ids::MUSIC_TOGGLE,
        ids::STARS_LAYER,
        ids::MOON_LAYER,
        ids::NEIGHBORHOOD_LAYER,
        ids::DIM_SNOW_LAYER,
        ids::SCENE,
        ids::GREETING,
        ids::SNOW_CANVAS,
        ids::COUNTDOWN_DAYS,
        ids::COUNTDOWN_HOURS,
        ids::COUNTDOWN_MINUTES,
        ids::COUNTDOWN_SECONDS,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

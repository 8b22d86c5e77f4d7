/// Scene tuning constants.
///
/// Parallax ranges, spring parameters, snowfall parameters and the countdown
/// target live here so the rest of the code stays free of magic numbers.

// Scroll input domain for every parallax layer (px of window.scrollY)
pub const PARALLAX_SCROLL_MIN_PX: f32 = 0.0;
pub const PARALLAX_SCROLL_MAX_PX: f32 = 600.0;

// Parallax output ranges (px of translateY at the end of the scroll domain)
pub const STARS_PARALLAX_PX: f32 = -20.0;
pub const MOON_PARALLAX_PX: f32 = -10.0;
pub const NEIGHBORHOOD_PARALLAX_PX: f32 = 30.0; // bigger = moves more on scroll
pub const DIM_SNOW_PARALLAX_PX: f32 = 50.0;

// Spring parameters per layer: (stiffness, damping, mass)
pub const STARS_SPRING: (f32, f32, f32) = (80.0, 18.0, 0.8);
pub const MOON_SPRING: (f32, f32, f32) = (90.0, 18.0, 0.8);
pub const NEIGHBORHOOD_SPRING: (f32, f32, f32) = (90.0, 18.0, 0.9);
pub const DIM_SNOW_SPRING: (f32, f32, f32) = (90.0, 18.0, 0.9);

// Spring integration
pub const SPRING_MAX_STEP_SEC: f32 = 1.0 / 120.0;
pub const SPRING_MAX_SUBSTEPS: u32 = 12;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // longer gaps (hidden tab) are clamped
pub const SPRING_REST_DELTA: f32 = 0.01;
pub const SPRING_REST_SPEED: f32 = 0.01;

// Snowfall overlay
pub const SNOWFLAKE_COUNT: usize = 200;
pub const SNOWFLAKE_COLOR: &str = "#ffffff";
pub const SNOW_RADIUS_MIN: f32 = 0.5;
pub const SNOW_RADIUS_MAX: f32 = 3.0;
pub const SNOW_SPEED_MIN: f32 = 1.0; // px per 60 Hz frame
pub const SNOW_SPEED_MAX: f32 = 3.0;
pub const SNOW_WIND_MIN: f32 = -0.5;
pub const SNOW_WIND_MAX: f32 = 2.0;
pub const SNOW_CHANGE_FREQUENCY: f32 = 200.0; // frames between target re-draws (on average)
pub const SNOW_TARGET_EASE: f32 = 0.01; // fraction of the gap to the target closed per frame
pub const SNOW_FRAME_SEC: f32 = 1.0 / 60.0;
pub const SNOW_SEED: u64 = 0x5EED_F1A4E;

// Countdown target: 2026-01-01T00:00:00+08:00
pub const COUNTDOWN_TARGET_MS: i64 = 1_767_196_800_000;
pub const COUNTDOWN_TARGET_LABEL: &str = "2026-01-01T00:00:00+08:00";
pub const COUNTDOWN_PERIOD_MS: u32 = 1_000;

// Units
pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Element ids the page markup must provide.
pub mod ids {
    pub const MUSIC: &str = "music";
    pub const MUSIC_TOGGLE: &str = "music-toggle";
    pub const STARS_LAYER: &str = "layer-stars";
    pub const MOON_LAYER: &str = "layer-moon";
    pub const NEIGHBORHOOD_LAYER: &str = "layer-neighborhood";
    pub const DIM_SNOW_LAYER: &str = "layer-dim-snow";
    pub const SCENE: &str = "scene";
    pub const GREETING: &str = "greeting";
    pub const SNOW_CANVAS: &str = "snowfall";
    pub const COUNTDOWN_DAYS: &str = "countdown-days";
    pub const COUNTDOWN_HOURS: &str = "countdown-hours";
    pub const COUNTDOWN_MINUTES: &str = "countdown-minutes";
    pub const COUNTDOWN_SECONDS: &str = "countdown-seconds";
}

// CSS class toggled once the intro animations may run
pub const REVEALED_CLASS: &str = "revealed";

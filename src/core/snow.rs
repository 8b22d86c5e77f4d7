use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Snowflake {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub wind: f32,
    target_speed: f32,
    target_wind: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct SnowParams {
    pub count: usize,
    pub radius: [f32; 2],
    pub speed: [f32; 2],
    pub wind: [f32; 2],
    pub change_frequency: f32,
}

impl Default for SnowParams {
    fn default() -> Self {
        Self {
            count: SNOWFLAKE_COUNT,
            radius: [SNOW_RADIUS_MIN, SNOW_RADIUS_MAX],
            speed: [SNOW_SPEED_MIN, SNOW_SPEED_MAX],
            wind: [SNOW_WIND_MIN, SNOW_WIND_MAX],
            change_frequency: SNOW_CHANGE_FREQUENCY,
        }
    }
}

fn sample(rng: &mut StdRng, range: [f32; 2]) -> f32 {
    if range[1] > range[0] {
        rng.gen_range(range[0]..range[1])
    } else {
        range[0]
    }
}

/// Falling-snow particle field in viewport pixel space.
pub struct Snowfield {
    pub params: SnowParams,
    pub flakes: Vec<Snowflake>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl Snowfield {
    pub fn new(params: SnowParams, width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            params,
            flakes: Vec::with_capacity(params.count),
            width: width.max(1.0),
            height: height.max(1.0),
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..params.count {
            let y = field.rng.gen_range(0.0..field.height);
            let flake = field.spawn(y);
            field.flakes.push(flake);
        }
        field
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Adopt a new viewport size, pulling flakes that are now off-canvas
    /// back inside the horizontal bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        let w = self.width;
        for f in self.flakes.iter_mut() {
            f.pos.x = f.pos.x.rem_euclid(w);
        }
    }

    fn spawn(&mut self, y: f32) -> Snowflake {
        let p = self.params;
        let speed = sample(&mut self.rng, p.speed);
        let wind = sample(&mut self.rng, p.wind);
        Snowflake {
            pos: Vec2::new(self.rng.gen_range(0.0..self.width), y),
            radius: sample(&mut self.rng, p.radius),
            speed,
            wind,
            target_speed: speed,
            target_wind: wind,
        }
    }

    /// Advance every flake by `dt_sec`; motion is expressed per 60 Hz frame.
    pub fn step(&mut self, dt_sec: f32) {
        let frames = (dt_sec / SNOW_FRAME_SEC).clamp(0.0, 6.0);
        if frames <= 0.0 {
            return;
        }
        let p = self.params;
        let change_chance = if p.change_frequency > 0.0 {
            (frames / p.change_frequency).min(1.0)
        } else {
            0.0
        };
        let ease = (SNOW_TARGET_EASE * frames).min(1.0);
        let (w, h) = (self.width, self.height);

        for i in 0..self.flakes.len() {
            if self.rng.gen::<f32>() < change_chance {
                self.flakes[i].target_speed = sample(&mut self.rng, p.speed);
                self.flakes[i].target_wind = sample(&mut self.rng, p.wind);
            }
            let f = &mut self.flakes[i];
            f.speed += (f.target_speed - f.speed) * ease;
            f.wind += (f.target_wind - f.wind) * ease;
            f.pos.x = (f.pos.x + f.wind * frames).rem_euclid(w);
            f.pos.y += f.speed * frames;

            if f.pos.y - f.radius > h {
                let r = f.radius;
                let mut fresh = self.spawn(0.0);
                fresh.pos.y = -fresh.radius.max(r);
                self.flakes[i] = fresh;
            }
        }
    }
}

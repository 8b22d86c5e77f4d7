use crate::constants::{
    SPRING_MAX_FRAME_SEC, SPRING_MAX_STEP_SEC, SPRING_MAX_SUBSTEPS, SPRING_REST_DELTA,
    SPRING_REST_SPEED,
};

/// Second-order spring-damper parameters.
///
/// The damping ratio is `damping / (2 * sqrt(stiffness * mass))`; at or above
/// 1.0 the response never overshoots its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Spring {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub const fn from_tuple(params: (f32, f32, f32)) -> Self {
        Self::new(params.0, params.1, params.2)
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
}

impl SpringState {
    pub fn at(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    pub fn is_at_rest(&self, target: f32) -> bool {
        (self.position - target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Advance towards `target` by `dt_sec` using semi-implicit Euler on
    /// bounded sub-steps. Returns the new position.
    pub fn step(&mut self, spring: &Spring, target: f32, dt_sec: f32) -> f32 {
        if self.is_at_rest(target) {
            *self = Self::at(target);
            return self.position;
        }
        let dt = dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC);
        if dt <= 0.0 {
            return self.position;
        }
        let steps = ((dt / SPRING_MAX_STEP_SEC).ceil() as u32).clamp(1, SPRING_MAX_SUBSTEPS);
        let h = dt / steps as f32;
        let inv_mass = 1.0 / spring.mass.max(f32::EPSILON);
        for _ in 0..steps {
            let force = -spring.stiffness * (self.position - target) - spring.damping * self.velocity;
            self.velocity += force * inv_mass * h;
            self.position += self.velocity * h;
        }
        if self.is_at_rest(target) {
            *self = Self::at(target);
        }
        self.position
    }
}

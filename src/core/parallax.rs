use super::spring::{Spring, SpringState};
use crate::constants::*;

/// Clamped linear interpolation from an input range onto an output range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub input: [f32; 2],
    pub output: [f32; 2],
}

impl LinearMap {
    pub const fn new(input: [f32; 2], output: [f32; 2]) -> Self {
        Self { input, output }
    }

    /// Map a scroll offset onto `[0, range_px]` over the shared scroll domain.
    pub const fn scroll(range_px: f32) -> Self {
        Self::new(
            [PARALLAX_SCROLL_MIN_PX, PARALLAX_SCROLL_MAX_PX],
            [0.0, range_px],
        )
    }

    pub fn map(&self, x: f32) -> f32 {
        let [i0, i1] = self.input;
        let [o0, o1] = self.output;
        let span = i1 - i0;
        if span.abs() <= f32::EPSILON || x.is_nan() {
            return o0;
        }
        let t = ((x - i0) / span).clamp(0.0, 1.0);
        o0 + (o1 - o0) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Stars,
    Moon,
    Neighborhood,
    DimSnow,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Stars, Layer::Moon, Layer::Neighborhood, Layer::DimSnow];

    pub fn element_id(self) -> &'static str {
        match self {
            Layer::Stars => ids::STARS_LAYER,
            Layer::Moon => ids::MOON_LAYER,
            Layer::Neighborhood => ids::NEIGHBORHOOD_LAYER,
            Layer::DimSnow => ids::DIM_SNOW_LAYER,
        }
    }

    pub fn map(self) -> LinearMap {
        match self {
            Layer::Stars => LinearMap::scroll(STARS_PARALLAX_PX),
            Layer::Moon => LinearMap::scroll(MOON_PARALLAX_PX),
            Layer::Neighborhood => LinearMap::scroll(NEIGHBORHOOD_PARALLAX_PX),
            Layer::DimSnow => LinearMap::scroll(DIM_SNOW_PARALLAX_PX),
        }
    }

    pub fn spring(self) -> Spring {
        match self {
            Layer::Stars => Spring::from_tuple(STARS_SPRING),
            Layer::Moon => Spring::from_tuple(MOON_SPRING),
            Layer::Neighborhood => Spring::from_tuple(NEIGHBORHOOD_SPRING),
            Layer::DimSnow => Spring::from_tuple(DIM_SNOW_SPRING),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParallaxLayer {
    pub layer: Layer,
    pub map: LinearMap,
    pub spring: Spring,
    pub state: SpringState,
}

impl ParallaxLayer {
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            map: layer.map(),
            spring: layer.spring(),
            state: SpringState::default(),
        }
    }

    pub fn raw(&self, scroll_y: f32) -> f32 {
        self.map.map(scroll_y)
    }

    pub fn step(&mut self, scroll_y: f32, dt_sec: f32) -> f32 {
        let target = self.raw(scroll_y);
        self.state.step(&self.spring, target, dt_sec)
    }
}

/// Smoothed vertical offsets, in layer order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerOffsets(pub [f32; 4]);

impl LayerOffsets {
    pub fn get(&self, layer: Layer) -> f32 {
        self.0[layer as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Layer, f32)> + '_ {
        Layer::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

/// All four parallax layers driven from one scroll offset.
#[derive(Clone, Debug)]
pub struct ParallaxRig {
    layers: [ParallaxLayer; 4],
}

impl Default for ParallaxRig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallaxRig {
    pub fn new() -> Self {
        Self {
            layers: Layer::ALL.map(ParallaxLayer::new),
        }
    }

    /// Start every spring at its raw offset for `scroll_y` (e.g. a page
    /// reloaded mid-scroll) so the first frames do not glide in from zero.
    pub fn settle_at(&mut self, scroll_y: f32) {
        for l in self.layers.iter_mut() {
            l.state = SpringState::at(l.raw(scroll_y));
        }
    }

    pub fn step(&mut self, scroll_y: f32, dt_sec: f32) -> LayerOffsets {
        let mut out = [0.0_f32; 4];
        for (o, l) in out.iter_mut().zip(self.layers.iter_mut()) {
            *o = l.step(scroll_y, dt_sec);
        }
        LayerOffsets(out)
    }

    pub fn offsets(&self) -> LayerOffsets {
        LayerOffsets(std::array::from_fn(|i| self.layers[i].state.position))
    }

    pub fn layer(&self, layer: Layer) -> &ParallaxLayer {
        &self.layers[layer as usize]
    }
}

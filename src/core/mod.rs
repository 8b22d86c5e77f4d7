pub mod countdown;
pub mod parallax;
pub mod playback;
pub mod snow;
pub mod spring;

pub use countdown::*;
pub use parallax::*;
pub use playback::*;
pub use snow::*;
pub use spring::*;

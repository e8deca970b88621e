pub use crate::camera::ViewportCamera;
pub use crate::integrator::{PhongIntegrator, SamplerIntegrator};
pub use crate::math::Color;
pub use crate::profile::Profile;
pub use crate::world::World;

pub use rayon::prelude::*;

pub use super::sink::{DisplaySink, Pixel};
pub use super::Renderer;

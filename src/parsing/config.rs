use crate::camera::ViewportCamera;
use crate::math::Point3;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 600,
            height: 600,
        }
    }
}

/// Size of the viewport rectangle in world units.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 1.0,
            height: 1.0,
        }
    }
}

fn default_projection_distance() -> f32 {
    1.0
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: Option<String>,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_projection_distance")]
    pub projection_distance: f32,
    #[serde(default)]
    pub camera: [f32; 3],
    pub threads: Option<u16>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: None,
            resolution: Resolution::default(),
            viewport: Viewport::default(),
            projection_distance: default_projection_distance(),
            camera: [0.0; 3],
            threads: None,
        }
    }
}

impl RenderSettings {
    pub fn camera(&self) -> ViewportCamera {
        ViewportCamera::new(
            Point3::from(self.camera),
            self.viewport.width,
            self.viewport.height,
            self.projection_distance,
            self.resolution.width,
            self.resolution.height,
        )
    }

    pub fn total_pixels(&self) -> usize {
        self.resolution.width * self.resolution.height
    }
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    #[default]
    Naive,
    Parallel,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub scene_file: String,
    #[serde(default)]
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

impl Config {
    /// Thread count to size the global pool with, the largest requested by any render.
    pub fn max_threads(&self) -> usize {
        self.render_settings
            .iter()
            .map(|i| &i.threads)
            .fold(1, |a, &b| a.max(b.map_or_else(num_cpus::get, |t| t as usize)))
    }
}

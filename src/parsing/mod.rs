pub mod config;
pub mod primitives;

use config::Config;
use primitives::{LightData, SphereData};

use crate::world::World;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SceneData {
    #[serde(default)]
    pub spheres: Vec<SphereData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
}

fn load_arbitrary<T>(filepath: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.to_string_lossy());
    let mut input = String::new();

    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;
    info!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.to_string_lossy()))?;
    Ok(data)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> Result<Config> {
    let config: Config = load_arbitrary(filepath.as_ref())?;
    if config.render_settings.is_empty() {
        warn!("config has no render settings, nothing will be rendered");
    }
    Ok(config)
}

pub fn load_scene(filepath: impl AsRef<Path>) -> Result<SceneData> {
    load_arbitrary(filepath.as_ref())
}

impl SceneData {
    pub fn parse(self) -> Result<World> {
        let mut instances = Vec::with_capacity(self.spheres.len());
        for (id, data) in self.spheres.into_iter().enumerate() {
            instances.push(data.parse(id)?);
        }
        let lights = self
            .lights
            .into_iter()
            .enumerate()
            .map(|(id, data)| data.parse().with_context(|| format!("light {}", id)))
            .collect::<Result<Vec<_>>>()?;
        info!(
            "parsed scene with {} spheres and {} lights",
            instances.len(),
            lights.len()
        );
        Ok(World::new(instances, lights))
    }
}

pub fn construct_world(scene_file: impl AsRef<Path>) -> Result<World> {
    let scene_file = scene_file.as_ref();
    load_scene(scene_file)?
        .parse()
        .with_context(|| format!("invalid scene {}", scene_file.to_string_lossy()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::world::{scenes, Light};

    #[test]
    fn test_parse_inline_scene() {
        let scene: SceneData = toml::from_str(
            r#"
[[spheres]]
center = [0.0, -1.0, 3.0]
radius = 1.0
color = [255, 0, 0]
specular = -1.0

[[lights]]
type = "Ambient"
intensity = 0.2

[[lights]]
type = "Directional"
intensity = 0.2
direction = [1.0, 4.0, 4.0]
"#,
        )
        .unwrap();
        let world = scene.parse().unwrap();
        assert_eq!(world.instances.len(), 1);
        assert_eq!(world.instances[0].specular, None);
        assert_eq!(world.lights[0], Light::ambient(0.2));
    }

    #[test]
    fn test_invalid_scene_is_rejected() {
        let scene: SceneData = toml::from_str(
            r#"
[[spheres]]
center = [0.0, 0.0, 3.0]
radius = 0.0
color = [255, 0, 0]
"#,
        )
        .unwrap();
        assert!(scene.parse().is_err());
        let spot = "[[lights]]\ntype = \"Spot\"\nintensity = 1.0";
        assert!(toml::from_str::<SceneData>(spot).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(construct_world("data/scenes/does_not_exist.toml").is_err());
    }

    #[test]
    fn test_shipped_scenes_match_builtins() {
        let flat = construct_world("data/scenes/flat_spheres.toml").unwrap();
        let builtin = scenes::flat_spheres();
        assert_eq!(flat.instances, builtin.instances);
        assert_eq!(flat.lights, builtin.lights);

        let lit = construct_world("data/scenes/lit_spheres.toml").unwrap();
        let builtin = scenes::lit_spheres();
        assert_eq!(lit.instances, builtin.instances);
        assert_eq!(lit.lights, builtin.lights);
    }

    #[test]
    fn test_shipped_config() {
        let config = get_settings("data/config.toml").unwrap();
        assert!(!config.render_settings.is_empty());
        assert!(Path::new(&config.scene_file).exists());
    }
}

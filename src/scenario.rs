//! Scenario files: a named asteroid + impact site + run options in YAML.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::geo::GeoPoint;
use crate::physics::{RadiusModel, DENSITY_ROCK};
use crate::simulation::{ImpactParameters, SimulationOptions};

fn default_density() -> f64 {
    DENSITY_ROCK
}

fn default_angle_deg() -> f64 {
    45.0
}

fn default_ocean() -> bool {
    true
}

fn default_polygon_steps() -> usize {
    64
}

fn default_max_seismic_distance_km() -> f64 {
    2000.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub asteroid: ScenarioAsteroid,
    pub impact: ScenarioImpactSite,
    #[serde(default)]
    pub options: ScenarioOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioAsteroid {
    pub diameter_m: f64,
    #[serde(default = "default_density")]
    pub density_kgm3: f64,
    pub velocity_kms: f64,
    #[serde(default = "default_angle_deg")]
    pub angle_deg: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioImpactSite {
    pub lat: f64,
    pub lng: f64,
    /// Display name for the impact point.
    pub site: Option<String>,
    #[serde(default = "default_ocean")]
    pub ocean: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioOptions {
    #[serde(default)]
    pub radius_model: RadiusModel,
    #[serde(default = "default_polygon_steps")]
    pub polygon_steps: usize,
    #[serde(default = "default_max_seismic_distance_km")]
    pub max_seismic_distance_km: f64,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            radius_model: RadiusModel::default(),
            polygon_steps: default_polygon_steps(),
            max_seismic_distance_km: default_max_seismic_distance_km(),
        }
    }
}

impl Scenario {
    pub fn impact_parameters(&self) -> ImpactParameters {
        ImpactParameters {
            diameter_m: self.asteroid.diameter_m,
            density_kgm3: self.asteroid.density_kgm3,
            velocity_kms: self.asteroid.velocity_kms,
            angle_deg: self.asteroid.angle_deg,
        }
    }

    pub fn impact_location(&self) -> GeoPoint {
        GeoPoint::new(self.impact.lat, self.impact.lng)
    }

    pub fn simulation_options(&self) -> SimulationOptions {
        SimulationOptions {
            radius_model: self.options.radius_model,
            polygon_steps: self.options.polygon_steps,
            max_seismic_distance_km: self.options.max_seismic_distance_km,
            ocean_impact: self.impact.ocean,
        }
    }

    pub fn site_label(&self) -> &str {
        self.impact.site.as_deref().unwrap_or("impact point")
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

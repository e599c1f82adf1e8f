//! Crater scaling and the concentric damage-radius bands.

use serde::{Deserialize, Serialize};

use super::{energy, ImpactParameters, EARTH_GRAVITY};

/// The three concentric overpressure bands around the impact point, km.
///
/// Always strictly nested: severe < moderate < light for any positive
/// energy, because each is the same cube root with a larger multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRadii {
    pub severe_km: f64,
    pub moderate_km: f64,
    pub light_km: f64,
}

impl DamageRadii {
    pub fn zero() -> Self {
        Self {
            severe_km: 0.0,
            moderate_km: 0.0,
            light_km: 0.0,
        }
    }

    pub fn max_km(&self) -> f64 {
        self.light_km.max(self.moderate_km).max(self.severe_km)
    }

    pub fn radius_km(&self, tier: DamageTier) -> f64 {
        match tier {
            DamageTier::Severe => self.severe_km,
            DamageTier::Moderate => self.moderate_km,
            DamageTier::Light => self.light_km,
        }
    }
}

/// Ground damage band, most destructive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageTier {
    Severe,
    Moderate,
    Light,
}

impl DamageTier {
    /// Checked in this order everywhere nested radii are resolved, so a
    /// location lands in its single most destructive qualifying band.
    pub const PRIORITY: [DamageTier; 3] =
        [DamageTier::Severe, DamageTier::Moderate, DamageTier::Light];
}

/// Strategy for turning released energy into the three damage radii.
///
/// The two published approximations in use are not equivalent, so one
/// strategy is chosen per simulation run and applied to every consumer;
/// mixing them inside a run would produce inconsistent geometry.
pub trait RadiusScaling {
    fn radii_km(&self, energy_megatons: f64) -> DamageRadii;
}

/// Cube root of megatons with 2/5/10 km multipliers.
pub struct CubeRootMegatons;

impl RadiusScaling for CubeRootMegatons {
    fn radii_km(&self, energy_megatons: f64) -> DamageRadii {
        let cbrt = energy_megatons.cbrt();
        DamageRadii {
            severe_km: cbrt * 2.0,
            moderate_km: cbrt * 5.0,
            light_km: cbrt * 10.0,
        }
    }
}

/// TNT blast scaling on the cube root of kilotons: >100 kPa, 10-100 kPa and
/// 1-10 kPa overpressure bands.
pub struct OverpressureKilotons;

impl RadiusScaling for OverpressureKilotons {
    fn radii_km(&self, energy_megatons: f64) -> DamageRadii {
        let cbrt_kt = (energy_megatons * 1000.0).cbrt();
        DamageRadii {
            severe_km: cbrt_kt * 0.54,
            moderate_km: cbrt_kt * 1.78,
            light_km: cbrt_kt * 4.71,
        }
    }
}

/// Scenario-selectable radius scaling law.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusModel {
    #[default]
    Simple,
    Overpressure,
}

impl RadiusScaling for RadiusModel {
    fn radii_km(&self, energy_megatons: f64) -> DamageRadii {
        match self {
            RadiusModel::Simple => CubeRootMegatons.radii_km(energy_megatons),
            RadiusModel::Overpressure => OverpressureKilotons.radii_km(energy_megatons),
        }
    }
}

/// Full primary-physics output for one impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub mass_kg: f64,
    pub energy_joules: f64,
    pub energy_megatons: f64,
    pub crater_diameter_m: f64,
    pub crater_depth_m: f64,
    pub radii: DamageRadii,
}

/// Simplified complex-crater scaling law, meters.
///
/// A grazing impact (angle 0) collapses the crater to zero through the
/// sin term.
pub fn crater_diameter_m(energy_joules: f64, density_kgm3: f64, angle_deg: f64) -> f64 {
    let angle_rad = angle_deg.to_radians();
    1.8 * (energy_joules / (EARTH_GRAVITY * density_kgm3)).powf(0.25)
        * angle_rad.sin().cbrt()
}

/// Depth from the complex-crater depth-to-diameter ratio.
pub fn crater_depth_m(crater_diameter_m: f64) -> f64 {
    crater_diameter_m / 6.5
}

/// Run the primary pipeline: mass, energy, crater, damage radii.
pub fn calculate_impact(params: &ImpactParameters, scaling: &dyn RadiusScaling) -> ImpactResult {
    let mass_kg = energy::asteroid_mass_kg(params.diameter_m, params.density_kgm3);
    let energy_joules =
        energy::kinetic_energy_joules(params.diameter_m, params.density_kgm3, params.velocity_kms);
    let energy_megatons = energy::energy_megatons(energy_joules);
    let diameter = crater_diameter_m(energy_joules, params.density_kgm3, params.angle_deg);
    ImpactResult {
        mass_kg,
        energy_joules,
        energy_megatons,
        crater_diameter_m: diameter,
        crater_depth_m: crater_depth_m(diameter),
        radii: scaling.radii_km(energy_megatons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 1000.0,
            density_kgm3: 3000.0,
            velocity_kms: 20.0,
            angle_deg: 45.0,
        }
    }

    #[test]
    fn radii_strictly_nested_under_both_models() {
        for energy_mt in [0.001, 0.1, 1.0, 24.0, 75.0, 10_000.0] {
            for model in [RadiusModel::Simple, RadiusModel::Overpressure] {
                let r = model.radii_km(energy_mt);
                assert!(
                    r.severe_km < r.moderate_km && r.moderate_km < r.light_km,
                    "{model:?} at {energy_mt} MT: {r:?}"
                );
            }
        }
    }

    #[test]
    fn simple_model_matches_cube_root_multipliers() {
        // 8 MT has an exact cube root, keeping the expectations round.
        let r = CubeRootMegatons.radii_km(8.0);
        assert!((r.severe_km - 4.0).abs() < 1e-12);
        assert!((r.moderate_km - 10.0).abs() < 1e-12);
        assert!((r.light_km - 20.0).abs() < 1e-12);
    }

    #[test]
    fn grazing_impact_collapses_crater() {
        let mut p = params();
        p.angle_deg = 0.0;
        let result = calculate_impact(&p, &CubeRootMegatons);
        assert_eq!(result.crater_diameter_m, 0.0);
        // Energy is unaffected by angle.
        assert!(result.energy_megatons > 0.0);
    }

    #[test]
    fn reference_impact_produces_expected_scales() {
        let result = calculate_impact(&params(), &CubeRootMegatons);
        assert!((75.0..76.0).contains(&result.energy_megatons));
        // Crater on the order of kilometers for a 1 km impactor.
        assert!(result.crater_diameter_m > 2000.0 && result.crater_diameter_m < 20_000.0);
        assert!((result.crater_depth_m - result.crater_diameter_m / 6.5).abs() < 1e-9);
        // ~75 MT -> severe band of roughly 8.4 km under the simple model.
        assert!((result.radii.severe_km - 2.0 * result.energy_megatons.cbrt()).abs() < 1e-9);
    }

    #[test]
    fn overpressure_model_uses_kiloton_scaling() {
        let r = OverpressureKilotons.radii_km(1.0);
        let cbrt_kt = 1000.0_f64.cbrt();
        assert!((r.severe_km - cbrt_kt * 0.54).abs() < 1e-9);
        assert!((r.light_km - cbrt_kt * 4.71).abs() < 1e-9);
    }
}

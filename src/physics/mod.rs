//! The impact physics pipeline: kinetic energy, crater scaling, damage
//! radii, and energy-driven secondary effects.
//!
//! Unit convention for the whole crate: asteroid diameter in meters,
//! velocity in km/s, density in kg/m³, angle in degrees from horizontal.
//! Energy math is SI (joules); crater dimensions come back in meters,
//! damage radii and all map distances in kilometers. Names carry the unit
//! suffix so mixed-unit call sites stand out.

mod crater;
mod energy;
mod secondary;

pub use crater::{
    calculate_impact, crater_depth_m, crater_diameter_m, CubeRootMegatons, DamageRadii,
    DamageTier, ImpactResult, OverpressureKilotons, RadiusModel, RadiusScaling,
};
pub use energy::{asteroid_mass_kg, energy_megatons, kinetic_energy_joules};
pub use secondary::{estimate_secondary_effects, SecondaryEffects};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Surface gravity used by the crater scaling law, m/s².
pub const EARTH_GRAVITY: f64 = 9.81;

/// Default density for a rocky asteroid, kg/m³.
pub const DENSITY_ROCK: f64 = 3000.0;

/// One megaton of TNT in joules.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Asteroid entry parameters. Diameter in meters, density kg/m³, velocity
/// km/s, angle degrees from horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    pub diameter_m: f64,
    pub density_kgm3: f64,
    pub velocity_kms: f64,
    pub angle_deg: f64,
}

impl ImpactParameters {
    /// Range-check before the pipeline runs. The pure functions downstream
    /// accept anything and degrade numerically; this is the single gate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.diameter_m > 0.0) {
            return Err(ValidationError::NonPositiveDiameter(self.diameter_m));
        }
        if !(self.velocity_kms > 0.0) {
            return Err(ValidationError::NonPositiveVelocity(self.velocity_kms));
        }
        if !(self.density_kgm3 > 0.0) {
            return Err(ValidationError::NonPositiveDensity(self.density_kgm3));
        }
        if !(self.angle_deg > 0.0 && self.angle_deg <= 90.0) {
            return Err(ValidationError::AngleOutOfRange(self.angle_deg));
        }
        Ok(())
    }
}

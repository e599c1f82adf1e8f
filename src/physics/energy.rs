//! Mass and kinetic energy from asteroid geometry.

use std::f64::consts::PI;

use super::JOULES_PER_MEGATON;

/// Mass of a spherical asteroid, kg.
pub fn asteroid_mass_kg(diameter_m: f64, density_kgm3: f64) -> f64 {
    let radius_m = diameter_m / 2.0;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    volume_m3 * density_kgm3
}

/// Kinetic energy at entry, joules.
///
/// Performs no validation: non-positive diameter or velocity degrades to a
/// non-positive energy, and NaN propagates. Range checks belong to the
/// boundary layer (`ImpactParameters::validate`).
pub fn kinetic_energy_joules(diameter_m: f64, density_kgm3: f64, velocity_kms: f64) -> f64 {
    let mass = asteroid_mass_kg(diameter_m, density_kgm3);
    let velocity_ms = velocity_kms * 1000.0;
    0.5 * mass * velocity_ms * velocity_ms
}

/// TNT equivalent of an energy in joules, megatons.
pub fn energy_megatons(energy_joules: f64) -> f64 {
    energy_joules / JOULES_PER_MEGATON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilometer_impactor_reference_case() {
        // 1 km rocky asteroid at 20 km/s: mass ~1.57e12 kg, ~3.14e20 J, ~75 MT.
        let mass = asteroid_mass_kg(1000.0, 3000.0);
        assert!((mass / 1.57e12 - 1.0).abs() < 0.01, "mass {mass}");

        let energy = kinetic_energy_joules(1000.0, 3000.0, 20.0);
        assert!((energy / 3.14e20 - 1.0).abs() < 0.01, "energy {energy}");

        let mt = energy_megatons(energy);
        assert!((75.0..76.0).contains(&mt), "megatons {mt}");
    }

    #[test]
    fn energy_monotonic_in_diameter_and_velocity() {
        let base = kinetic_energy_joules(100.0, 3000.0, 20.0);
        assert!(kinetic_energy_joules(101.0, 3000.0, 20.0) > base);
        assert!(kinetic_energy_joules(100.0, 3000.0, 20.5) > base);
    }

    #[test]
    fn degenerate_inputs_degrade_instead_of_panicking() {
        assert_eq!(kinetic_energy_joules(0.0, 3000.0, 20.0), 0.0);
        assert_eq!(kinetic_energy_joules(100.0, 3000.0, 0.0), 0.0);
        assert!(kinetic_energy_joules(-10.0, 3000.0, 20.0) < 0.0);
    }
}

//! Reconciliation of optional external impact estimates with the local
//! physics.
//!
//! A narrative-analysis service may hand back its own numeric payload for
//! the same scenario. When a figure is present and positive it is averaged
//! with the locally computed value; otherwise the local value stands. The
//! pipeline never waits on or requires the external side, so numeric
//! results are always available.

use serde::{Deserialize, Serialize};

use crate::physics::{DamageRadii, ImpactResult};

/// Numeric estimates an external analysis service may supply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalEstimates {
    pub energy_megatons: Option<f64>,
    pub crater_diameter_m: Option<f64>,
    pub radii: Option<DamageRadii>,
    pub thermal_radius_km: Option<f64>,
}

/// Average a local figure with an external one, ignoring absent or
/// non-positive external values.
pub fn blend(local: f64, external: Option<f64>) -> f64 {
    match external {
        Some(x) if x > 0.0 && x.is_finite() => (local + x) / 2.0,
        _ => local,
    }
}

fn blend_radii(local: DamageRadii, external: Option<DamageRadii>) -> DamageRadii {
    // All three bands must be present and positive to blend; a partial set
    // would break the nesting invariant.
    match external {
        Some(ext)
            if ext.severe_km > 0.0 && ext.moderate_km > 0.0 && ext.light_km > 0.0 =>
        {
            DamageRadii {
                severe_km: (local.severe_km + ext.severe_km) / 2.0,
                moderate_km: (local.moderate_km + ext.moderate_km) / 2.0,
                light_km: (local.light_km + ext.light_km) / 2.0,
            }
        }
        _ => local,
    }
}

/// Fold external estimates into a physics result.
pub fn reconcile(local: &ImpactResult, external: Option<&ExternalEstimates>) -> ImpactResult {
    let Some(ext) = external else {
        return *local;
    };
    let crater_diameter_m = blend(local.crater_diameter_m, ext.crater_diameter_m);
    ImpactResult {
        mass_kg: local.mass_kg,
        energy_joules: local.energy_joules,
        energy_megatons: blend(local.energy_megatons, ext.energy_megatons),
        crater_diameter_m,
        crater_depth_m: crater_diameter_m / 6.5,
        radii: blend_radii(local.radii, ext.radii),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> ImpactResult {
        ImpactResult {
            mass_kg: 1.0e12,
            energy_joules: 3.0e20,
            energy_megatons: 72.0,
            crater_diameter_m: 6500.0,
            crater_depth_m: 1000.0,
            radii: DamageRadii {
                severe_km: 8.0,
                moderate_km: 20.0,
                light_km: 40.0,
            },
        }
    }

    #[test]
    fn absent_estimates_leave_physics_untouched() {
        let result = reconcile(&local(), None);
        assert_eq!(result, local());

        let empty = ExternalEstimates::default();
        assert_eq!(reconcile(&local(), Some(&empty)), local());
    }

    #[test]
    fn present_estimates_are_averaged() {
        let ext = ExternalEstimates {
            energy_megatons: Some(80.0),
            crater_diameter_m: Some(7500.0),
            ..Default::default()
        };
        let result = reconcile(&local(), Some(&ext));
        assert_eq!(result.energy_megatons, 76.0);
        assert_eq!(result.crater_diameter_m, 7000.0);
        assert!((result.crater_depth_m - 7000.0 / 6.5).abs() < 1e-9);
        // Radii untouched when the external set is missing.
        assert_eq!(result.radii, local().radii);
    }

    #[test]
    fn junk_external_values_are_ignored() {
        assert_eq!(blend(10.0, Some(0.0)), 10.0);
        assert_eq!(blend(10.0, Some(-4.0)), 10.0);
        assert_eq!(blend(10.0, Some(f64::NAN)), 10.0);
        assert_eq!(blend(10.0, Some(30.0)), 20.0);
    }

    #[test]
    fn partial_radii_do_not_blend() {
        let ext = ExternalEstimates {
            radii: Some(DamageRadii {
                severe_km: 9.0,
                moderate_km: 0.0,
                light_km: 50.0,
            }),
            ..Default::default()
        };
        let result = reconcile(&local(), Some(&ext));
        assert_eq!(result.radii, local().radii);
    }
}

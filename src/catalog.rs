//! Near-Earth-object catalog records, the upstream source of impact
//! parameters.
//!
//! The remote catalog API is an external collaborator; records here mirror
//! its shape (diameters in km, approach velocity in km/h, hazard flag) and
//! a small built-in sample stands in when no live feed is wired up. As far
//! as the pipeline is concerned a catalog entry is just another way to fill
//! in `ImpactParameters`.

use serde::{Deserialize, Serialize};

use crate::simulation::ImpactParameters;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    pub estimated_diameter_km_min: f64,
    pub estimated_diameter_km_max: f64,
    /// Relative velocity at close approach, km/h, as the catalog reports it.
    pub relative_velocity_kmh: f64,
    pub close_approach_date: String,
    pub potentially_hazardous: bool,
}

impl Asteroid {
    /// Mean of the catalog's diameter band, meters.
    pub fn mean_diameter_m(&self) -> f64 {
        (self.estimated_diameter_km_min + self.estimated_diameter_km_max) / 2.0 * 1000.0
    }

    /// Approach velocity converted to km/s.
    pub fn velocity_kms(&self) -> f64 {
        self.relative_velocity_kmh / 3600.0
    }

    /// Density guess by hazard class: flagged objects skew denser.
    pub fn assumed_density_kgm3(&self) -> f64 {
        if self.potentially_hazardous {
            3200.0
        } else {
            2800.0
        }
    }

    /// Impact parameters for this record at the given entry angle.
    pub fn impact_parameters(&self, angle_deg: f64) -> ImpactParameters {
        ImpactParameters {
            diameter_m: self.mean_diameter_m(),
            density_kgm3: self.assumed_density_kgm3(),
            velocity_kms: self.velocity_kms(),
            angle_deg,
        }
    }
}

/// Built-in records used when the live catalog is unreachable.
pub fn sample_catalog() -> Vec<Asteroid> {
    vec![
        Asteroid {
            id: "2465633".into(),
            name: "(2009 JF1)".into(),
            estimated_diameter_km_min: 0.0109,
            estimated_diameter_km_max: 0.0244,
            relative_velocity_kmh: 48_978.6,
            close_approach_date: "2022-05-09".into(),
            potentially_hazardous: false,
        },
        Asteroid {
            id: "3542519".into(),
            name: "(2010 PK9)".into(),
            estimated_diameter_km_min: 0.11,
            estimated_diameter_km_max: 0.25,
            relative_velocity_kmh: 61_155.0,
            close_approach_date: "2022-07-23".into(),
            potentially_hazardous: true,
        },
        Asteroid {
            id: "54016154".into(),
            name: "(2020 SO)".into(),
            estimated_diameter_km_min: 0.005,
            estimated_diameter_km_max: 0.012,
            relative_velocity_kmh: 2_336.3,
            close_approach_date: "2020-12-01".into(),
            potentially_hazardous: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_units_convert_to_pipeline_units() {
        let catalog = sample_catalog();
        let pk9 = catalog.iter().find(|a| a.name.contains("PK9")).unwrap();

        assert!((pk9.mean_diameter_m() - 180.0).abs() < 1e-9);
        assert!((pk9.velocity_kms() - 61_155.0 / 3600.0).abs() < 1e-9);
        assert_eq!(pk9.assumed_density_kgm3(), 3200.0);

        let params = pk9.impact_parameters(45.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn non_hazardous_records_use_lighter_density() {
        let catalog = sample_catalog();
        let so = catalog.iter().find(|a| a.name.contains("2020 SO")).unwrap();
        assert_eq!(so.assumed_density_kgm3(), 2800.0);
    }
}

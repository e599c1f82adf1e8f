//! The full impact pipeline: parameters in, one self-contained report out.
//!
//! Every run recomputes everything from its arguments; there is no cache
//! and no shared state, so concurrent runs are independent by construction.

use serde::{Deserialize, Serialize};

use crate::cities::{self, AffectedCity};
use crate::earthquake::{self, EarthquakeEffect, EarthquakeSummary};
use crate::enrich::{self, ExternalEstimates};
use crate::error::ValidationError;
use crate::exposure::{self, PopulationExposure};
use crate::geo::GeoPoint;
use crate::hazard::{self, HazardZone, DEFAULT_POLYGON_STEPS};
use crate::physics::{
    calculate_impact, estimate_secondary_effects, ImpactResult, RadiusModel, SecondaryEffects,
};

pub use crate::physics::ImpactParameters;

/// Per-run knobs, all defaulted for the common case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOptions {
    /// Which radius scaling law drives every distance-based consumer.
    pub radius_model: RadiusModel,
    /// Segments per hazard circle.
    pub polygon_steps: usize,
    /// Search radius for induced shaking, km.
    pub max_seismic_distance_km: f64,
    /// Whether the impact point is treated as open water.
    pub ocean_impact: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            radius_model: RadiusModel::Simple,
            polygon_steps: DEFAULT_POLYGON_STEPS,
            max_seismic_distance_km: earthquake::DEFAULT_MAX_DISTANCE_KM,
            ocean_impact: true,
        }
    }
}

/// Headline severity class by released energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityClass {
    Minor,
    Moderate,
    Major,
    Catastrophic,
    ExtinctionLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct Severity {
    pub class: SeverityClass,
    pub description: &'static str,
    pub climate: &'static str,
    pub biodiversity: &'static str,
}

pub fn classify_severity(energy_megatons: f64) -> Severity {
    if energy_megatons < 1.0 {
        Severity {
            class: SeverityClass::Minor,
            description: "Local damage, similar to a small building collapse",
            climate: "Minimal climate impact. Localized dust and debris.",
            biodiversity: "Minimal effect on wildlife. Possible injuries to nearby animals.",
        }
    } else if energy_megatons < 100.0 {
        Severity {
            class: SeverityClass::Moderate,
            description: "City-wide destruction, similar to the Hiroshima bomb",
            climate: "Local climate disruption. Dust in atmosphere for weeks.",
            biodiversity: "Significant wildlife casualties in impact zone.",
        }
    } else if energy_megatons < 10_000.0 {
        Severity {
            class: SeverityClass::Major,
            description: "Regional devastation, affects entire metropolitan areas",
            climate: "Regional climate effects. Dust blocking sunlight for months.",
            biodiversity: "Mass extinction event for local species. Food chain disruption.",
        }
    } else if energy_megatons < 1_000_000.0 {
        Severity {
            class: SeverityClass::Catastrophic,
            description: "Continental damage, climate effects for years",
            climate: "Global climate catastrophe. Nuclear winter scenario. Years of darkness.",
            biodiversity: "Mass extinction event. 70%+ of species at risk.",
        }
    } else {
        Severity {
            class: SeverityClass::ExtinctionLevel,
            description: "Global catastrophe, mass extinction event",
            climate: "Global climate catastrophe. Nuclear winter scenario. Years of darkness.",
            biodiversity: "Mass extinction event. 70%+ of species at risk.",
        }
    }
}

/// Everything one simulation run produces.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    pub location: GeoPoint,
    pub parameters: ImpactParameters,
    pub physics: ImpactResult,
    pub severity: Severity,
    pub secondary: SecondaryEffects,
    pub hazard_zones: Vec<HazardZone>,
    pub affected_cities: Vec<AffectedCity>,
    pub earthquake_effects: Vec<EarthquakeEffect>,
    pub earthquake_summary: EarthquakeSummary,
    pub population_exposure: PopulationExposure,
    /// Area inside the light band, km².
    pub affected_area_km2: f64,
}

/// Run the whole pipeline for one impact.
///
/// `external` carries optional enrichment estimates; when absent the report
/// is pure local physics. Fails only on boundary validation.
pub fn run(
    params: ImpactParameters,
    location: GeoPoint,
    options: SimulationOptions,
    external: Option<&ExternalEstimates>,
) -> Result<ImpactReport, ValidationError> {
    params.validate()?;
    location.validate()?;

    let local_physics = calculate_impact(&params, &options.radius_model);
    let physics = enrich::reconcile(&local_physics, external);

    let hazard_zones =
        hazard::generate_hazard_polygons(location, &physics.radii, options.polygon_steps);
    let affected_cities = cities::find_affected_cities(location, &physics.radii);
    let earthquake_effects = earthquake::calculate_earthquake_effects(
        location,
        physics.energy_megatons,
        options.max_seismic_distance_km,
    );
    let earthquake_summary = earthquake::summarize(&earthquake_effects);
    let secondary = estimate_secondary_effects(
        &params,
        options.ocean_impact,
        Some(physics.energy_megatons),
    );
    let population_exposure = exposure::calculate_population_exposure(location, &hazard_zones);

    let max_radius = physics.radii.max_km();
    let affected_area_km2 = std::f64::consts::PI * max_radius * max_radius;

    Ok(ImpactReport {
        location,
        parameters: params,
        severity: classify_severity(physics.energy_megatons),
        physics,
        secondary,
        hazard_zones,
        affected_cities,
        earthquake_effects,
        earthquake_summary,
        population_exposure,
        affected_area_km2,
    })
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
    fn validation_gates_the_pipeline() {
        let mut p = params();
        p.diameter_m = 0.0;
        let err = run(p, GeoPoint::new(0.0, 0.0), SimulationOptions::default(), None)
            .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveDiameter(0.0));

        let mut p = params();
        p.angle_deg = 95.0;
        assert!(matches!(
            run(p, GeoPoint::new(0.0, 0.0), SimulationOptions::default(), None),
            Err(ValidationError::AngleOutOfRange(_))
        ));

        let bad_location = GeoPoint::new(0.0, 200.0);
        assert!(matches!(
            run(params(), bad_location, SimulationOptions::default(), None),
            Err(ValidationError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn severity_classes_by_energy() {
        assert_eq!(classify_severity(0.5).class, SeverityClass::Minor);
        assert_eq!(classify_severity(75.0).class, SeverityClass::Moderate);
        assert_eq!(classify_severity(5_000.0).class, SeverityClass::Major);
        assert_eq!(classify_severity(500_000.0).class, SeverityClass::Catastrophic);
        assert_eq!(
            classify_severity(2_000_000.0).class,
            SeverityClass::ExtinctionLevel
        );
    }

    #[test]
    fn report_is_internally_consistent() {
        let report = run(
            params(),
            GeoPoint::new(35.6762, 139.6503),
            SimulationOptions::default(),
            None,
        )
        .unwrap();

        // One radius model feeds every consumer.
        assert_eq!(report.hazard_zones.len(), 3);
        for zone in &report.hazard_zones {
            let expected = report.physics.radii.radius_km(zone.properties.zone);
            assert_eq!(zone.properties.radius_km, expected);
        }

        let max = report.physics.radii.light_km;
        assert!((report.affected_area_km2 - std::f64::consts::PI * max * max).abs() < 1e-6);

        // Tokyo sits at ground zero of a ~75 MT strike.
        assert!(!report.affected_cities.is_empty());
        assert!(!report.earthquake_effects.is_empty());
        assert!(report.population_exposure.total_population > 0);
    }
}

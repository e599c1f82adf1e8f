//! Population exposure aggregation over the hazard zones.
//!
//! Sources are tried in priority order through the `PopulationSource`
//! capability. The raster-grid source is a stub that reports no data, so
//! the city-table fallback carries every simulation today; a real raster
//! backend can slot in later without touching the aggregator, and its
//! absence or failure must never abort the run.

use serde::Serialize;

use crate::cities::City;
use crate::geo::{haversine_km, GeoPoint};
use crate::hazard::HazardZone;
use crate::physics::{DamageRadii, DamageTier};

/// Fatality and injury fractions per damage band used by the exposure
/// fallback. Deliberately a separate table from the per-city proximity
/// rates in `cities`: that table estimates headline casualties for a city
/// as a whole, this one splits an exposed population into fatalities,
/// injuries and survivors.
fn fallback_vulnerability(tier: DamageTier) -> (f64, f64) {
    match tier {
        DamageTier::Severe => (0.5, 0.3),
        DamageTier::Moderate => (0.1, 0.2),
        DamageTier::Light => (0.01, 0.05),
    }
}

/// Reference cities for the fallback estimate.
static EXPOSURE_CITIES: &[City] = &[
    City { name: "New York", country: "USA", lat: 40.7128, lng: -74.0060, population: 8_419_000 },
    City { name: "Los Angeles", country: "USA", lat: 34.0522, lng: -118.2437, population: 3_980_000 },
    City { name: "London", country: "UK", lat: 51.5074, lng: -0.1278, population: 9_540_000 },
    City { name: "Paris", country: "France", lat: 48.8566, lng: 2.3522, population: 2_161_000 },
    City { name: "Tokyo", country: "Japan", lat: 35.6762, lng: 139.6503, population: 14_094_000 },
    City { name: "Sydney", country: "Australia", lat: -33.8688, lng: 151.2093, population: 5_312_000 },
    City { name: "Mumbai", country: "India", lat: 19.0760, lng: 72.8777, population: 20_411_000 },
    City { name: "Beijing", country: "China", lat: 39.9042, lng: 116.4074, population: 21_893_000 },
    City { name: "São Paulo", country: "Brazil", lat: -23.5558, lng: -46.6396, population: 12_396_000 },
    City { name: "Mexico City", country: "Mexico", lat: 19.4326, lng: -99.1332, population: 21_805_000 },
];

#[derive(Debug, Clone, Serialize)]
pub struct CasualtyEstimate {
    pub zone: DamageTier,
    pub population: u64,
    pub fatalities: u64,
    pub injuries: u64,
    pub survivors: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExposureSummary {
    pub total_fatalities: u64,
    pub total_injuries: u64,
    pub total_survivors: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopulationExposure {
    /// Which source produced the estimate.
    pub source: &'static str,
    pub total_population: u64,
    pub casualties: Vec<CasualtyEstimate>,
    pub summary: ExposureSummary,
}

impl PopulationExposure {
    fn empty(source: &'static str) -> Self {
        Self {
            source,
            total_population: 0,
            casualties: Vec::new(),
            summary: ExposureSummary::default(),
        }
    }
}

/// A provider of population counts inside the hazard zones. Returning
/// `None` means "no data here", and the aggregator moves on to the next
/// source.
pub trait PopulationSource {
    fn name(&self) -> &'static str;
    fn assess(&self, impact: GeoPoint, zones: &[HazardZone]) -> Option<PopulationExposure>;
}

/// Raster population-grid source. Sampling gridded density data under each
/// polygon is not implemented; it always reports no data so the aggregator
/// falls back to the city table.
pub struct RasterPopulationSource;

impl PopulationSource for RasterPopulationSource {
    fn name(&self) -> &'static str {
        "raster"
    }

    fn assess(&self, _impact: GeoPoint, _zones: &[HazardZone]) -> Option<PopulationExposure> {
        None
    }
}

fn split_casualties(population: u64, zone: DamageTier) -> CasualtyEstimate {
    let (fatality_rate, injury_rate) = fallback_vulnerability(zone);
    let fatalities = (population as f64 * fatality_rate).round() as u64;
    let injuries = (population as f64 * injury_rate).round() as u64;
    CasualtyEstimate {
        zone,
        population,
        fatalities,
        injuries,
        survivors: population.saturating_sub(fatalities + injuries),
    }
}

/// City-table fallback: classify each reference city into a band, discount
/// its population by how deep into the band it sits, then split with the
/// fallback vulnerability rates.
pub struct CityTableSource;

impl CityTableSource {
    fn affected_population(city: &City, distance_km: f64, radii: &DamageRadii) -> Option<(DamageTier, u64)> {
        if distance_km <= radii.severe_km {
            return Some((DamageTier::Severe, city.population));
        }
        if distance_km <= radii.moderate_km {
            // Population thins out linearly across the band, up to 80%.
            let band_width = radii.moderate_km - radii.severe_km;
            let depth = distance_km - radii.severe_km;
            let reduction = (depth / band_width * 0.6).min(0.8);
            let affected = (city.population as f64 * (1.0 - reduction)).round() as u64;
            return Some((DamageTier::Moderate, affected));
        }
        if distance_km <= radii.light_km {
            let band_width = radii.light_km - radii.moderate_km;
            let depth = distance_km - radii.moderate_km;
            let reduction = (0.5 + depth / band_width * 0.4).min(0.9);
            let affected = (city.population as f64 * (1.0 - reduction)).round() as u64;
            return Some((DamageTier::Light, affected));
        }
        None
    }
}

impl PopulationSource for CityTableSource {
    fn name(&self) -> &'static str {
        "city-table"
    }

    fn assess(&self, impact: GeoPoint, zones: &[HazardZone]) -> Option<PopulationExposure> {
        let radii = radii_from_zones(zones);
        let mut exposure = PopulationExposure::empty(self.name());

        for city in EXPOSURE_CITIES {
            let distance_km = haversine_km(impact, city.location());
            let Some((zone, affected)) = Self::affected_population(city, distance_km, &radii)
            else {
                continue;
            };
            if affected == 0 {
                continue;
            }
            let estimate = split_casualties(affected, zone);
            exposure.total_population += estimate.population;
            exposure.summary.total_fatalities += estimate.fatalities;
            exposure.summary.total_injuries += estimate.injuries;
            exposure.summary.total_survivors += estimate.survivors;
            exposure.casualties.push(estimate);
        }

        Some(exposure)
    }
}

/// Recover the three radii from the zone features' metadata.
fn radii_from_zones(zones: &[HazardZone]) -> DamageRadii {
    let radius_of = |tier: DamageTier| {
        zones
            .iter()
            .find(|z| z.properties.zone == tier)
            .map(|z| z.properties.radius_km)
            .unwrap_or(0.0)
    };
    DamageRadii {
        severe_km: radius_of(DamageTier::Severe),
        moderate_km: radius_of(DamageTier::Moderate),
        light_km: radius_of(DamageTier::Light),
    }
}

/// Aggregate exposure across the hazard zones, trying sources in priority
/// order. The city table always answers, so the result is never `None` in
/// practice; an empty zone list yields an empty exposure.
pub fn calculate_population_exposure(impact: GeoPoint, zones: &[HazardZone]) -> PopulationExposure {
    let sources: [&dyn PopulationSource; 2] = [&RasterPopulationSource, &CityTableSource];
    sources
        .iter()
        .find_map(|source| source.assess(impact, zones))
        .unwrap_or_else(|| PopulationExposure::empty("none"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::generate_hazard_polygons;

    fn zones_at(impact: GeoPoint, severe: f64, moderate: f64, light: f64) -> Vec<HazardZone> {
        let radii = DamageRadii {
            severe_km: severe,
            moderate_km: moderate,
            light_km: light,
        };
        generate_hazard_polygons(impact, &radii, 64)
    }

    #[test]
    fn raster_source_reports_no_data() {
        let impact = GeoPoint::new(0.0, 0.0);
        assert!(RasterPopulationSource
            .assess(impact, &zones_at(impact, 5.0, 10.0, 20.0))
            .is_none());
    }

    #[test]
    fn aggregator_falls_back_to_city_table() {
        let tokyo = GeoPoint::new(35.6762, 139.6503);
        let exposure =
            calculate_population_exposure(tokyo, &zones_at(tokyo, 5.0, 10.0, 20.0));
        assert_eq!(exposure.source, "city-table");
        assert_eq!(exposure.total_population, 14_094_000);

        // Severe zone rates: 50% fatalities, 30% injuries.
        let severe = &exposure.casualties[0];
        assert_eq!(severe.zone, DamageTier::Severe);
        assert_eq!(severe.fatalities, 7_047_000);
        assert_eq!(severe.injuries, 4_228_200);
        assert_eq!(severe.survivors, 14_094_000 - 7_047_000 - 4_228_200);
    }

    #[test]
    fn ocean_impact_far_from_cities_exposes_nobody() {
        let nowhere = GeoPoint::new(-48.87, -123.39);
        let exposure =
            calculate_population_exposure(nowhere, &zones_at(nowhere, 5.0, 10.0, 20.0));
        assert_eq!(exposure.total_population, 0);
        assert_eq!(exposure.summary, ExposureSummary::default());
    }

    /// Impact a fixed distance west of Tokyo.
    fn shifted_impact(km_west: f64) -> GeoPoint {
        crate::geo::destination(GeoPoint::new(35.6762, 139.6503), 270.0, km_west)
    }

    #[test]
    fn moderate_band_population_thins_with_depth() {
        // Place Tokyo just inside the moderate band and then deep in it.
        let near_edge = shifted_impact(20.0);
        let deep = shifted_impact(95.0);
        let shallow_exposure =
            calculate_population_exposure(near_edge, &zones_at(near_edge, 10.0, 100.0, 200.0));
        let deep_exposure =
            calculate_population_exposure(deep, &zones_at(deep, 10.0, 100.0, 200.0));

        let pop = |e: &PopulationExposure| {
            e.casualties
                .iter()
                .filter(|c| c.zone == DamageTier::Moderate)
                .map(|c| c.population)
                .sum::<u64>()
        };
        assert!(pop(&shallow_exposure) > pop(&deep_exposure));
        assert!(pop(&deep_exposure) > 0);
    }
}

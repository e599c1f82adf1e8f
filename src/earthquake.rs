//! Impact-triggered earthquake shaking per city, with distance attenuation
//! and a casualty roll-up.
//!
//! This model answers "how hard does each city shake" and keeps its own
//! magnitude-banded casualty tables; the single source magnitude of the
//! impact itself lives in `physics::secondary`.

use serde::Serialize;

use crate::cities::City;
use crate::geo::{haversine_km, GeoPoint};

/// Default search radius around the epicenter, km.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 2000.0;

/// Shaking below this magnitude is dropped from the results entirely.
const MIN_REPORTED_MAGNITUDE: f64 = 1.5;

/// Population centers evaluated for induced shaking.
static SEISMIC_CITIES: &[City] = &[
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
    City { name: "Cairo", country: "Egypt", lat: 30.0444, lng: 31.2357, population: 20_901_000 },
    City { name: "Moscow", country: "Russia", lat: 55.7558, lng: 37.6176, population: 12_593_000 },
    City { name: "Istanbul", country: "Turkey", lat: 41.0082, lng: 28.9784, population: 15_636_000 },
    City { name: "Lagos", country: "Nigeria", lat: 6.5244, lng: 3.3792, population: 15_388_000 },
    City { name: "Buenos Aires", country: "Argentina", lat: -34.6118, lng: -58.3960, population: 15_000_000 },
    City { name: "Manila", country: "Philippines", lat: 14.5995, lng: 120.9842, population: 13_923_000 },
    City { name: "Jakarta", country: "Indonesia", lat: -6.2088, lng: 106.8456, population: 10_770_000 },
    City { name: "Bangkok", country: "Thailand", lat: 13.7563, lng: 100.5018, population: 10_539_000 },
    City { name: "Seoul", country: "South Korea", lat: 37.5665, lng: 126.9780, population: 9_733_000 },
    City { name: "Lima", country: "Peru", lat: -12.0464, lng: -77.0428, population: 10_719_000 },
];

/// Structural damage expected from the local shaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShakingDamage {
    None,
    Light,
    Moderate,
    Severe,
    Catastrophic,
}

#[derive(Debug, Clone, Serialize)]
pub struct EarthquakeEffect {
    pub city: &'static City,
    pub distance_km: f64,
    pub magnitude: f64,
    pub intensity: &'static str,
    pub damage: ShakingDamage,
}

/// Base magnitude at the source from the released energy, before
/// attenuation. Stepped rather than continuous so tiny energy differences
/// do not wobble the headline magnitude.
fn base_magnitude(energy_megatons: f64) -> f64 {
    match energy_megatons {
        e if e >= 100_000.0 => 9.0,
        e if e >= 10_000.0 => 8.5,
        e if e >= 1_000.0 => 8.0,
        e if e >= 100.0 => 7.5,
        e if e >= 10.0 => 7.0,
        e if e >= 1.0 => 6.5,
        e if e >= 0.1 => 6.0,
        e if e >= 0.01 => 5.5,
        _ => 5.0,
    }
}

/// Attenuation factor over distance: full strength within 100 km, then a
/// sub-linear falloff with a 0.1 floor.
fn attenuation(distance_km: f64) -> f64 {
    if distance_km <= 100.0 {
        1.0
    } else {
        (1.0 - (distance_km / 2000.0).powf(0.8)).max(0.1)
    }
}

fn magnitude_at(energy_megatons: f64, distance_km: f64) -> f64 {
    base_magnitude(energy_megatons) * attenuation(distance_km)
}

fn classify(magnitude: f64) -> (ShakingDamage, &'static str) {
    if magnitude >= 8.0 {
        (ShakingDamage::Catastrophic, "Great earthquake - massive destruction")
    } else if magnitude >= 7.0 {
        (ShakingDamage::Severe, "Major earthquake - serious damage")
    } else if magnitude >= 6.0 {
        (ShakingDamage::Moderate, "Strong earthquake - considerable damage")
    } else if magnitude >= 5.0 {
        (ShakingDamage::Moderate, "Moderate earthquake - noticeable damage")
    } else if magnitude >= 3.0 {
        (ShakingDamage::Light, "Light earthquake - minor damage")
    } else if magnitude >= 2.0 {
        (ShakingDamage::Light, "Weak earthquake - felt by people")
    } else {
        (ShakingDamage::None, "Detectable - no significant effects")
    }
}

/// Shaking for every catalogued city within `max_distance_km` of the
/// epicenter, closest first. Cities whose attenuated magnitude falls below
/// the reporting threshold are skipped.
pub fn calculate_earthquake_effects(
    epicenter: GeoPoint,
    energy_megatons: f64,
    max_distance_km: f64,
) -> Vec<EarthquakeEffect> {
    let mut effects: Vec<EarthquakeEffect> = Vec::new();

    for city in SEISMIC_CITIES {
        let distance_km = haversine_km(epicenter, city.location());
        if distance_km > max_distance_km {
            continue;
        }
        let magnitude = magnitude_at(energy_megatons, distance_km);
        if magnitude < MIN_REPORTED_MAGNITUDE {
            continue;
        }
        let (damage, intensity) = classify(magnitude);
        effects.push(EarthquakeEffect {
            city,
            distance_km,
            magnitude,
            intensity,
            damage,
        });
    }

    effects.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    effects
}

/// Fraction of a city's population meaningfully affected at a given
/// shaking magnitude.
fn affected_population_fraction(magnitude: f64) -> f64 {
    match magnitude {
        m if m >= 8.0 => 0.95,
        m if m >= 7.0 => 0.80,
        m if m >= 6.0 => 0.60,
        m if m >= 5.0 => 0.35,
        m if m >= 4.0 => 0.15,
        m if m >= 3.0 => 0.05,
        _ => 0.01,
    }
}

/// Far cities see a reduced affected share even at equal magnitude; linear
/// past 500 km with a 0.1 floor.
fn distance_discount(distance_km: f64) -> f64 {
    if distance_km <= 500.0 {
        1.0
    } else {
        (1.0 - (distance_km - 500.0) / 2000.0).max(0.1)
    }
}

/// Fatality and injury fractions of the affected population, per damage
/// class.
fn shaking_vulnerability(damage: ShakingDamage) -> (f64, f64) {
    match damage {
        ShakingDamage::Catastrophic => (0.12, 0.25),
        ShakingDamage::Severe => (0.08, 0.20),
        ShakingDamage::Moderate => (0.02, 0.08),
        ShakingDamage::Light => (0.005, 0.02),
        ShakingDamage::None => (0.0001, 0.001),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EarthquakeSummary {
    pub total_affected_population: u64,
    pub total_fatalities: u64,
    pub total_injuries: u64,
    pub cities_catastrophic: usize,
    pub cities_severe: usize,
    pub cities_moderate: usize,
    pub cities_light: usize,
    pub cities_none: usize,
}

/// Roll the per-city effects up into regional casualty totals. An empty
/// effects list yields the all-zero summary.
pub fn summarize(effects: &[EarthquakeEffect]) -> EarthquakeSummary {
    let mut summary = EarthquakeSummary::default();

    for effect in effects {
        let fraction = affected_population_fraction(effect.magnitude)
            * distance_discount(effect.distance_km);
        let affected = effect.city.population as f64 * fraction;
        let (fatality_rate, injury_rate) = shaking_vulnerability(effect.damage);

        summary.total_affected_population += affected.round() as u64;
        summary.total_fatalities += (affected * fatality_rate).round() as u64;
        summary.total_injuries += (affected * injury_rate).round() as u64;

        match effect.damage {
            ShakingDamage::Catastrophic => summary.cities_catastrophic += 1,
            ShakingDamage::Severe => summary.cities_severe += 1,
            ShakingDamage::Moderate => summary.cities_moderate += 1,
            ShakingDamage::Light => summary.cities_light += 1,
            ShakingDamage::None => summary.cities_none += 1,
        }
    }

    summary
}

//! Static world-city reference table and the damage-band exposure resolver.
//!
//! The table is built once at compile time and never mutated; every
//! simulation reclassifies it from scratch against the run's damage radii.

use serde::Serialize;

use crate::geo::{haversine_km, GeoPoint};
use crate::physics::{DamageRadii, DamageTier};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub population: u64,
}

impl City {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

const fn city(
    name: &'static str,
    country: &'static str,
    lat: f64,
    lng: f64,
    population: u64,
) -> City {
    City {
        name,
        country,
        lat,
        lng,
        population,
    }
}

/// Major world cities, grouped by region.
pub static WORLD_CITIES: &[City] = &[
    // North America
    city("New York", "USA", 40.7128, -74.0060, 8_336_817),
    city("Los Angeles", "USA", 34.0522, -118.2437, 3_979_576),
    city("Chicago", "USA", 41.8781, -87.6298, 2_693_976),
    city("Houston", "USA", 29.7604, -95.3698, 2_320_268),
    city("Philadelphia", "USA", 39.9526, -75.1652, 1_584_064),
    city("Phoenix", "USA", 33.4484, -112.0740, 1_608_139),
    city("San Antonio", "USA", 29.4241, -98.4936, 1_547_253),
    city("San Diego", "USA", 32.7157, -117.1611, 1_423_851),
    city("Dallas", "USA", 32.7767, -96.7970, 1_343_573),
    city("San Jose", "USA", 37.3382, -121.8863, 1_021_795),
    city("Toronto", "Canada", 43.6532, -79.3832, 2_731_571),
    city("Montreal", "Canada", 45.5017, -73.5673, 1_704_694),
    city("Vancouver", "Canada", 49.2827, -123.1207, 631_486),
    city("Mexico City", "Mexico", 19.4326, -99.1332, 9_209_944),
    // South America
    city("São Paulo", "Brazil", -23.5505, -46.6333, 12_325_232),
    city("Rio de Janeiro", "Brazil", -22.9068, -43.1729, 6_748_000),
    city("Buenos Aires", "Argentina", -34.6118, -58.3960, 2_890_151),
    city("Lima", "Peru", -12.0464, -77.0428, 9_751_717),
    city("Bogotá", "Colombia", 4.7110, -74.0721, 7_412_566),
    city("Santiago", "Chile", -33.4489, -70.6693, 5_614_000),
    // Europe
    city("London", "UK", 51.5074, -0.1278, 9_304_016),
    city("Paris", "France", 48.8566, 2.3522, 2_161_000),
    city("Berlin", "Germany", 52.5200, 13.4050, 3_669_491),
    city("Madrid", "Spain", 40.4168, -3.7038, 3_223_334),
    city("Rome", "Italy", 41.9028, 12.4964, 2_873_494),
    city("Amsterdam", "Netherlands", 52.3676, 4.9041, 821_752),
    city("Barcelona", "Spain", 41.3851, 2.1734, 1_620_343),
    city("Vienna", "Austria", 48.2082, 16.3738, 1_897_491),
    city("Stockholm", "Sweden", 59.3293, 18.0686, 975_551),
    city("Oslo", "Norway", 59.9139, 10.7522, 697_549),
    city("Copenhagen", "Denmark", 55.6761, 12.5683, 644_431),
    city("Warsaw", "Poland", 52.2297, 21.0122, 1_790_658),
    city("Prague", "Czech Republic", 50.0755, 14.4378, 1_318_982),
    city("Budapest", "Hungary", 47.4979, 19.0402, 1_752_286),
    city("Moscow", "Russia", 55.7558, 37.6176, 12_615_279),
    city("St. Petersburg", "Russia", 59.9311, 30.3609, 5_398_064),
    // Asia
    city("Tokyo", "Japan", 35.6762, 139.6503, 37_435_191),
    city("Delhi", "India", 28.7041, 77.1025, 32_941_308),
    city("Shanghai", "China", 31.2304, 121.4737, 28_516_904),
    city("Dhaka", "Bangladesh", 23.8103, 90.4125, 22_478_116),
    city("São Paulo Metro", "Brazil", -23.5505, -46.6333, 22_429_800),
    city("Cairo", "Egypt", 30.0444, 31.2357, 21_750_020),
    city("Mexico City Metro", "Mexico", 19.4326, -99.1332, 21_804_515),
    city("Beijing", "China", 39.9042, 116.4074, 21_766_214),
    city("Mumbai", "India", 19.0760, 72.8777, 20_667_656),
    city("Osaka", "Japan", 34.6937, 135.5023, 18_967_459),
    city("Karachi", "Pakistan", 24.8607, 67.0011, 16_459_472),
    city("Chongqing", "China", 29.4316, 106.9123, 16_382_376),
    city("Istanbul", "Turkey", 41.0082, 28.9784, 15_636_243),
    city("Buenos Aires Metro", "Argentina", -34.6118, -58.3960, 15_624_000),
    city("Kolkata", "India", 22.5726, 88.3639, 14_974_073),
    city("Manila", "Philippines", 14.5995, 120.9842, 14_808_137),
    city("Lagos", "Nigeria", 6.5244, 3.3792, 14_368_332),
    city("Rio de Janeiro Metro", "Brazil", -22.9068, -43.1729, 13_634_274),
    city("Tianjin", "China", 39.3434, 117.3616, 13_589_078),
    city("Kinshasa", "DR Congo", -4.4419, 15.2663, 12_691_000),
    city("Guangzhou", "China", 23.1291, 113.2644, 12_458_130),
    city("Lahore", "Pakistan", 31.5204, 74.3587, 12_642_423),
    city("Bangalore", "India", 12.9716, 77.5946, 12_326_532),
    city("Shenzhen", "China", 22.5431, 114.0579, 12_084_391),
    city("Seoul", "South Korea", 37.5665, 126.9780, 9_776_000),
    city("Jakarta", "Indonesia", -6.2088, 106.8456, 10_562_088),
    city("Chennai", "India", 13.0827, 80.2707, 10_971_108),
    city("Lima Metro", "Peru", -12.0464, -77.0428, 10_719_188),
    city("Bogotá Metro", "Colombia", 4.7110, -74.0721, 10_779_000),
    city("Ho Chi Minh City", "Vietnam", 10.8231, 106.6297, 9_077_158),
    city("Hyderabad", "India", 17.3850, 78.4867, 10_004_144),
    city("Wuhan", "China", 30.5928, 114.3055, 8_364_977),
    city("Kuala Lumpur", "Malaysia", 3.1390, 101.6869, 1_808_259),
    city("Singapore", "Singapore", 1.3521, 103.8198, 5_453_566),
    city("Bangkok", "Thailand", 13.7563, 100.5018, 10_539_415),
    city("Taipei", "Taiwan", 25.0330, 121.5654, 2_704_810),
    city("Hong Kong", "China", 22.3193, 114.1694, 7_428_887),
    // Middle East
    city("Tehran", "Iran", 35.6892, 51.3890, 8_693_706),
    city("Dubai", "UAE", 25.2048, 55.2708, 3_331_420),
    city("Riyadh", "Saudi Arabia", 24.7136, 46.6753, 7_009_639),
    city("Baghdad", "Iraq", 33.3152, 44.3661, 7_216_000),
    // Africa
    city("Johannesburg", "South Africa", -26.2041, 28.0473, 4_803_262),
    city("Cape Town", "South Africa", -33.9249, 18.4241, 4_617_560),
    city("Alexandria", "Egypt", 31.2001, 29.9187, 5_200_000),
    city("Casablanca", "Morocco", 33.5731, -7.5898, 3_359_818),
    city("Addis Ababa", "Ethiopia", 9.1450, 38.7451, 3_352_000),
    city("Nairobi", "Kenya", -1.2921, 36.8219, 4_922_000),
    // Oceania
    city("Sydney", "Australia", -33.8688, 151.2093, 5_312_163),
    city("Melbourne", "Australia", -37.8136, 144.9631, 5_061_439),
    city("Brisbane", "Australia", -27.4698, 153.0251, 2_568_927),
    city("Perth", "Australia", -31.9505, 115.8605, 2_192_229),
    city("Auckland", "New Zealand", -36.8485, 174.7633, 1_657_200),
];

/// Casualty and survival fractions per damage band for cities resolved by
/// proximity. Distinct from the population-exposure fallback table in
/// `exposure`, which models the same bands with different rates.
fn proximity_vulnerability(tier: DamageTier) -> (f64, f64) {
    match tier {
        DamageTier::Severe => (0.8, 0.2),
        DamageTier::Moderate => (0.3, 0.7),
        DamageTier::Light => (0.05, 0.95),
    }
}

/// A city caught inside one of the damage bands.
#[derive(Debug, Clone, Serialize)]
pub struct AffectedCity {
    pub city: &'static City,
    pub distance_km: f64,
    pub damage_tier: DamageTier,
    pub estimated_casualties: u64,
    pub survival_rate: f64,
}

/// Resolve every catalogued city against the damage radii.
///
/// Each city lands in at most one band (most destructive first); cities
/// outside the light radius are omitted. Results are ordered by band, then
/// by ascending distance within the band.
pub fn find_affected_cities(impact: GeoPoint, radii: &DamageRadii) -> Vec<AffectedCity> {
    let mut affected: Vec<AffectedCity> = Vec::new();

    for city in WORLD_CITIES {
        let distance_km = haversine_km(impact, city.location());
        let tier = DamageTier::PRIORITY
            .into_iter()
            .find(|&t| distance_km <= radii.radius_km(t));
        let Some(tier) = tier else { continue };

        let (casualty_rate, survival_rate) = proximity_vulnerability(tier);
        affected.push(AffectedCity {
            city,
            distance_km,
            damage_tier: tier,
            estimated_casualties: (city.population as f64 * casualty_rate).round() as u64,
            survival_rate,
        });
    }

    affected.sort_by(|a, b| {
        a.damage_tier
            .cmp(&b.damage_tier)
            .then(a.distance_km.total_cmp(&b.distance_km))
    });
    affected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radii_affect_nobody() {
        let impact = GeoPoint::new(0.0, 0.0);
        assert!(find_affected_cities(impact, &DamageRadii::zero()).is_empty());
    }

    #[test]
    fn city_at_ground_zero_is_severe() {
        let tokyo = WORLD_CITIES.iter().find(|c| c.name == "Tokyo").unwrap();
        let radii = DamageRadii {
            severe_km: 1.0,
            moderate_km: 5.0,
            light_km: 10.0,
        };
        let affected = find_affected_cities(tokyo.location(), &radii);
        let hit = affected.iter().find(|a| a.city.name == "Tokyo").unwrap();
        assert_eq!(hit.damage_tier, DamageTier::Severe);
        assert!(hit.distance_km < 1e-6);
        assert_eq!(
            hit.estimated_casualties,
            (tokyo.population as f64 * 0.8).round() as u64
        );
        assert!((hit.survival_rate - 0.2).abs() < 1e-12);
    }

    #[test]
    fn each_city_appears_once_in_its_most_severe_band() {
        let impact = GeoPoint::new(48.8566, 2.3522); // Paris
        let radii = DamageRadii {
            severe_km: 400.0,
            moderate_km: 800.0,
            light_km: 1600.0,
        };
        let affected = find_affected_cities(impact, &radii);

        for a in &affected {
            let same: Vec<_> = affected
                .iter()
                .filter(|b| std::ptr::eq(a.city, b.city))
                .collect();
            assert_eq!(same.len(), 1, "{} classified twice", a.city.name);

            // Distance consistent with the assigned band.
            assert!(a.distance_km <= radii.radius_km(a.damage_tier));
            match a.damage_tier {
                DamageTier::Severe => {}
                DamageTier::Moderate => assert!(a.distance_km > radii.severe_km),
                DamageTier::Light => assert!(a.distance_km > radii.moderate_km),
            }
        }
    }

    #[test]
    fn output_sorted_by_band_then_distance() {
        let impact = GeoPoint::new(48.8566, 2.3522);
        let radii = DamageRadii {
            severe_km: 400.0,
            moderate_km: 1000.0,
            light_km: 2500.0,
        };
        let affected = find_affected_cities(impact, &radii);
        assert!(!affected.is_empty());
        for pair in affected.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.damage_tier <= b.damage_tier);
            if a.damage_tier == b.damage_tier {
                assert!(a.distance_km <= b.distance_km);
            }
        }
    }
}

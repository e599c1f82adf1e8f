//! GeoJSON hazard-zone polygons around the impact point.
//!
//! Each damage band becomes a geodesic circle rendered as a GeoJSON
//! `Feature` with styling metadata. Output order is largest zone first so a
//! renderer drawing in sequence leaves the severe zone on top.

use serde::Serialize;

use crate::geo::{self, GeoPoint};
use crate::physics::{DamageRadii, DamageTier};

/// Segments used to approximate each circle.
pub const DEFAULT_POLYGON_STEPS: usize = 64;

#[derive(Debug, Clone, Serialize)]
pub struct ZoneProperties {
    pub zone: DamageTier,
    pub radius_km: f64,
    pub description: &'static str,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

/// GeoJSON `Polygon` geometry. Coordinates are `[lng, lat]` pairs, one
/// closed ring.
#[derive(Debug, Clone, Serialize)]
pub struct PolygonGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// One damage band as a GeoJSON `Feature`.
#[derive(Debug, Clone, Serialize)]
pub struct HazardZone {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: ZoneProperties,
    pub geometry: PolygonGeometry,
}

fn zone_style(tier: DamageTier) -> (&'static str, &'static str, &'static str, f64) {
    match tier {
        DamageTier::Light => (
            "Evacuation Zone - Light damage, broken windows, evacuation recommended",
            "#f59e0b",
            "#fef3c7",
            0.2,
        ),
        DamageTier::Moderate => (
            "Major Damage Zone - Severe structural damage, widespread casualties",
            "#ea580c",
            "#fed7aa",
            0.3,
        ),
        DamageTier::Severe => (
            "Severe Destruction Zone - Complete devastation, unsurvivable conditions",
            "#dc2626",
            "#fecaca",
            0.4,
        ),
    }
}

/// Closed ring of a geodesic circle around `center`, `[lng, lat]` pairs.
fn circle_ring(center: GeoPoint, radius_km: f64, steps: usize) -> Vec<[f64; 2]> {
    let mut ring = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        let bearing = 360.0 * i as f64 / steps as f64;
        let p = geo::destination(center, bearing, radius_km);
        ring.push([p.lng, p.lat]);
    }
    // GeoJSON rings close on themselves.
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    ring
}

/// Build one zone feature.
pub fn hazard_zone(center: GeoPoint, tier: DamageTier, radius_km: f64, steps: usize) -> HazardZone {
    let (description, color, fill_color, fill_opacity) = zone_style(tier);
    HazardZone {
        kind: "Feature",
        properties: ZoneProperties {
            zone: tier,
            radius_km,
            description,
            color,
            fill_color,
            fill_opacity,
        },
        geometry: PolygonGeometry {
            kind: "Polygon",
            coordinates: vec![circle_ring(center, radius_km, steps)],
        },
    }
}

/// Features for every band with a positive radius, ordered light →
/// moderate → severe (outermost drawn first, severe rendered last and on
/// top).
pub fn generate_hazard_polygons(
    center: GeoPoint,
    radii: &DamageRadii,
    steps: usize,
) -> Vec<HazardZone> {
    [DamageTier::Light, DamageTier::Moderate, DamageTier::Severe]
        .into_iter()
        .filter_map(|tier| {
            let radius_km = radii.radius_km(tier);
            (radius_km > 0.0).then(|| hazard_zone(center, tier, radius_km, steps))
        })
        .collect()
}

/// Ray-casting point-in-polygon test against the zone's outer ring.
pub fn is_point_in_hazard_zone(point: GeoPoint, zone: &HazardZone) -> bool {
    let Some(ring) = zone.geometry.coordinates.first() else {
        return false;
    };
    let (px, py) = (point.lng, point.lat);
    let mut inside = false;
    let n = ring.len();
    if n < 4 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (ring[i][0], ring[i][1]);
        let (xj, yj) = (ring[j][0], ring[j][1]);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Most severe zone containing the point, if any. Checks severe before
/// moderate before light regardless of the slice's storage order.
pub fn point_hazard_level<'a>(point: GeoPoint, zones: &'a [HazardZone]) -> Option<&'a HazardZone> {
    DamageTier::PRIORITY.into_iter().find_map(|tier| {
        zones
            .iter()
            .find(|z| z.properties.zone == tier)
            .filter(|z| is_point_in_hazard_zone(point, z))
    })
}

/// Area enclosed by the zone's outer ring, km², via the spherical polygon
/// area formula.
pub fn zone_area_km2(zone: &HazardZone) -> f64 {
    let Some(ring) = zone.geometry.coordinates.first() else {
        return 0.0;
    };
    if ring.len() < 4 {
        return 0.0;
    }
    let mut total = 0.0;
    for pair in ring.windows(2) {
        let (lng1, lat1) = (pair[0][0].to_radians(), pair[0][1].to_radians());
        let (lng2, lat2) = (pair[1][0].to_radians(), pair[1][1].to_radians());
        total += (lng2 - lng1) * (2.0 + lat1.sin() + lat2.sin());
    }
    (total * geo::EARTH_RADIUS_KM * geo::EARTH_RADIUS_KM / 2.0).abs()
}

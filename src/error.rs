use thiserror::Error;

/// Boundary validation failures raised before the numeric pipeline runs.
///
/// The pure calculation functions never validate their inputs; out-of-range
/// values degrade silently to zero/NaN there. Callers (CLI, scenario loader,
/// web handlers) are expected to reject bad parameters up front with one of
/// these.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("asteroid diameter must be positive, got {0} m")]
    NonPositiveDiameter(f64),

    #[error("impact velocity must be positive, got {0} km/s")]
    NonPositiveVelocity(f64),

    #[error("asteroid density must be positive, got {0} kg/m³")]
    NonPositiveDensity(f64),

    #[error("impact angle must be in (0, 90] degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),
}

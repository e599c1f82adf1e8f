pub mod catalog;
pub mod cities;
pub mod earthquake;
pub mod enrich;
pub mod error;
pub mod exposure;
pub mod geo;
pub mod hazard;
pub mod physics;
pub mod scenario;
pub mod simulation;
pub mod web;

pub use error::ValidationError;
pub use geo::GeoPoint;
pub use physics::{DamageRadii, ImpactResult};
pub use scenario::{Scenario, ScenarioLoader};
pub use simulation::{ImpactParameters, ImpactReport, SimulationOptions};

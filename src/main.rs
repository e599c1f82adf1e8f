use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use impactsim::scenario::ScenarioLoader;
use impactsim::simulation;
use impactsim::web::{self, WebServerConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Asteroid impact consequence simulator")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/tunguska.yaml")]
    scenario: PathBuf,

    /// Write the full report as pretty JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Serve the JSON API instead of running a scenario
    #[arg(long)]
    serve: bool,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(web::run(WebServerConfig {
            host: cli.host,
            port: cli.port,
        }));
    }

    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;

    let report = simulation::run(
        scenario.impact_parameters(),
        scenario.impact_location(),
        scenario.simulation_options(),
        None,
    )?;

    println!(
        "Scenario '{}': {:.0} m impactor at {:.1} km/s into {}",
        scenario.name,
        report.parameters.diameter_m,
        report.parameters.velocity_kms,
        scenario.site_label(),
    );
    println!(
        "  energy: {:.2} MT ({:?})",
        report.physics.energy_megatons, report.severity.class
    );
    println!(
        "  crater: {:.2} km across, {:.2} km deep",
        report.physics.crater_diameter_m / 1000.0,
        report.physics.crater_depth_m / 1000.0
    );
    println!(
        "  damage radii: severe {:.1} km / moderate {:.1} km / light {:.1} km",
        report.physics.radii.severe_km,
        report.physics.radii.moderate_km,
        report.physics.radii.light_km
    );
    println!(
        "  cities in damage zones: {}, exposure fatalities: {}",
        report.affected_cities.len(),
        report.population_exposure.summary.total_fatalities
    );
    if let Some(strongest) = report.earthquake_effects.first() {
        println!(
            "  strongest shaking: M{:.1} in {} ({:.0} km away)",
            strongest.magnitude, strongest.city.name, strongest.distance_km
        );
    }

    if let Some(path) = cli.report {
        let payload = serde_json::json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "scenario": scenario.name,
            "report": report,
        });
        let json = serde_json::to_string_pretty(&payload)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("  report written to {}", path.display());
    }

    Ok(())
}

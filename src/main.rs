use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kestrel_map::{Map2D, MapDocument};
use kestrel_planner::{AStarPlanner, PlanOutcome, PlannerConfig};

/// Planner tunables come from `config/kestrel.toml` when present, overridable
/// through `KESTREL_*` environment variables, with library defaults otherwise.
fn load_settings() -> Result<PlannerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/kestrel").required(false))
        .add_source(config::Environment::with_prefix("KESTREL").try_parsing(true))
        .build()
        .context("failed to build configuration")?;
    settings
        .try_deserialize()
        .context("failed to deserialize planner configuration")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let map_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "maps/demo.toml".to_string());

    let settings = load_settings()?;
    info!(
        resolution = settings.grid_resolution,
        max_iterations = settings.max_iterations,
        heuristic_weight = settings.heuristic_weight,
        "planner configured"
    );

    let doc = MapDocument::load(&map_path)
        .with_context(|| format!("failed to load map file {}", map_path))?;
    let start = doc.start_point();
    let goal = doc.goal_point();
    let map = Map2D::from_document(&doc).context("failed to build workspace from map")?;

    let planner = AStarPlanner::new(&map, settings).context("failed to construct planner")?;
    info!(%start, %goal, "planning");

    match planner.plan(start, goal) {
        PlanOutcome::Found(report) => {
            println!(
                "Path found: {:.2} m, {} waypoints, {} expansions, {:.3} s",
                report.path.length(),
                report.path.points().len(),
                report.expansions,
                report.elapsed.as_secs_f64()
            );
            for (i, point) in report.path.points().iter().enumerate() {
                println!("  {:3}: {}", i, point);
            }
            Ok(())
        }
        PlanOutcome::NoPath(reason) => bail!("no path: {reason}"),
    }
}

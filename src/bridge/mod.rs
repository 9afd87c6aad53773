pub mod builder;
pub mod decoder;
pub mod normalizer;
pub mod runner;

pub use builder::ScenarioBuilder;
pub use decoder::{decode, DecodedScenarioParams};
pub use normalizer::{calculate_velocities, normalize, EGO_ACTOR};
pub use runner::run_batch;

use crate::error::{Result, SimbridgeError};
use crate::sim::{RoadGenerator, SimulationParams, SimulatorAdapter};
use crate::types::{Genome, Scenario, SimulationOutput};
use log::info;
use rayon::prelude::*;

/// Run a whole population through the simulator and return one normalized
/// output per genome, in input order.
///
/// Scenario construction (decode + build) is independent per genome and runs
/// in parallel; a failure there aborts the call with the offending genome's
/// index attached. Callers that want to salvage the rest of a population
/// instead build scenarios individually via [`decode`] and
/// [`ScenarioBuilder`] and batch the survivors themselves. A simulation
/// failure always aborts the whole batch.
pub fn simulate_population(
    individuals: &[Genome],
    variable_names: &[String],
    road_generator: &dyn RoadGenerator,
    adapter: &mut dyn SimulatorAdapter,
    params: &SimulationParams,
) -> Result<Vec<SimulationOutput>> {
    let starting_pos = adapter.initial_pos().ok_or(SimbridgeError::NotConnected)?;
    let builder = ScenarioBuilder::new(road_generator);

    let scenarios: Vec<Scenario> = individuals
        .par_iter()
        .enumerate()
        .map(|(genome_index, genome)| {
            decode(genome, variable_names)
                .and_then(|decoded| builder.build(&decoded, &starting_pos))
                .map_err(|cause| SimbridgeError::ScenarioConstruction {
                    genome_index,
                    cause: Box::new(cause),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Built {} scenarios from population, submitting batch",
        scenarios.len()
    );
    let outcomes = run_batch(&scenarios, adapter, params)?;

    Ok(outcomes.iter().map(normalize).collect())
}

use crate::types::{ScenarioOutcome, SimulationOutput, Vec3};
use std::collections::HashMap;

/// Actor name under which all ego traces are keyed.
pub const EGO_ACTOR: &str = "ego";

/// Actor id assigned to the ego vehicle in the actors map.
pub const EGO_ACTOR_ID: u32 = 1;

/// Convert a raw simulator outcome into the fixed evaluation schema.
///
/// Positions collapse to planar `(x, y)` locations under the single `"ego"`
/// actor; speeds and cross-track error pass through unchanged; collisions,
/// acceleration and yaw are emitted as empty placeholders reserved for
/// future producers. Simulated time is the frame count as a float.
pub fn normalize(outcome: &ScenarioOutcome) -> SimulationOutput {
    let velocities = calculate_velocities(&outcome.pos, &outcome.speeds);
    let locations: Vec<(f64, f64)> = outcome.pos.iter().map(|p| (p.x, p.y)).collect();

    SimulationOutput {
        sim_time: outcome.frames.len() as f64,
        times: outcome.frames.clone(),
        location: HashMap::from([(EGO_ACTOR.to_string(), locations)]),
        velocity: HashMap::from([(EGO_ACTOR.to_string(), velocities)]),
        speed: HashMap::from([(EGO_ACTOR.to_string(), outcome.speeds.clone())]),
        acceleration: HashMap::from([(EGO_ACTOR.to_string(), Vec::new())]),
        yaw: HashMap::from([(EGO_ACTOR.to_string(), Vec::new())]),
        collisions: Vec::new(),
        actors: HashMap::from([(EGO_ACTOR_ID, EGO_ACTOR.to_string())]),
        other_params: HashMap::from([("xte".to_string(), outcome.xte.clone())]),
    }
}

/// Reconstruct velocity vectors from discrete position/speed samples.
///
/// Mismatched lengths or fewer than two speed samples is a defined
/// degenerate case and yields an empty sequence. Otherwise each consecutive
/// position pair contributes one vector: the normalized displacement scaled
/// by the speed sampled at the earlier frame, so the result is one shorter
/// than the position trace.
pub fn calculate_velocities(positions: &[Vec3], speeds: &[f64]) -> Vec<Vec3> {
    if positions.len() != speeds.len() || speeds.len() <= 1 {
        return Vec::new();
    }

    let mut velocities = Vec::with_capacity(positions.len() - 1);
    for i in 0..positions.len() - 1 {
        let displacement = positions[i + 1] - positions[i];
        let norm = nudge_norm(displacement.norm());
        let direction = displacement / norm;
        velocities.push(direction * speeds[i]);
    }
    velocities
}

/// Offset a displacement norm to avoid the division singularity.
///
/// A positive norm grows by 0.001; a zero norm becomes -0.001. The
/// asymmetry (and the resulting negative denominator for zero
/// displacement) is load-bearing: downstream consumers were calibrated
/// against it, so it must not be replaced with a symmetric epsilon.
fn nudge_norm(norm: f64) -> f64 {
    if norm > 0.0 {
        norm + 0.001
    } else {
        norm - 0.001
    }
}

use crate::types::{Pose, Scenario, ScenarioOutcome};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Attention-map perturbation configuration forwarded to the simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttentionMap {
    pub map: String,
    pub threshold: f64,
    pub layer: String,
}

impl Default for AttentionMap {
    fn default() -> Self {
        Self {
            map: String::new(),
            threshold: 0.5,
            layer: "conv2d_5".to_string(),
        }
    }
}

/// Auxiliary parameters for a batch-simulate call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    pub attention_map: Option<AttentionMap>,
    pub log_dir: Option<PathBuf>,
    pub overwrite_logs: bool,
    /// Camera frames are resized to (height, width) before perturbation.
    pub image_size: (u32, u32),
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            attention_map: None,
            log_dir: None,
            overwrite_logs: false,
            image_size: (240, 320),
        }
    }
}

/// Simulator adapter collaborator.
///
/// Connection lifecycle (spawning the simulator process, opening the session)
/// belongs to the caller; this layer only requires that a session is already
/// established when a batch is submitted. The single connection must not be
/// shared by more than one in-flight batch.
pub trait SimulatorAdapter: Send {
    /// Establish the simulator session. Owned by the caller: the batch
    /// runner never calls this, it only requires that `initial_pos` is
    /// available by the time a batch arrives.
    fn connect(&mut self) -> Result<()>;

    /// Starting pose of the ego vehicle. `Some` once a session is
    /// established.
    fn initial_pos(&self) -> Option<Pose>;

    /// Execute every scenario and return one outcome per scenario, in input
    /// order regardless of internal completion order. A hung simulator call
    /// blocks the batch; timeouts, if any, must surface as an `Err` here.
    fn simulate_batch(
        &mut self,
        scenarios: &[Scenario],
        params: &SimulationParams,
    ) -> Result<Vec<ScenarioOutcome>>;
}

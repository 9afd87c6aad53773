use crate::types::Pose;
use anyhow::Result;

/// Road-geometry generator collaborator.
///
/// Turns a starting pose plus per-segment turn angles (and optional segment
/// lengths) into the simulator's serialized waypoint string. Implementations
/// must be deterministic for identical inputs: the search algorithm relies on
/// reproducibility when re-evaluating individuals.
pub trait RoadGenerator: Send + Sync {
    fn generate(
        &self,
        starting_pos: &Pose,
        angles: &[i32],
        seg_lengths: Option<&[i32]>,
    ) -> Result<String>;
}

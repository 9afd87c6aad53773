pub mod adapter;
pub mod road;

pub use adapter::{AttentionMap, SimulationParams, SimulatorAdapter};
pub use road::RoadGenerator;

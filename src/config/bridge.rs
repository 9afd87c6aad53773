use super::traits::ConfigSection;
use crate::error::SimbridgeError;
use crate::sim::{AttentionMap, SimulationParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simulator-facing settings: where the simulator listens, how frames are
/// sized, and how scenario logs are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub host: String,
    pub port: u16,
    /// Side length of the square map handed to the road generator.
    pub map_size: u32,
    /// Camera frames are resized to (height, width).
    pub image_size: (u32, u32),
    /// Wall-clock budget per scenario, seconds.
    pub simulation_time: f64,
    /// Trace sampling interval, seconds.
    pub sampling_time: f64,
    pub log_dir: Option<PathBuf>,
    pub overwrite_logs: bool,
    pub attention_map: Option<AttentionMap>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9091,
            map_size: 250,
            image_size: (240, 320),
            simulation_time: 30.0,
            sampling_time: 0.25,
            log_dir: None,
            overwrite_logs: false,
            attention_map: None,
        }
    }
}

impl BridgeConfig {
    /// Auxiliary parameters for the adapter's batch-simulate call.
    pub fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            attention_map: self.attention_map.clone(),
            log_dir: self.log_dir.clone(),
            overwrite_logs: self.overwrite_logs,
            image_size: self.image_size,
        }
    }
}

impl ConfigSection for BridgeConfig {
    fn section_name() -> &'static str {
        "bridge"
    }

    fn validate(&self) -> Result<(), SimbridgeError> {
        if self.map_size == 0 {
            return Err(SimbridgeError::Configuration(
                "Map size must be positive".to_string(),
            ));
        }
        if self.image_size.0 == 0 || self.image_size.1 == 0 {
            return Err(SimbridgeError::Configuration(
                "Image size must be positive in both dimensions".to_string(),
            ));
        }
        if self.simulation_time <= 0.0 {
            return Err(SimbridgeError::Configuration(
                "Simulation time must be positive".to_string(),
            ));
        }
        if self.sampling_time <= 0.0 || self.sampling_time > self.simulation_time {
            return Err(SimbridgeError::Configuration(
                "Sampling time must be positive and no larger than simulation time".to_string(),
            ));
        }
        if let Some(attention) = &self.attention_map {
            if !(0.0..=1.0).contains(&attention.threshold) {
                return Err(SimbridgeError::Configuration(
                    "Attention threshold must be between 0 and 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimbridgeError {
    #[error("Genome has {genome_len} values but {names_len} variable names were supplied")]
    GenomeShape { genome_len: usize, names_len: usize },

    #[error("Malformed gene at position {position} ({name}): {value} is not a finite number")]
    MalformedGene {
        position: usize,
        name: String,
        value: f64,
    },

    #[error("Scenario construction failed for genome {genome_index}: {cause}")]
    ScenarioConstruction {
        genome_index: usize,
        cause: Box<SimbridgeError>,
    },

    #[error("Road generation failed: {cause}")]
    RoadGeneration { cause: anyhow::Error },

    #[error("Simulator not connected: initial position unavailable")]
    NotConnected,

    #[error("Simulation failed for batch of {batch_size} scenarios: {cause}")]
    Simulation {
        batch_size: usize,
        cause: anyhow::Error,
    },

    #[error("Simulator returned {actual} outcomes for {expected} submitted scenarios")]
    OutcomeCount { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimbridgeError>;

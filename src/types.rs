use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::{Div, Mul, Sub};

/// Genome representation for scenario search
///
/// A genome is a fixed-length sequence of real values produced by the search
/// algorithm each generation. Each value is associated *by position* with a
/// parameter name from a parallel name sequence supplied alongside it
/// (`angle<k>`, `seg_length<k>`, `perturbation_scale`,
/// `perturbation_function`).
///
/// # Why a flat vector instead of a structured scenario?
///
/// Genetic operators work best on simple, linear structures:
/// - **Crossover**: swapping genome segments is trivial (array slicing)
/// - **Mutation**: perturbing individual values is straightforward
/// - **No invalid states**: any genome decodes to a usable scenario
///
/// # Conversion
///
/// Use `bridge::decoder::decode()` to turn a genome plus its name sequence
/// into `DecodedScenarioParams`. Note the ordering precondition documented
/// there: all `angle`/`seg_length` names must precede the
/// `perturbation_scale`/`perturbation_function` names.
pub type Genome = Vec<f64>;

/// Starting pose of the ego vehicle: planar position plus heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

/// 3-D vector, serialized as a plain `[x, y, z]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// One simulator-executable driving scenario: serialized road geometry plus
/// an image-perturbation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub waypoints: String,
    pub perturbation_function: String,
    pub perturbation_scale: i32,
}

/// Raw per-scenario simulator report. Equal lengths of `frames`, `pos` and
/// `speeds` are the expected contract, but the normalizer tolerates
/// violations (see `bridge::normalizer`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub frames: Vec<u32>,
    pub pos: Vec<Vec3>,
    pub speeds: Vec<f64>,
    pub xte: Vec<f64>,
}

/// Normalized evaluation schema consumed by the fitness/criticality
/// evaluators. Field names and nesting are a fixed wire contract, pinned
/// here with serde renames.
///
/// Per-actor maps are keyed by actor name; this translation layer emits a
/// single `"ego"` actor. Velocity traces are one element shorter than the
/// corresponding location traces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    #[serde(rename = "simTime")]
    pub sim_time: f64,
    pub times: Vec<u32>,
    pub location: HashMap<String, Vec<(f64, f64)>>,
    pub velocity: HashMap<String, Vec<Vec3>>,
    pub speed: HashMap<String, Vec<f64>>,
    pub acceleration: HashMap<String, Vec<f64>>,
    pub yaw: HashMap<String, Vec<f64>>,
    pub collisions: Vec<serde_json::Value>,
    pub actors: HashMap<u32, String>,
    #[serde(rename = "otherParams")]
    pub other_params: HashMap<String, Vec<f64>>,
}

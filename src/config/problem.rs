use super::traits::ConfigSection;
use crate::error::SimbridgeError;
use crate::perturbation::PerturbationRegistry;
use log::warn;
use serde::{Deserialize, Serialize};

/// Search-problem interface data supplied to the external search algorithm:
/// variable names plus per-variable lower/upper bounds.
///
/// Validation makes the decoder's ordering precondition explicit: every
/// `angle`/`seg_length` name must come before the first
/// `perturbation_scale`/`perturbation_function` name, because the decoder
/// stops scanning at the first of those terminal entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub problem_name: String,
    pub variable_names: Vec<String>,
    /// Per-variable lower bounds.
    pub xl: Vec<f64>,
    /// Per-variable upper bounds.
    pub xu: Vec<f64>,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        // Eight road angles, a perturbation scale and a function selector.
        let variable_names = (1..=8)
            .map(|i| format!("angle{i}"))
            .chain([
                "perturbation_scale".to_string(),
                "perturbation_function".to_string(),
            ])
            .collect();
        Self {
            problem_name: "RoadGenerationProblem".to_string(),
            variable_names,
            xl: vec![-10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, 0.0, 1.0],
            xu: vec![10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 4.0, 6.0],
        }
    }
}

fn is_terminal(name: &str) -> bool {
    name.starts_with("perturbation_scale") || name.starts_with("perturbation_function")
}

fn is_road_param(name: &str) -> bool {
    name.starts_with("angle") || name.starts_with("seg_length")
}

impl ConfigSection for ProblemConfig {
    fn section_name() -> &'static str {
        "problem"
    }

    fn validate(&self) -> Result<(), SimbridgeError> {
        if self.variable_names.len() != self.xl.len() || self.xl.len() != self.xu.len() {
            return Err(SimbridgeError::Configuration(format!(
                "Variable names ({}), lower bounds ({}) and upper bounds ({}) must have equal length",
                self.variable_names.len(),
                self.xl.len(),
                self.xu.len()
            )));
        }

        for (i, (lo, hi)) in self.xl.iter().zip(&self.xu).enumerate() {
            if lo > hi {
                return Err(SimbridgeError::Configuration(format!(
                    "Lower bound {lo} exceeds upper bound {hi} for variable '{}'",
                    self.variable_names[i]
                )));
            }
        }

        let mut terminal_seen = false;
        for name in &self.variable_names {
            if is_terminal(name) {
                terminal_seen = true;
            } else if is_road_param(name) {
                if terminal_seen {
                    return Err(SimbridgeError::Configuration(format!(
                        "Variable '{name}' appears after a perturbation entry and would be \
                         dropped by the decoder"
                    )));
                }
            } else {
                return Err(SimbridgeError::Configuration(format!(
                    "Unrecognized variable name '{name}'"
                )));
            }
        }

        // An out-of-range selector bound is recoverable at decode time (the
        // registry falls back to its default), so it only warrants a warning.
        let registry = PerturbationRegistry::new();
        for (i, name) in self.variable_names.iter().enumerate() {
            if name.starts_with("perturbation_function")
                && (self.xl[i] < 1.0 || self.xu[i] > registry.len() as f64)
            {
                warn!(
                    "Bounds [{}, {}] for '{}' extend beyond the {} registered perturbation \
                     functions; out-of-range selectors will fall back to the default",
                    self.xl[i],
                    self.xu[i],
                    name,
                    registry.len()
                );
            }
        }

        Ok(())
    }
}

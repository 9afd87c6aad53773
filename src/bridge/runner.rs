use crate::error::{Result, SimbridgeError};
use crate::sim::{SimulationParams, SimulatorAdapter};
use crate::types::{Scenario, ScenarioOutcome};
use log::debug;

/// Submit a scenario batch to a connected simulator adapter.
///
/// The batch is handed to the adapter as a whole unit; `outcome[i]`
/// corresponds to `scenario[i]`. No retry and no partial-completion
/// recovery: an adapter failure aborts the batch, and an outcome count that
/// differs from the submitted count is reported rather than silently
/// truncated.
pub fn run_batch(
    scenarios: &[Scenario],
    adapter: &mut dyn SimulatorAdapter,
    params: &SimulationParams,
) -> Result<Vec<ScenarioOutcome>> {
    if adapter.initial_pos().is_none() {
        return Err(SimbridgeError::NotConnected);
    }

    debug!("Submitting batch of {} scenarios", scenarios.len());
    let outcomes = adapter
        .simulate_batch(scenarios, params)
        .map_err(|cause| SimbridgeError::Simulation {
            batch_size: scenarios.len(),
            cause,
        })?;

    if outcomes.len() != scenarios.len() {
        return Err(SimbridgeError::OutcomeCount {
            expected: scenarios.len(),
            actual: outcomes.len(),
        });
    }

    debug!("Batch of {} scenarios completed", outcomes.len());
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pose;
    use anyhow::anyhow;

    struct StubAdapter {
        connected: bool,
        outcomes_per_scenario: usize,
        fail: bool,
    }

    impl SimulatorAdapter for StubAdapter {
        fn connect(&mut self) -> anyhow::Result<()> {
            self.connected = true;
            Ok(())
        }

        fn initial_pos(&self) -> Option<Pose> {
            self.connected.then_some(Pose {
                x: 0.0,
                y: 0.0,
                heading: 0.0,
            })
        }

        fn simulate_batch(
            &mut self,
            scenarios: &[Scenario],
            _params: &SimulationParams,
        ) -> anyhow::Result<Vec<ScenarioOutcome>> {
            if self.fail {
                return Err(anyhow!("socket closed at scenario 1"));
            }
            Ok(vec![
                ScenarioOutcome::default();
                scenarios.len() * self.outcomes_per_scenario
            ])
        }
    }

    fn scenarios(n: usize) -> Vec<Scenario> {
        (0..n)
            .map(|i| Scenario {
                waypoints: format!("road-{i}"),
                perturbation_function: "gaussian_noise".to_string(),
                perturbation_scale: 0,
            })
            .collect()
    }

    #[test]
    fn test_requires_connected_adapter() {
        let mut adapter = StubAdapter {
            connected: false,
            outcomes_per_scenario: 1,
            fail: false,
        };
        let err = run_batch(&scenarios(2), &mut adapter, &SimulationParams::default()).unwrap_err();
        assert!(matches!(err, SimbridgeError::NotConnected));
    }

    #[test]
    fn test_adapter_failure_names_batch_size() {
        let mut adapter = StubAdapter {
            connected: true,
            outcomes_per_scenario: 1,
            fail: true,
        };
        let err = run_batch(&scenarios(3), &mut adapter, &SimulationParams::default()).unwrap_err();
        match err {
            SimbridgeError::Simulation { batch_size, cause } => {
                assert_eq!(batch_size, 3);
                assert!(cause.to_string().contains("scenario 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_outcome_count_mismatch_detected() {
        let mut adapter = StubAdapter {
            connected: true,
            outcomes_per_scenario: 2,
            fail: false,
        };
        let err = run_batch(&scenarios(2), &mut adapter, &SimulationParams::default()).unwrap_err();
        match err {
            SimbridgeError::OutcomeCount { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

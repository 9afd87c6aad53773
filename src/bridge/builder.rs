use crate::bridge::decoder::DecodedScenarioParams;
use crate::error::{Result, SimbridgeError};
use crate::perturbation::PerturbationRegistry;
use crate::sim::RoadGenerator;
use crate::types::{Pose, Scenario};

/// Builds executable scenarios from decoded genome parameters.
///
/// Waypoint construction is delegated to the road generator; the
/// perturbation-function selector is resolved through the registry with its
/// default fallback. Stateless aside from the generator call.
pub struct ScenarioBuilder<'a> {
    road_generator: &'a dyn RoadGenerator,
    registry: PerturbationRegistry,
}

impl<'a> ScenarioBuilder<'a> {
    pub fn new(road_generator: &'a dyn RoadGenerator) -> Self {
        Self {
            road_generator,
            registry: PerturbationRegistry::new(),
        }
    }

    pub fn build(&self, decoded: &DecodedScenarioParams, starting_pos: &Pose) -> Result<Scenario> {
        let waypoints = self
            .road_generator
            .generate(
                starting_pos,
                &decoded.angles,
                decoded.seg_lengths.as_deref(),
            )
            .map_err(|cause| SimbridgeError::RoadGeneration { cause })?;

        let perturbation_function = self.registry.resolve(decoded.perturbation_function);

        Ok(Scenario {
            waypoints,
            perturbation_function: perturbation_function.to_string(),
            perturbation_scale: decoded.perturbation_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FormatGenerator;

    impl RoadGenerator for FormatGenerator {
        fn generate(
            &self,
            starting_pos: &Pose,
            angles: &[i32],
            seg_lengths: Option<&[i32]>,
        ) -> anyhow::Result<String> {
            Ok(format!(
                "({},{},{}):{:?}:{:?}",
                starting_pos.x, starting_pos.y, starting_pos.heading, angles, seg_lengths
            ))
        }
    }

    struct FailingGenerator;

    impl RoadGenerator for FailingGenerator {
        fn generate(
            &self,
            _starting_pos: &Pose,
            _angles: &[i32],
            _seg_lengths: Option<&[i32]>,
        ) -> anyhow::Result<String> {
            Err(anyhow!("curve fit diverged"))
        }
    }

    fn decoded(selector: i32) -> DecodedScenarioParams {
        DecodedScenarioParams {
            angles: vec![10, -5],
            seg_lengths: Some(vec![20, 20]),
            perturbation_scale: 3,
            perturbation_function: selector,
        }
    }

    #[test]
    fn test_build_combines_waypoints_and_perturbation() {
        let generator = FormatGenerator;
        let builder = ScenarioBuilder::new(&generator);
        let pose = Pose {
            x: 1.0,
            y: 2.0,
            heading: 90.0,
        };

        let scenario = builder.build(&decoded(5), &pose).unwrap();
        assert_eq!(scenario.waypoints, "(1,2,90):[10, -5]:Some([20, 20])");
        assert_eq!(scenario.perturbation_function, "glass_blur");
        assert_eq!(scenario.perturbation_scale, 3);
    }

    #[test]
    fn test_build_falls_back_on_invalid_selector() {
        let generator = FormatGenerator;
        let builder = ScenarioBuilder::new(&generator);
        let pose = Pose {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
        };

        let scenario = builder.build(&decoded(42), &pose).unwrap();
        assert_eq!(scenario.perturbation_function, "gaussian_noise");
    }

    #[test]
    fn test_generator_failure_propagates() {
        let generator = FailingGenerator;
        let builder = ScenarioBuilder::new(&generator);
        let pose = Pose {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
        };

        let err = builder.build(&decoded(1), &pose).unwrap_err();
        assert!(err.to_string().contains("curve fit diverged"));
    }
}

pub mod bridge;
pub mod manager;
pub mod problem;
pub mod traits;

pub use bridge::BridgeConfig;
pub use manager::{AppConfig, ConfigManager};
pub use problem::ProblemConfig;
pub use traits::ConfigSection;

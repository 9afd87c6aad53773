pub mod registry;

pub use registry::PerturbationRegistry;

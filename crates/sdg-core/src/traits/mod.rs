pub mod advisor;

pub use advisor::IAllocationAdvisor;

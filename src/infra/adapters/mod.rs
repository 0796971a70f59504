pub mod simulated_executor;

pub use simulated_executor::SimulatedExecutor;

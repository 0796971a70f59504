pub mod execution;
pub mod renderer;

pub use execution::{ExecutionBackend, ExecutionError};
pub use renderer::{RenderOutput, Renderer};

mod editor;
mod execution;
mod navigation;
mod workspace;

pub use editor::reduce_editor;
pub use execution::reduce_execution;
pub use navigation::{leave_workspace, reduce_navigation};
pub use workspace::reduce_workspace;
pub(crate) use workspace::toggle_fullscreen;

//! Drag session bookkeeping.
//!
//! While a divider is being dragged, pointer motion anywhere in the terminal
//! belongs to the session, not only motion over the one-cell divider. The
//! `PointerCapture` records which process-wide listeners are attached so the
//! event handler knows to route drag/up events to the session.

use super::split::{Axis, SplitRatio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerListener {
    Move,
    Release,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerCapture {
    listeners: Vec<PointerListener>,
}

impl PointerCapture {
    /// Attaching an already attached listener is a no-op.
    pub fn attach(&mut self, listener: PointerListener) {
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
    }

    pub fn detach_all(&mut self) {
        self.listeners.clear();
    }

    pub fn has(&self, listener: PointerListener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_captured(&self) -> bool {
        !self.listeners.is_empty()
    }
}

/// Visual hint for the divider under drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    ColumnResize,
    RowResize,
}

impl CursorHint {
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::ColumnResize,
            Axis::Vertical => Self::RowResize,
        }
    }
}

/// Alive only between pointer-down and pointer-up on a divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub axis: Axis,
    pub start_pos: i32,
    pub start_ratio: SplitRatio,
}

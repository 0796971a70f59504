//! Resizable three-pane workspace: description | editor / testcases.

use super::drag::{CursorHint, DragSession, PointerCapture, PointerListener};
use super::split::{
    Axis, DEFAULT_HORIZONTAL_SPLIT, DEFAULT_VERTICAL_SPLIT, SplitRatio, ratio_after_drag,
};

/// Which pane, if any, overlays the whole workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenPane {
    #[default]
    None,
    /// Description pane
    Left,
    /// Editor and testcases together
    Right,
    /// Testcase panel
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    horizontal_split: SplitRatio,
    vertical_split: SplitRatio,
    fullscreen: FullscreenPane,
    drag: Option<DragSession>,
    capture: PointerCapture,
    cursor: CursorHint,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new(
            SplitRatio::new(DEFAULT_HORIZONTAL_SPLIT),
            SplitRatio::new(DEFAULT_VERTICAL_SPLIT),
        )
    }
}

impl WorkspaceState {
    pub fn new(horizontal_split: SplitRatio, vertical_split: SplitRatio) -> Self {
        Self {
            horizontal_split,
            vertical_split,
            fullscreen: FullscreenPane::None,
            drag: None,
            capture: PointerCapture::default(),
            cursor: CursorHint::Default,
        }
    }

    pub fn horizontal_split(&self) -> SplitRatio {
        self.horizontal_split
    }

    pub fn vertical_split(&self) -> SplitRatio {
        self.vertical_split
    }

    pub fn ratio(&self, axis: Axis) -> SplitRatio {
        match axis {
            Axis::Horizontal => self.horizontal_split,
            Axis::Vertical => self.vertical_split,
        }
    }

    fn set_ratio(&mut self, axis: Axis, ratio: SplitRatio) {
        match axis {
            Axis::Horizontal => self.horizontal_split = ratio,
            Axis::Vertical => self.vertical_split = ratio,
        }
    }

    pub fn fullscreen(&self) -> FullscreenPane {
        self.fullscreen
    }

    pub fn is_fullscreen(&self, pane: FullscreenPane) -> bool {
        pane != FullscreenPane::None && self.fullscreen == pane
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn drag_axis(&self) -> Option<Axis> {
        self.drag.map(|d| d.axis)
    }

    pub fn capture(&self) -> &PointerCapture {
        &self.capture
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.cursor
    }

    /// Horizontal divider touches Left and Right; vertical touches Right's
    /// editor and Bottom.
    pub fn divider_visible(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => !matches!(
                self.fullscreen,
                FullscreenPane::Left | FullscreenPane::Right
            ),
            Axis::Vertical => !matches!(
                self.fullscreen,
                FullscreenPane::Right | FullscreenPane::Bottom
            ),
        }
    }

    /// Starts (or restarts) a drag on `axis`. Returns false when the divider
    /// is hidden and no session was started.
    pub fn begin_drag(&mut self, axis: Axis, pos: i32) -> bool {
        if !self.divider_visible(axis) {
            return false;
        }
        self.drag = Some(DragSession {
            axis,
            start_pos: pos,
            start_ratio: self.ratio(axis),
        });
        self.capture.attach(PointerListener::Move);
        self.capture.attach(PointerListener::Release);
        self.cursor = CursorHint::for_axis(axis);
        true
    }

    /// `extent` is the live container length along the session axis.
    /// Returns false when no session is active.
    pub fn drag_move(&mut self, pos: i32, extent: u16) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        let ratio = ratio_after_drag(session.start_ratio, session.start_pos, pos, extent);
        self.set_ratio(session.axis, ratio);
        true
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
        self.capture.detach_all();
        self.cursor = CursorHint::Default;
    }

    /// Teardown path: releases any capture left by an unfinished drag.
    pub fn dispose(&mut self) {
        self.end_drag();
    }

    pub fn toggle_fullscreen(&mut self, pane: FullscreenPane) {
        if pane == FullscreenPane::None {
            return;
        }
        self.fullscreen = if self.fullscreen == pane {
            FullscreenPane::None
        } else {
            pane
        };
        if let Some(axis) = self.drag_axis()
            && !self.divider_visible(axis)
        {
            self.end_drag();
        }
    }

    pub fn resize_step(&mut self, axis: Axis, delta: f64) -> bool {
        if !self.divider_visible(axis) {
            return false;
        }
        let ratio = self.ratio(axis).step(delta);
        self.set_ratio(axis, ratio);
        true
    }
}

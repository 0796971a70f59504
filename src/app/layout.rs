//! Pure pane geometry: split ratios and fullscreen state in, rectangles out.

use ratatui::layout::Rect;

use super::execution::ExecutionKind;
use super::split::Axis;
use super::workspace::{FullscreenPane, WorkspaceState};

/// Header(1) + Controls(1) + Footer(1)
pub const LAYOUT_FIXED_ROWS: u16 = 3;

/// Problem navigator column on the right edge
pub const NAVIGATOR_WIDTH: u16 = 6;

/// Divider thickness in cells
const DIVIDER: u16 = 1;

/// Width of each run/submit button in the controls bar
pub const CONTROL_BUTTON_WIDTH: u16 = 15;

/// Clickable "← Back" label at the left of the header
pub const BACK_LABEL_WIDTH: u16 = 8;

const CHIP_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkspaceGeometry {
    /// Container of the left/right split
    pub workspace: Rect,
    pub description: Option<Rect>,
    /// Container of the editor/testcase split
    pub right_column: Option<Rect>,
    pub editor: Option<Rect>,
    pub test_cases: Option<Rect>,
    pub horizontal_divider: Option<Rect>,
    pub vertical_divider: Option<Rect>,
    pub navigator: Option<Rect>,
    pub header: Rect,
    pub controls: Rect,
    pub footer: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Divider(Axis),
    Description,
    Editor,
    TestCases,
    /// Row index into the navigator list
    Navigator(usize),
    Outside,
}

fn share(total: u16, percent: f64) -> u16 {
    let cells = (f64::from(total) * percent / 100.0).round();
    (cells.max(0.0) as u16).min(total)
}

fn contains(rect: Option<Rect>, x: u16, y: u16) -> bool {
    rect.is_some_and(|r| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
}

/// Splits `column` into editor / optional divider / testcases.
fn split_right_column(
    column: Rect,
    ws: &WorkspaceState,
    with_divider: bool,
) -> (Rect, Option<Rect>, Rect) {
    let divider = if with_divider { DIVIDER } else { 0 };
    let available = column.height.saturating_sub(divider);
    let editor_height = share(available, ws.vertical_split().get());
    let editor = Rect::new(column.x, column.y, column.width, editor_height);
    let divider_rect = with_divider
        .then(|| Rect::new(column.x, column.y + editor_height, column.width, DIVIDER))
        .filter(|_| column.height > 0);
    let tests_y = column.y + editor_height + divider.min(column.height);
    let tests = Rect::new(
        column.x,
        tests_y.min(column.bottom()),
        column.width,
        column.bottom().saturating_sub(tests_y),
    );
    (editor, divider_rect, tests)
}

/// `main` is the area between header and controls bar.
pub fn compute_workspace_layout(main: Rect, ws: &WorkspaceState) -> WorkspaceGeometry {
    match ws.fullscreen() {
        FullscreenPane::Left => WorkspaceGeometry {
            workspace: main,
            description: Some(main),
            ..Default::default()
        },
        FullscreenPane::Bottom => WorkspaceGeometry {
            workspace: main,
            test_cases: Some(main),
            ..Default::default()
        },
        FullscreenPane::Right => {
            let (editor, _, tests) = split_right_column(main, ws, false);
            WorkspaceGeometry {
                workspace: main,
                right_column: Some(main),
                editor: Some(editor),
                test_cases: Some(tests),
                ..Default::default()
            }
        }
        FullscreenPane::None => {
            let nav_width = NAVIGATOR_WIDTH.min(main.width);
            let workspace = Rect::new(main.x, main.y, main.width - nav_width, main.height);
            let navigator = Rect::new(workspace.right(), main.y, nav_width, main.height);

            let available = workspace.width.saturating_sub(DIVIDER);
            let left_width = share(available, ws.horizontal_split().get());
            let right_width = available - left_width;

            let description = Rect::new(workspace.x, workspace.y, left_width, workspace.height);
            let divider = Rect::new(
                workspace.x + left_width,
                workspace.y,
                DIVIDER.min(workspace.width),
                workspace.height,
            );
            let right_column = Rect::new(
                divider.right(),
                workspace.y,
                right_width,
                workspace.height,
            );
            let (editor, vertical_divider, tests) = split_right_column(right_column, ws, true);

            WorkspaceGeometry {
                workspace,
                description: Some(description),
                right_column: Some(right_column),
                editor: Some(editor),
                test_cases: Some(tests),
                horizontal_divider: Some(divider),
                vertical_divider,
                navigator: Some(navigator),
                ..Default::default()
            }
        }
    }
}

/// Whole-frame layout: header row, workspace, controls bar, footer row.
pub fn compute_frame_layout(area: Rect, ws: &WorkspaceState) -> WorkspaceGeometry {
    let fixed = LAYOUT_FIXED_ROWS.min(area.height);
    let main_height = area.height - fixed;
    let row = |offset: u16| {
        let y = (area.y + offset).min(area.bottom().saturating_sub(1));
        Rect::new(area.x, y, area.width, u16::from(area.height > offset))
    };

    let main = Rect::new(area.x, area.y + fixed.min(1), area.width, main_height);
    WorkspaceGeometry {
        header: row(0),
        controls: row(1 + main_height),
        footer: row(2 + main_height),
        ..compute_workspace_layout(main, ws)
    }
}

/// Interior of a bordered pane
pub fn pane_inner(pane: Rect) -> Rect {
    Rect::new(
        pane.x.saturating_add(1),
        pane.y.saturating_add(1),
        pane.width.saturating_sub(2),
        pane.height.saturating_sub(2),
    )
}

/// First interior row of a bordered pane, where tabs and chips sit
pub fn strip_row(pane: Rect) -> Rect {
    let inner = pane_inner(pane);
    Rect::new(inner.x, inner.y, inner.width, inner.height.min(1))
}

/// Lays labels of the given widths left to right with one cell of padding on
/// each side. Chips that would overflow the row are dropped.
pub fn chip_rects(row: Rect, label_widths: &[u16]) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(label_widths.len());
    let mut x = row.x;
    for width in label_widths {
        let chip_width = width + 2;
        if x + chip_width > row.right() {
            break;
        }
        rects.push(Rect::new(x, row.y, chip_width, row.height));
        x += chip_width + CHIP_GAP;
    }
    rects
}

/// Right-aligned run and submit buttons
pub fn control_button_rects(controls: Rect) -> [(ExecutionKind, Rect); 2] {
    let width = CONTROL_BUTTON_WIDTH.min(controls.width / 2);
    let submit_x = controls.right().saturating_sub(width + 1);
    let run_x = submit_x.saturating_sub(width + CHIP_GAP);
    [
        (
            ExecutionKind::Run,
            Rect::new(run_x, controls.y, width, controls.height),
        ),
        (
            ExecutionKind::Submit,
            Rect::new(submit_x, controls.y, width, controls.height),
        ),
    ]
}

/// Label drawn at the right end of a pane's top border; clicking it toggles
/// that pane's fullscreen.
pub fn fullscreen_badge(active: bool) -> &'static str {
    if active { " f restore " } else { " f maximize " }
}

pub fn title_badge_rect(pane: Rect, width: u16) -> Rect {
    let x = pane.right().saturating_sub(width + 1).max(pane.x);
    Rect::new(x, pane.y, width.min(pane.width), pane.height.min(1))
}

pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    contains(Some(rect), x, y)
}

impl WorkspaceGeometry {
    /// Live container length along `axis`, used to turn cell deltas into
    /// percentages.
    pub fn extent(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Horizontal => self.workspace.width,
            Axis::Vertical => self.right_column.map_or(0, |r| r.height),
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> HitRegion {
        if contains(self.horizontal_divider, x, y) {
            return HitRegion::Divider(Axis::Horizontal);
        }
        if contains(self.vertical_divider, x, y) {
            return HitRegion::Divider(Axis::Vertical);
        }
        if let Some(nav) = self.navigator
            && contains(Some(nav), x, y)
        {
            return HitRegion::Navigator(usize::from(y - nav.y));
        }
        if contains(self.description, x, y) {
            return HitRegion::Description;
        }
        if contains(self.editor, x, y) {
            return HitRegion::Editor;
        }
        if contains(self.test_cases, x, y) {
            return HitRegion::TestCases;
        }
        HitRegion::Outside
    }
}

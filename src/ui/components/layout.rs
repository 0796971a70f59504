use std::time::Instant;

use ratatui::Frame;

use super::controls::ControlsBar;
use super::description::DescriptionPane;
use super::divider::Divider;
use super::editor::EditorPane;
use super::footer::Footer;
use super::header::Header;
use super::help_overlay::HelpOverlay;
use super::navigator::Navigator;
use super::test_cases::TestCasePane;
use crate::app::input_mode::InputMode;
use crate::app::layout::compute_frame_layout;
use crate::app::ports::RenderOutput;
use crate::app::split::Axis;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState, now: Instant) -> RenderOutput {
        let geometry = compute_frame_layout(frame.area(), &state.workspace);

        Header::render(frame, geometry.header, state, now);

        if let Some(area) = geometry.description {
            DescriptionPane::render(frame, area, state);
        }
        if let Some(area) = geometry.editor {
            EditorPane::render(frame, area, state, now);
        }
        if let Some(area) = geometry.test_cases {
            TestCasePane::render(frame, area, state);
        }
        if let Some(area) = geometry.horizontal_divider {
            Divider::render(frame, area, Axis::Horizontal, state);
        }
        if let Some(area) = geometry.vertical_divider {
            Divider::render(frame, area, Axis::Vertical, state);
        }
        if let Some(area) = geometry.navigator {
            Navigator::render(frame, area, state);
        }

        ControlsBar::render(frame, geometry.controls, state, now);
        Footer::render(frame, geometry.footer, state);

        // Overlays (on top of everything else)
        if state.ui.input_mode == InputMode::Help {
            HelpOverlay::render(frame);
        }

        RenderOutput { geometry }
    }
}

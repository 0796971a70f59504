use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::atoms::label_chip;
use crate::app::layout::chip_rects;

/// Draws a row of chips at the same rectangles the event handler hit-tests.
pub fn render_chip_strip(frame: &mut Frame, row: Rect, labels: &[String], active: Option<usize>) {
    let widths: Vec<u16> = labels.iter().map(|l| l.width() as u16).collect();
    for (i, (rect, label)) in chip_rects(row, &widths).into_iter().zip(labels).enumerate() {
        let chip = label_chip(label, active == Some(i));
        frame.render_widget(Paragraph::new(chip), rect);
    }
}

/// Area under the chip strip, one blank row below it.
pub fn below_strip(inner: Rect) -> Rect {
    let offset = 2.min(inner.height);
    Rect::new(inner.x, inner.y + offset, inner.width, inner.height - offset)
}

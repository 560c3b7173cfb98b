//! Ratatui widget that draws a [`TabStrip`]: one evenly sized cell per tab,
//! title centred, subtitle (if any) in the bottom half.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::tabs::{cell_layout, TabStrip};

use super::layout::frame_to_rect;
use super::theme::Theme;

/// Created fresh each frame.  `area` passed to `render` is the strip's bounds.
pub struct TabStripWidget<'a> {
    strip: &'a TabStrip,
    selected: Option<usize>,
}

impl<'a> TabStripWidget<'a> {
    pub fn new(strip: &'a TabStrip) -> Self {
        Self {
            strip,
            selected: None,
        }
    }

    /// Highlight tab `index`.  Purely visual; the container owns selection.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }
}

/// Draw `text` centred horizontally on the middle row of `area`.
fn centered_label(text: &str, style: Style, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let row = Rect::new(area.x, area.y + (area.height - 1) / 2, area.width, 1);
    Line::from(Span::styled(text.to_string(), style))
        .alignment(Alignment::Center)
        .render(row, buf);
}

impl<'a> Widget for TabStripWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.strip.intrinsic_height() == 0.0 {
            return;
        }

        for (index, config) in self.strip.configurations().iter().enumerate() {
            let Some(tab) = self.strip.tab_frame(index) else {
                continue;
            };
            let cell = frame_to_rect(tab, area, area);
            if cell.is_empty() {
                continue;
            }

            let style = if self.selected == Some(index) {
                Theme::tab_selected_style()
            } else {
                Theme::tab_style()
            };
            buf.set_style(cell, style);

            let labels = cell_layout(tab, config.subtitle.is_some());
            let title_rect = frame_to_rect(labels.title, area, cell);
            centered_label(&config.title, style, title_rect, buf);

            if let (Some(sub_frame), Some(subtitle)) = (labels.subtitle, &config.subtitle) {
                let sub_rect = frame_to_rect(sub_frame, area, cell);
                centered_label(subtitle, style.patch(Theme::tab_subtitle_style()), sub_rect, buf);
            }
        }
    }
}

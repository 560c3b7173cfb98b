//! Text pages — the content panels the binary hosts.
//!
//! Each page is a bordered block of text.  It remembers the slot it was
//! attached at and how many rows its last layout gave it, so it can label
//! itself and mark text that does not fit.

use std::path::Path;

use anyhow::{Context, Result};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::geometry::Frame;
use crate::core::pages::PagePanel;
use crate::ui::pager::RenderPage;
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct TextPage {
    title: Option<String>,
    subtitle: Option<String>,
    lines: Vec<String>,
    /// Slot index reported by the container.
    index: Option<usize>,
    /// Height of the last laid-out frame, in rows.
    rows: usize,
}

impl TextPage {
    pub fn new(title: Option<String>, body: &str) -> Self {
        Self {
            title,
            subtitle: None,
            lines: body.lines().map(str::to_owned).collect(),
            index: None,
            rows: 0,
        }
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    /// A page holding the contents of `path`, titled by its file name.
    pub fn from_file(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("reading page {}", path.display()))?;
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Ok(Self::new(title, &body))
    }

    /// `"N lines"`, used as a subtitle.
    pub fn line_count_label(&self) -> String {
        match self.lines.len() {
            1 => "1 line".to_string(),
            n => format!("{n} lines"),
        }
    }

    /// Body rows that fit below the border, given the last layout.
    fn visible_body_rows(&self) -> usize {
        self.rows.saturating_sub(2)
    }

    /// Lines cut off by the last layout.
    pub fn hidden_lines(&self) -> usize {
        self.lines.len().saturating_sub(self.visible_body_rows())
    }
}

/// Pages shown when no files are given on the command line.
pub fn demo_pages() -> Vec<TextPage> {
    [
        ("A", "First page.\n\nClick a tab or press ←/→ to switch pages."),
        ("B", "Second page.\n\nThe tab strip divides its width evenly between tabs."),
        ("C", "Third page.\n\nPress f to fold the tab strip away and give pages the full height."),
    ]
    .into_iter()
    .map(|(title, body)| TextPage::new(Some(title.to_string()), body))
    .collect()
}

impl PagePanel for TextPage {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    fn did_move_to_parent(&mut self, index: usize) {
        self.index = Some(index);
    }

    fn did_layout(&mut self, frame: Frame) {
        self.rows = frame.height.max(0.0) as usize;
    }
}

impl RenderPage for TextPage {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_style())
            .title(format!(" {} ", self.title.as_deref().unwrap_or("untitled")))
            .title_style(Theme::title_style());

        let hidden = self.hidden_lines();
        if hidden > 0 {
            block = block.title_bottom(Line::from(format!(" +{hidden} more ")).right_aligned());
        }
        if let Some(index) = self.index {
            block = block.title_bottom(Line::from(format!(" #{} ", index + 1)).left_aligned());
        }

        let text: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), Theme::page_text_style())))
            .collect();

        Paragraph::new(text).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::container::PageContainer;

    #[test]
    fn container_feeds_index_and_height() {
        let mut container = PageContainer::new(vec![
            TextPage::new(Some("one".into()), "a\nb\nc\nd\ne"),
            TextPage::new(Some("two".into()), "x"),
        ]);
        container.layout(Frame::new(0.0, 0.0, 40.0, 55.0));

        let first = &container.page(0).unwrap().panel;
        assert_eq!(first.index, Some(0));
        assert_eq!(first.rows, 5);
        assert_eq!(first.hidden_lines(), 2);
        assert_eq!(container.page(1).unwrap().panel.hidden_lines(), 0);
    }

    #[test]
    fn line_count_label_pluralises() {
        assert_eq!(TextPage::new(None, "x").line_count_label(), "1 line");
        assert_eq!(TextPage::new(None, "x\ny").line_count_label(), "2 lines");
    }

    #[test]
    fn render_draws_border_and_title() {
        let mut page = TextPage::new(Some("notes".into()), "hello");
        page.did_move_to_parent(0);
        page.did_layout(Frame::new(0.0, 0.0, 12.0, 3.0));

        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        RenderPage::render(&page, area, &mut buf);

        let top: String = (0..12).map(|x| buf[(x, 0)].symbol()).collect();
        let mid: String = (0..12).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(top.contains(" notes "));
        assert!(mid.contains("hello"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = TextPage::from_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("reading page"));
    }
}

//! Ratatui widget for the scroll region: draws every page that overlaps the
//! viewport at the current horizontal offset, clipping pages that are only
//! partly on screen.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::container::PageContainer;
use crate::core::geometry::Frame;
use crate::core::pages::PagePanel;

/// A page panel that can draw itself into a terminal buffer.
pub trait RenderPage: PagePanel {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

pub struct PagerWidget<'a, P> {
    container: &'a PageContainer<P>,
    offset: f64,
}

impl<'a, P: RenderPage> PagerWidget<'a, P> {
    /// `offset` is the animated x offset; it may lag the container's logical
    /// offset while a scroll is in flight.
    pub fn new(container: &'a PageContainer<P>, offset: f64) -> Self {
        Self { container, offset }
    }
}

/// Copy columns `[from, to)` of `src` into `buf` starting at column `dst_x`.
fn blit_columns(src: &Buffer, from: u16, to: u16, dst_x: u16, dst_y: u16, buf: &mut Buffer) {
    for y in 0..src.area.height {
        for x in from..to {
            let Some(cell) = src.cell((x, y)) else {
                continue;
            };
            if let Some(dst) = buf.cell_mut((dst_x + (x - from), dst_y + y)) {
                *dst = cell.clone();
            }
        }
    }
}

impl<'a, P: RenderPage> Widget for PagerWidget<'a, P> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let viewport = area.width as i32;
        let window = Frame::new(self.offset, 0.0, area.width as f64, area.height as f64);

        for page in self.container.pages() {
            let width = page.frame.width.floor() as i32;
            let height = (page.frame.height.floor() as i32).min(area.height as i32);
            if width <= 0 || height <= 0 {
                continue;
            }
            if !page.frame.intersects(&window) {
                continue;
            }
            let left = (page.frame.x - self.offset).round() as i32;

            let full_rect = Rect::new(0, 0, width as u16, height as u16);
            if left >= 0 && left + width <= viewport {
                let on_screen = Rect::new(area.x + left as u16, area.y, full_rect.width, full_rect.height);
                page.panel.render(on_screen, buf);
                continue;
            }

            // Partly visible: draw off-screen, then copy the visible columns.
            let mut scratch = Buffer::empty(full_rect);
            page.panel.render(full_rect, &mut scratch);

            let from = (-left).max(0) as u16;
            let to = (viewport - left).min(width) as u16;
            let dst_x = area.x + left.max(0) as u16;
            blit_columns(&scratch, from, to, dst_x, area.y, buf);
        }
    }
}

//! Horizontally paged scroll region.
//!
//! Holds the logical content offset.  Animation is somebody else's job: every
//! offset change is also queued as a [`ScrollRequest`] that the renderer drains
//! and animates (or jumps to) on its own clock.

use super::geometry::{Frame, Point, Size};

/// One "scroll to here" request, latest wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset: Point,
    pub animated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollRegion {
    /// Position within the container.
    pub frame: Frame,
    /// Total scrollable extent.
    pub content_size: Size,
    offset: Point,
    pending: Option<ScrollRequest>,
}

impl ScrollRegion {
    pub fn viewport_width(&self) -> f64 {
        self.frame.width
    }

    pub fn viewport_height(&self) -> f64 {
        self.frame.height
    }

    pub fn content_offset(&self) -> Point {
        self.offset
    }

    /// Largest x offset that still keeps the viewport inside the content.
    pub fn max_offset_x(&self) -> f64 {
        (self.content_size.width - self.frame.width).max(0.0)
    }

    pub fn set_content_offset(&mut self, offset: Point, animated: bool) {
        self.offset = offset;
        self.pending = Some(ScrollRequest { offset, animated });
    }

    /// Move by `dx` without animation, never past either end.
    pub fn scroll_by(&mut self, dx: f64) {
        let current = self.content_offset();
        let x = (current.x + dx).clamp(0.0, self.max_offset_x());
        self.set_content_offset(Point::new(x, current.y), false);
    }

    /// The page whose left edge is closest to the current offset.
    pub fn nearest_page(&self, page_count: usize) -> Option<usize> {
        let width = self.viewport_width();
        if page_count == 0 || width <= 0.0 {
            return None;
        }
        let page = (self.content_offset().x / width).round().max(0.0) as usize;
        Some(page.min(page_count - 1))
    }

    /// Hand the latest request to the animator.
    pub fn take_request(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }
}

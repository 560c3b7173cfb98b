//! Layout helpers — split the terminal area into regions and convert between
//! core frames and terminal rects.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::geometry::Frame;

/// Primary screen layout: the paged container and a bottom status bar.
pub struct AppLayout {
    pub container_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // tab strip + pages
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            container_area: chunks[0],
            status_area: chunks[1],
        }
    }
}

pub fn rect_to_frame(r: Rect) -> Frame {
    Frame::new(r.x as f64, r.y as f64, r.width as f64, r.height as f64)
}

/// Map a frame given relative to `origin` onto terminal cells, clipped to
/// `clip`.  Edges are floored so adjacent frames never share a cell.
pub fn frame_to_rect(frame: Frame, origin: Rect, clip: Rect) -> Rect {
    let x0 = origin.x as f64 + frame.x.floor();
    let y0 = origin.y as f64 + frame.y.floor();
    let x1 = origin.x as f64 + frame.max_x().floor();
    let y1 = origin.y as f64 + frame.max_y().floor();

    let to_u16 = |v: f64| v.clamp(0.0, u16::MAX as f64) as u16;
    let (x0, y0, x1, y1) = (to_u16(x0), to_u16(y0), to_u16(x1), to_u16(y1));

    Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)).intersection(clip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_is_one_row_at_bottom() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.container_area, Rect::new(0, 0, 80, 23));
        assert_eq!(layout.status_area, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn frame_is_offset_and_clipped() {
        let origin = Rect::new(2, 1, 20, 3);
        let r = frame_to_rect(Frame::new(14.0, 0.0, 14.0, 3.0), origin, origin);
        assert_eq!(r, Rect::new(16, 1, 6, 3));
    }

    #[test]
    fn half_rows_do_not_overlap() {
        let origin = Rect::new(0, 0, 10, 3);
        let top = frame_to_rect(Frame::new(0.0, 0.0, 10.0, 1.5), origin, origin);
        let bottom = frame_to_rect(Frame::new(0.0, 1.5, 10.0, 1.5), origin, origin);
        assert_eq!(top, Rect::new(0, 0, 10, 1));
        assert_eq!(bottom, Rect::new(0, 1, 10, 2));
    }
}

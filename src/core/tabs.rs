//! Tab strip model — one tab per page, evenly dividing the strip width.
//!
//! The strip only computes geometry and reports taps.  It never decides which
//! tab is visually selected; the container owns that.

use super::geometry::Frame;

/// Height used when no explicit strip height is configured.
pub const DEFAULT_STRIP_HEIGHT: f64 = 50.0;

/// Label data for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabConfiguration {
    pub title: String,
    pub subtitle: Option<String>,
}

impl TabConfiguration {
    pub fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle,
        }
    }
}

/// Emitted when a tab is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    Selected(usize),
}

/// Where the labels of one tab cell go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub title: Frame,
    pub subtitle: Option<Frame>,
}

/// Split a cell between title and subtitle.
///
/// Without a subtitle the title takes the whole cell; with one the cell is cut
/// into two equal stacked halves, title on top.
pub fn cell_layout(cell: Frame, has_subtitle: bool) -> CellLayout {
    if !has_subtitle {
        return CellLayout {
            title: cell,
            subtitle: None,
        };
    }
    let half = cell.height / 2.0;
    CellLayout {
        title: Frame::new(cell.x, cell.y, cell.width, half),
        subtitle: Some(Frame::new(cell.x, cell.mid_y(), cell.width, half)),
    }
}

// ───────────────────────────────────────── strip ─────────────

#[derive(Debug, Clone)]
pub struct TabStrip {
    configurations: Vec<TabConfiguration>,
    /// Configured height when unfolded.
    pub height: f64,
    /// Collapsed strips report zero intrinsic height.
    pub is_folded: bool,
    /// Set by the container's layout pass.
    bounds: Frame,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TabStrip {
    /// Single-row layout: no gaps between tabs.
    pub const INTER_ITEM_SPACING: f64 = 0.0;
    pub const LINE_SPACING: f64 = 0.0;

    pub fn new(configurations: Vec<TabConfiguration>) -> Self {
        Self {
            configurations,
            height: DEFAULT_STRIP_HEIGHT,
            is_folded: false,
            bounds: Frame::ZERO,
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.set_height(height);
        self
    }

    /// Unfolded height; negative values become zero.
    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(0.0);
    }

    /// Replace the tab labels (the container calls this whenever pages change).
    pub fn reload(&mut self, configurations: Vec<TabConfiguration>) {
        self.configurations = configurations;
    }

    pub fn configurations(&self) -> &[TabConfiguration] {
        &self.configurations
    }

    pub fn tab_count(&self) -> usize {
        self.configurations.len()
    }

    pub fn bounds(&self) -> Frame {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Frame) {
        self.bounds = bounds;
    }

    /// Height the strip asks for during layout.
    pub fn intrinsic_height(&self) -> f64 {
        if self.is_folded {
            0.0
        } else {
            self.height
        }
    }

    pub fn set_folded(&mut self, folded: bool) {
        self.is_folded = folded;
    }

    pub fn toggle_folded(&mut self) {
        self.is_folded = !self.is_folded;
    }

    /// `ceil((width - spacing) / count)`; zero when there are no tabs.
    pub fn tab_width(&self) -> f64 {
        let count = self.tab_count();
        if count == 0 {
            return 0.0;
        }
        let n = count as f64;
        let spacing = Self::INTER_ITEM_SPACING * (n - 1.0);
        ((self.bounds.width - spacing) / n).ceil().max(0.0)
    }

    pub fn tab_height(&self) -> f64 {
        (self.bounds.height - Self::LINE_SPACING / 2.0).max(0.0)
    }

    /// Frame of tab `index`, relative to the strip's origin.
    pub fn tab_frame(&self, index: usize) -> Option<Frame> {
        if index >= self.tab_count() {
            return None;
        }
        let width = self.tab_width();
        let x = index as f64 * (width + Self::INTER_ITEM_SPACING);
        Some(Frame::new(x, 0.0, width, self.tab_height()))
    }

    /// Which tab lies under strip-relative `x`.
    pub fn hit_test(&self, x: f64) -> Option<usize> {
        let width = self.tab_width();
        if width <= 0.0 || x < 0.0 || x >= self.bounds.width {
            return None;
        }
        let index = (x / (width + Self::INTER_ITEM_SPACING)).floor() as usize;
        (index < self.tab_count()).then_some(index)
    }

    /// A tap on tab `index`.  Does not touch any visual state.
    pub fn tap(&self, index: usize) -> Option<TabEvent> {
        (index < self.tab_count()).then_some(TabEvent::Selected(index))
    }
}

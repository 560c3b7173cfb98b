//! Ordered page storage.
//!
//! Pages live in a plain `Vec`, so a page's index is its position and the
//! index range is always contiguous.  Inserting shifts later pages right
//! instead of overwriting whatever was at the target slot.

use super::error::{PagerError, Result};
use super::geometry::Frame;

// ───────────────────────────────────────── panel capability ──

/// Content that can be hosted as a page: it has a title, and it is told
/// when it joins the container and whenever it is laid out.
pub trait PagePanel {
    /// Label for the page's tab.  `None` shows as an empty tab.
    fn title(&self) -> Option<&str>;

    /// Second, smaller line under the title.
    fn subtitle(&self) -> Option<&str> {
        None
    }

    /// Called when the panel is attached to the scroll region at `index`
    /// (again if a later insertion moves it).
    fn did_move_to_parent(&mut self, _index: usize) {}

    /// Called on every layout pass with the panel's frame in scroll-content
    /// coordinates.
    fn did_layout(&mut self, _frame: Frame) {}
}

// ───────────────────────────────────────── page ──────────────

/// One managed page: the panel plus the frame it was last laid out in.
#[derive(Debug)]
pub struct Page<P> {
    pub panel: P,
    pub frame: Frame,
}

impl<P> Page<P> {
    fn new(panel: P) -> Self {
        Self {
            panel,
            frame: Frame::ZERO,
        }
    }
}

// ───────────────────────────────────────── list ──────────────

#[derive(Debug)]
pub struct PageList<P> {
    pages: Vec<Page<P>>,
}

impl<P> Default for PageList<P> {
    fn default() -> Self {
        Self { pages: Vec::new() }
    }
}

impl<P: PagePanel> PageList<P> {
    /// Register every panel at its sequence position.
    pub fn from_panels(panels: Vec<P>) -> Self {
        let mut list = Self::default();
        for panel in panels {
            list.push(panel);
        }
        list
    }

    /// Append a panel; returns its index.
    pub fn push(&mut self, panel: P) -> usize {
        let index = self.pages.len();
        self.pages.push(Page::new(panel));
        self.pages[index].panel.did_move_to_parent(index);
        index
    }

    /// Insert at `index`, shifting the pages at and after it one slot right.
    ///
    /// Every shifted page is re-notified with its new index.
    pub fn insert(&mut self, index: usize, panel: P) -> Result<()> {
        let count = self.pages.len();
        if index > count {
            return Err(PagerError::InsertOutOfRange { index, count });
        }
        self.pages.insert(index, Page::new(panel));
        for (i, page) in self.pages.iter_mut().enumerate().skip(index) {
            page.panel.did_move_to_parent(i);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page<P>> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page<P>> {
        self.pages.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Page<P>> {
        self.pages.iter_mut()
    }
}

//! The page container — pages in a horizontally paged scroll region with a
//! tab strip on top, kept index-synchronized.
//!
//! Control flow: a tab tap turns into a [`TabEvent`], the container answers
//! by selecting that page, which moves the scroll offset to
//! `index × viewport width` and notifies selection listeners.

use tracing::{debug, warn};

use super::error::{PagerError, Result};
use super::geometry::{Frame, Point, Size};
use super::pages::{Page, PageList, PagePanel};
use super::scroll::ScrollRegion;
use super::tabs::{TabConfiguration, TabEvent, TabStrip};

// ───────────────────────────────────────── listeners ─────────

/// Observer for page selection changes.
pub trait SelectionListener {
    fn page_selected(&mut self, index: usize);
}

impl<F: FnMut(usize)> SelectionListener for F {
    fn page_selected(&mut self, index: usize) {
        self(index)
    }
}

// ───────────────────────────────────────── container ─────────

pub struct PageContainer<P> {
    pages: PageList<P>,
    tab_strip: TabStrip,
    scroll: ScrollRegion,
    /// `None` only while there are no pages.
    selected: Option<usize>,
    listeners: Vec<Box<dyn SelectionListener>>,
}

impl<P: PagePanel> PageContainer<P> {
    /// Build a container owning `panels`, in order.
    pub fn new(panels: Vec<P>) -> Self {
        Self::with_tab_strip(panels, TabStrip::default())
    }

    /// Like [`PageContainer::new`] but with a pre-configured strip (height,
    /// fold state).  Its labels are replaced by ones derived from the pages.
    pub fn with_tab_strip(panels: Vec<P>, tab_strip: TabStrip) -> Self {
        let pages = PageList::from_panels(panels);
        let selected = (!pages.is_empty()).then_some(0);
        let mut container = Self {
            pages,
            tab_strip,
            scroll: ScrollRegion::default(),
            selected,
            listeners: Vec::new(),
        };
        container.reload_tabs();
        container
    }

    // ── pages ───────────────────────────────────────────────────

    /// Insert `panel` at `index`, shifting later pages right.
    ///
    /// The currently selected page stays selected even if its index moves;
    /// listeners hear about the new index.
    pub fn add_page(&mut self, panel: P, index: usize) -> Result<()> {
        if let Err(e) = self.pages.insert(index, panel) {
            warn!("add_page rejected: {e}");
            return Err(e);
        }
        self.did_insert(index);
        Ok(())
    }

    /// Append `panel` after the last page.
    pub fn push_page(&mut self, panel: P) {
        let index = self.pages.push(panel);
        self.did_insert(index);
    }

    fn did_insert(&mut self, index: usize) {
        debug!(index, count = self.pages.len(), "page inserted");

        let previous = self.selected;
        self.selected = match previous {
            None => Some(0),
            Some(sel) if index <= sel => Some(sel + 1),
            keep => keep,
        };
        self.reload_tabs();
        self.relayout_pages();
        self.pin_offset_to_selection(false);

        if self.selected != previous {
            if let Some(sel) = self.selected {
                self.notify_selection(sel);
            }
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&Page<P>> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page<P>> {
        self.pages.iter()
    }

    /// One tab configuration per page, ascending index order.  Always derived
    /// from the current pages.
    pub fn tab_configurations(&self) -> Vec<TabConfiguration> {
        self.pages
            .iter()
            .map(|page| {
                TabConfiguration::new(
                    page.panel.title().unwrap_or_default(),
                    page.panel.subtitle().map(str::to_owned),
                )
            })
            .collect()
    }

    fn reload_tabs(&mut self) {
        let configurations = self.tab_configurations();
        self.tab_strip.reload(configurations);
    }

    // ── selection ───────────────────────────────────────────────

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn add_selection_listener(&mut self, listener: impl SelectionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Select page `index` and animate the scroll region to it.
    pub fn select_page(&mut self, index: usize) -> Result<()> {
        self.scroll_to_page(index, true)
    }

    /// Select page `index`; `animated == false` jumps straight there.
    pub fn scroll_to_page(&mut self, index: usize, animated: bool) -> Result<()> {
        let count = self.pages.len();
        if index >= count {
            warn!(index, count, "select_page out of range");
            return Err(PagerError::PageOutOfRange { index, count });
        }

        self.selected = Some(index);
        let target = Point::new(index as f64 * self.scroll.viewport_width(), 0.0);
        self.scroll.set_content_offset(target, animated);
        debug!(index, offset = target.x, animated, "page selected");

        self.notify_selection(index);
        Ok(())
    }

    fn notify_selection(&mut self, index: usize) {
        for listener in &mut self.listeners {
            listener.page_selected(index);
        }
    }

    /// A tap on tab `index`: the strip reports it, the container selects.
    pub fn tap_tab(&mut self, index: usize) -> Result<()> {
        match self.tab_strip.tap(index) {
            Some(TabEvent::Selected(i)) => self.select_page(i),
            None => Err(PagerError::PageOutOfRange {
                index,
                count: self.pages.len(),
            }),
        }
    }

    // ── scrolling ───────────────────────────────────────────────

    pub fn scroll(&self) -> &ScrollRegion {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollRegion {
        &mut self.scroll
    }

    /// Free scroll (e.g. a wheel) by `dx`, clamped to the content.
    pub fn scroll_by(&mut self, dx: f64) {
        self.scroll.scroll_by(dx);
    }

    /// Free scrolling came to rest: snap onto the nearest page and make it
    /// the selection.
    pub fn scroll_settled(&mut self) -> Option<usize> {
        let page = self.scroll.nearest_page(self.pages.len())?;
        if let Err(e) = self.select_page(page) {
            warn!("scroll_settled: {e}");
            return None;
        }
        Some(page)
    }

    // ── tab strip ───────────────────────────────────────────────

    pub fn tab_strip(&self) -> &TabStrip {
        &self.tab_strip
    }

    pub fn tab_strip_mut(&mut self) -> &mut TabStrip {
        &mut self.tab_strip
    }

    // ── layout ──────────────────────────────────────────────────

    /// Recompute every frame for `bounds`.
    ///
    /// Cheap enough to call on every draw; the scroll offset is only re-pinned
    /// to the selected page when the viewport size actually changed.
    pub fn layout(&mut self, bounds: Frame) {
        let previous_viewport = self.scroll.frame.size();

        let strip_height = self.tab_strip.intrinsic_height().min(bounds.height);
        self.tab_strip
            .set_bounds(Frame::new(bounds.x, bounds.y, bounds.width, strip_height));

        self.scroll.frame = Frame::new(
            bounds.x,
            bounds.y + strip_height,
            bounds.width,
            bounds.height - strip_height,
        );

        self.relayout_pages();

        if self.scroll.frame.size() != previous_viewport {
            self.pin_offset_to_selection(false);
        }
    }

    fn relayout_pages(&mut self) {
        let width = self.scroll.viewport_width();
        let height = self.scroll.viewport_height();

        for (index, page) in self.pages.iter_mut().enumerate() {
            page.frame = Frame::new(index as f64 * width, 0.0, width, height);
            page.panel.did_layout(page.frame);
        }

        self.scroll.content_size = Size::new(self.pages.len() as f64 * width, height);
    }

    fn pin_offset_to_selection(&mut self, animated: bool) {
        let index = self.selected.unwrap_or(0);
        let target = Point::new(index as f64 * self.scroll.viewport_width(), 0.0);
        self.scroll.set_content_offset(target, animated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pages::tests::MockPanel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn container(titles: &[&str]) -> PageContainer<MockPanel> {
        PageContainer::new(titles.iter().map(|t| MockPanel::new(t)).collect())
    }

    fn titles(c: &PageContainer<MockPanel>) -> Vec<String> {
        c.tab_configurations().into_iter().map(|t| t.title).collect()
    }

    #[test]
    fn tabs_match_pages_in_order() {
        let c = container(&["A", "B", "C"]);
        assert_eq!(c.tab_strip().tab_count(), 3);
        assert_eq!(titles(&c), vec!["A", "B", "C"]);
        assert_eq!(c.selected(), Some(0));
    }

    #[test]
    fn missing_title_becomes_empty_tab() {
        let c = PageContainer::new(vec![MockPanel::untitled()]);
        assert_eq!(c.tab_configurations()[0].title, "");
    }

    #[test]
    fn subtitles_are_carried_into_tabs() {
        let mut panel = MockPanel::new("A");
        panel.subtitle = Some("sub".into());
        let c = PageContainer::new(vec![panel]);
        assert_eq!(c.tab_strip().configurations()[0].subtitle.as_deref(), Some("sub"));
    }

    #[test]
    fn layout_stacks_strip_over_pages() {
        let mut c = container(&["A", "B", "C"]);
        c.layout(Frame::new(0.0, 0.0, 320.0, 480.0));

        assert_eq!(c.tab_strip().bounds(), Frame::new(0.0, 0.0, 320.0, 50.0));
        assert_eq!(c.scroll().frame, Frame::new(0.0, 50.0, 320.0, 430.0));
        assert_eq!(c.scroll().content_size, Size::new(960.0, 430.0));
        assert_eq!(c.tab_strip().tab_width(), 107.0);

        for (i, page) in c.pages().enumerate() {
            assert_eq!(page.frame, Frame::new(i as f64 * 320.0, 0.0, 320.0, 430.0));
        }
    }

    #[test]
    fn layout_notifies_each_panel() {
        let panel = MockPanel::new("A");
        let frames = Rc::clone(&panel.frames);
        let mut c = PageContainer::new(vec![panel]);
        c.layout(Frame::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(*frames.borrow(), vec![Frame::new(0.0, 0.0, 100.0, 10.0)]);
    }

    #[test]
    fn folded_strip_gives_pages_full_height() {
        let mut c = container(&["A", "B"]);
        c.tab_strip_mut().set_folded(true);
        c.layout(Frame::new(0.0, 0.0, 320.0, 480.0));
        assert_eq!(c.tab_strip().bounds().height, 0.0);
        assert_eq!(c.scroll().frame, Frame::new(0.0, 0.0, 320.0, 480.0));
    }

    #[test]
    fn select_page_targets_index_times_width() {
        let mut c = container(&["A", "B", "C"]);
        c.layout(Frame::new(0.0, 0.0, 320.0, 480.0));
        c.scroll_mut().take_request();

        for i in 0..3 {
            c.select_page(i).unwrap();
            assert_eq!(c.scroll().content_offset().x, i as f64 * 320.0);
            assert_eq!(c.selected(), Some(i));
        }
        let request = c.scroll_mut().take_request().unwrap();
        assert_eq!(request.offset.x, 640.0);
        assert!(request.animated);
    }

    #[test]
    fn select_page_out_of_range_is_rejected() {
        let mut c = container(&["A", "B"]);
        c.layout(Frame::new(0.0, 0.0, 100.0, 100.0));
        c.select_page(1).unwrap();

        let err = c.select_page(5).unwrap_err();
        assert_eq!(err, PagerError::PageOutOfRange { index: 5, count: 2 });
        assert_eq!(c.selected(), Some(1));
        assert_eq!(c.scroll().content_offset().x, 100.0);
    }

    #[test]
    fn tab_tap_selects_and_notifies_listeners() {
        let mut c = container(&["A", "B", "C"]);
        c.layout(Frame::new(0.0, 0.0, 320.0, 480.0));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.add_selection_listener(move |i: usize| sink.borrow_mut().push(i));

        c.tap_tab(2).unwrap();
        c.tap_tab(0).unwrap();
        assert!(c.tap_tab(3).is_err());

        assert_eq!(*seen.borrow(), vec![2, 0]);
        assert_eq!(c.scroll().content_offset().x, 0.0);
    }

    #[test]
    fn added_pages_show_up_in_tabs() {
        let mut c = container(&["A", "C"]);
        c.add_page(MockPanel::new("B"), 1).unwrap();
        c.push_page(MockPanel::new("D"));
        assert_eq!(titles(&c), vec!["A", "B", "C", "D"]);
        assert_eq!(c.tab_strip().tab_count(), 4);
    }

    #[test]
    fn add_page_keeps_the_same_page_selected() {
        let mut c = container(&["A", "B"]);
        c.layout(Frame::new(0.0, 0.0, 100.0, 100.0));
        c.select_page(1).unwrap();

        c.add_page(MockPanel::new("Z"), 0).unwrap();

        assert_eq!(c.selected(), Some(2));
        assert_eq!(c.scroll().content_offset().x, 200.0);
        assert_eq!(c.scroll().content_size.width, 300.0);
    }

    #[test]
    fn listeners_follow_selection_shifted_by_insert() {
        let mut c = container(&["A", "B"]);
        c.layout(Frame::new(0.0, 0.0, 100.0, 100.0));
        c.select_page(1).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.add_selection_listener(move |i: usize| sink.borrow_mut().push(i));

        c.add_page(MockPanel::new("Z"), 0).unwrap();
        assert_eq!(seen.borrow().last().copied(), c.selected());

        // Inserting after the selection leaves it alone: no notification.
        c.push_page(MockPanel::new("Y"));
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn first_page_into_empty_container_notifies_listeners() {
        let mut c: PageContainer<MockPanel> = PageContainer::new(Vec::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.add_selection_listener(move |i: usize| sink.borrow_mut().push(i));

        c.push_page(MockPanel::new("A"));
        c.push_page(MockPanel::new("B"));

        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(c.tab_strip().tab_count(), 2);
    }

    #[test]
    fn add_page_past_end_is_rejected() {
        let mut c = container(&["A"]);
        assert!(matches!(
            c.add_page(MockPanel::new("X"), 4),
            Err(PagerError::InsertOutOfRange { index: 4, count: 1 })
        ));
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn first_page_into_empty_container_is_selected() {
        let mut c: PageContainer<MockPanel> = PageContainer::new(Vec::new());
        assert_eq!(c.selected(), None);
        assert!(c.select_page(0).is_err());
        c.push_page(MockPanel::new("A"));
        assert_eq!(c.selected(), Some(0));
    }

    #[test]
    fn resize_repins_offset_to_selected_page() {
        let mut c = container(&["A", "B", "C"]);
        c.layout(Frame::new(0.0, 0.0, 320.0, 480.0));
        c.select_page(2).unwrap();

        c.layout(Frame::new(0.0, 0.0, 200.0, 480.0));

        assert_eq!(c.scroll().content_offset().x, 400.0);
        assert!(!c.scroll_mut().take_request().unwrap().animated);
    }

    #[test]
    fn free_scroll_settles_on_nearest_page() {
        let mut c = container(&["A", "B", "C"]);
        c.layout(Frame::new(0.0, 0.0, 100.0, 100.0));

        c.scroll_by(130.0);
        assert_eq!(c.selected(), Some(0));
        c.layout(Frame::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(c.scroll().content_offset().x, 130.0);

        assert_eq!(c.scroll_settled(), Some(1));
        assert_eq!(c.selected(), Some(1));
        assert_eq!(c.scroll().content_offset().x, 100.0);
    }
}

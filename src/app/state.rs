//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::container::PageContainer;
use crate::core::pages::PagePanel;
use crate::ui::smooth_scroll::SmoothScroll;

use super::pages::TextPage;

/// Top-level application state.
pub struct AppState {
    /// Pages, tab strip, and scroll region.
    pub container: PageContainer<TextPage>,
    /// Animated horizontal offset the pager is drawn at.
    pub scroll_anim: SmoothScroll,
    /// User configuration (bindings, strip height).
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Set by wheel scrolling; the next idle tick snaps to a page.
    pub pending_settle: bool,
    /// Where the tab strip was drawn last frame, for mouse hit-testing.
    pub strip_area: Rect,
}

impl AppState {
    pub fn new(container: PageContainer<TextPage>, config: AppConfig) -> Self {
        Self {
            container,
            scroll_anim: SmoothScroll::new(config.scroll_speed),
            config,
            should_quit: false,
            status_message: None,
            pending_settle: false,
            strip_area: Rect::default(),
        }
    }

    /// Hand any queued scroll request to the animator.
    pub fn sync_scroll(&mut self) {
        if let Some(request) = self.container.scroll_mut().take_request() {
            self.scroll_anim.apply(request);
        }
    }

    /// `"2/3 notes.txt"`, or `"0/0"` with no pages.
    pub fn page_indicator(&self) -> String {
        let count = self.container.page_count();
        let Some(index) = self.container.selected() else {
            return format!("0/{count}");
        };
        let title = self
            .container
            .page(index)
            .and_then(|page| page.panel.title())
            .unwrap_or_default();
        format!("{}/{count} {title}", index + 1)
    }
}

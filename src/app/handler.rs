//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;

use super::pages::TextPage;
use super::state::AppState;

/// Columns moved per wheel notch.
const WHEEL_STEP: f64 = 4.0;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        // Unbound digits jump straight to a page (1-based).
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            if key.modifiers.is_empty() {
                select(state, (c as u8 - b'1') as usize);
            }
        }
        return;
    };

    let count = state.container.page_count();
    let current = state.container.selected();

    match action {
        Action::Quit => state.should_quit = true,
        Action::PrevPage => {
            if let Some(i) = current.filter(|&i| i > 0) {
                select(state, i - 1);
            }
        }
        Action::NextPage => {
            if let Some(i) = current.filter(|&i| i + 1 < count) {
                select(state, i + 1);
            }
        }
        Action::FirstPage => {
            if count > 0 {
                select(state, 0);
            }
        }
        Action::LastPage => {
            if count > 0 {
                select(state, count - 1);
            }
        }
        Action::NewPage => {
            let index = current.map_or(0, |i| i + 1);
            let title = format!("untitled {}", count + 1);
            match state.container.add_page(TextPage::new(Some(title), ""), index) {
                Ok(()) => select(state, index),
                Err(e) => state.status_message = Some(e.to_string()),
            }
        }
        Action::ToggleFold => {
            let strip = state.container.tab_strip_mut();
            strip.toggle_folded();
            let folded = strip.is_folded;
            state.status_message = Some(if folded { "Tabs folded" } else { "Tabs shown" }.into());
        }
    }
}

/// Process a mouse event: clicks on the strip tap tabs, horizontal wheel
/// scrolls the pages freely until the next idle tick.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let area = state.strip_area;
            let inside = mouse.column >= area.left()
                && mouse.column < area.right()
                && mouse.row >= area.top()
                && mouse.row < area.bottom();
            if !inside {
                return;
            }
            let x = (mouse.column - area.x) as f64;
            if let Some(index) = state.container.tab_strip().hit_test(x) {
                if let Err(e) = state.container.tap_tab(index) {
                    state.status_message = Some(e.to_string());
                }
            }
        }
        MouseEventKind::ScrollLeft => wheel(state, -WHEEL_STEP),
        MouseEventKind::ScrollRight => wheel(state, WHEEL_STEP),
        MouseEventKind::ScrollUp if shift => wheel(state, -WHEEL_STEP),
        MouseEventKind::ScrollDown if shift => wheel(state, WHEEL_STEP),
        _ => {}
    }
}

/// Advance the scroll animation; settle a finished wheel scroll onto a page.
///
/// Returns whether anything changed that needs a redraw.
pub fn handle_tick(state: &mut AppState) -> bool {
    let mut changed = false;
    if state.pending_settle {
        state.pending_settle = false;
        state.container.scroll_settled();
        state.sync_scroll();
        changed = true;
    }
    if state.scroll_anim.is_animating() {
        state.scroll_anim.tick();
        changed = true;
    }
    changed
}

fn wheel(state: &mut AppState, dx: f64) {
    state.container.scroll_by(dx);
    state.sync_scroll();
    state.pending_settle = true;
}

fn select(state: &mut AppState, index: usize) {
    match state.container.select_page(index) {
        Ok(()) => state.status_message = None,
        Err(e) => state.status_message = Some(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::demo_pages;
    use crate::config::{AppConfig, KeyBind};
    use crate::core::container::PageContainer;
    use crate::core::geometry::Frame;
    use crate::core::tabs::TabStrip;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        let strip = TabStrip::default().with_height(3.0);
        let mut container = PageContainer::with_tab_strip(demo_pages(), strip);
        container.layout(Frame::new(0.0, 0.0, 30.0, 20.0));
        let mut state = AppState::new(container, AppConfig::default());
        state.strip_area = Rect::new(0, 0, 30, 3);
        state.sync_scroll();
        state
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_page_through_and_stop_at_ends() {
        let mut s = state();
        press(&mut s, KeyCode::Left);
        assert_eq!(s.container.selected(), Some(0));
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Right);
        assert_eq!(s.container.selected(), Some(2));
        assert_eq!(s.container.scroll().content_offset().x, 60.0);
    }

    #[test]
    fn digit_out_of_range_reports_error() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        assert_eq!(s.container.selected(), Some(1));
        press(&mut s, KeyCode::Char('9'));
        assert_eq!(s.container.selected(), Some(1));
        assert_eq!(s.status_message.as_deref(), Some("page 8 is out of range (3 pages)"));
    }

    #[test]
    fn bound_digit_runs_its_action_instead_of_jumping() {
        let mut s = state();
        s.config
            .bindings
            .insert(Action::LastPage, vec![KeyBind::new(KeyCode::Char('1'), KeyModifiers::NONE)]);

        press(&mut s, KeyCode::Char('1'));
        assert_eq!(s.container.selected(), Some(2));

        // Digits nobody bound still jump.
        press(&mut s, KeyCode::Char('2'));
        assert_eq!(s.container.selected(), Some(1));
    }

    #[test]
    fn new_page_goes_after_the_selection_and_is_selected() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));

        assert_eq!(s.container.page_count(), 4);
        assert_eq!(s.container.selected(), Some(2));
        let titles: Vec<String> = s.container.tab_configurations().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["A", "B", "untitled 4", "C"]);
        assert_eq!(s.page_indicator(), "3/4 untitled 4");
    }

    #[test]
    fn idle_tick_reports_no_change() {
        let mut s = state();
        assert!(!handle_tick(&mut s));
        press(&mut s, KeyCode::End);
        s.sync_scroll();
        assert!(handle_tick(&mut s));
    }

    #[test]
    fn fold_key_toggles_strip() {
        let mut s = state();
        press(&mut s, KeyCode::Char('f'));
        assert_eq!(s.container.tab_strip().intrinsic_height(), 0.0);
        press(&mut s, KeyCode::Char('f'));
        assert_eq!(s.container.tab_strip().intrinsic_height(), 3.0);
    }

    #[test]
    fn click_on_tab_selects_its_page() {
        let mut s = state();
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 25, 1));
        assert_eq!(s.container.selected(), Some(2));

        // Below the strip: ignored.
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 2, 10));
        assert_eq!(s.container.selected(), Some(2));
    }

    #[test]
    fn selection_animates_to_target() {
        let mut s = state();
        press(&mut s, KeyCode::End);
        s.sync_scroll();
        assert!(s.scroll_anim.is_animating());
        for _ in 0..100 {
            handle_tick(&mut s);
        }
        assert_eq!(s.scroll_anim.position(), 60.0);
    }

    #[test]
    fn wheel_scroll_settles_on_tick() {
        let mut s = state();
        for _ in 0..5 {
            handle_mouse(&mut s, mouse(MouseEventKind::ScrollRight, 5, 5));
        }
        assert_eq!(s.container.scroll().content_offset().x, 20.0);
        assert_eq!(s.scroll_anim.position(), 20.0);

        handle_tick(&mut s);
        assert_eq!(s.container.selected(), Some(1));
        assert_eq!(s.container.scroll().content_offset().x, 30.0);
        assert!(!s.pending_settle);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut s = state();
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }
}

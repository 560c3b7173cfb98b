//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards events over a channel so the
//! main loop only ever waits on one receiver.  All state mutation stays on the
//! main loop; the reader task touches nothing but the channel.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// No input for one tick period; drives the scroll animation.
    Tick,
}

impl AppEvent {
    /// Translate a raw crossterm event.  Key releases are dropped.
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns the reader task and returns the receiving end.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let next = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(ev) => AppEvent::from_crossterm(ev),
                    Err(e) => {
                        tracing::warn!("terminal read failed: {e}");
                        None
                    }
                },
                Ok(false) => Some(AppEvent::Tick),
                Err(e) => {
                    tracing::warn!("terminal poll failed: {e}");
                    Some(AppEvent::Tick)
                }
            };
            let Some(next) = next else {
                continue;
            };
            if tx.send(next).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> CtEvent {
        CtEvent::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn only_key_presses_pass() {
        assert!(matches!(
            AppEvent::from_crossterm(key(KeyEventKind::Press)),
            Some(AppEvent::Key(_))
        ));
        assert!(AppEvent::from_crossterm(key(KeyEventKind::Release)).is_none());
    }

    #[test]
    fn resize_is_forwarded() {
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
        assert!(AppEvent::from_crossterm(CtEvent::FocusGained).is_none());
    }
}

//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* container and turns it into cells on the
//! terminal.  No I/O happens here.

pub mod layout;
pub mod pager;
pub mod smooth_scroll;
pub mod tab_strip;
pub mod theme;

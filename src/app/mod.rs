//! Application orchestration — state management, event loop, and input handling.

pub mod event;
pub mod handler;
pub mod pages;
pub mod state;

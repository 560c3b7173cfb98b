//! Core model – page list, tab strip geometry, and the page container.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! All state is owned by a single thread and mutated only from the UI loop.

pub mod container;
pub mod error;
pub mod geometry;
pub mod pages;
pub mod scroll;
pub mod tabs;

//! Errors raised by the page container.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    /// `select_page` / `scroll_to_page` with an index past the last page.
    #[error("page {index} is out of range ({count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    /// `add_page` with an index that would leave a gap in the page list.
    #[error("cannot insert a page at {index}: only {count} pages exist")]
    InsertOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, PagerError>;

//! Fetch lifecycle shared by every data-bound widget.
//!
//! DESIGN
//! ======
//! `Loading -> {Populated, Empty, Failed}`; any user action moves the widget
//! back to `Loading` before it settles again. There is no optimistic state:
//! what is rendered is always the last server answer.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

/// Where a widget is in its fetch lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Populated(T),
    Empty,
    /// Fetch failed; the message is for logs only, the widget renders its
    /// empty/zero state.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Populated(value) => Some(value),
            _ => None,
        }
    }

    /// Settle a single-record fetch. A record is never `Empty`.
    #[must_use]
    pub fn from_record<E: ToString>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Populated(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl<U> LoadState<Vec<U>> {
    /// Settle a list fetch; an empty list is its own state.
    #[must_use]
    pub fn from_list<E: ToString>(result: Result<Vec<U>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Populated(items),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Items to render; empty unless populated.
    #[must_use]
    pub fn items(&self) -> &[U] {
        match self {
            Self::Populated(items) => items,
            _ => &[],
        }
    }

    /// Whether the settled widget should show its empty-state message.
    #[must_use]
    pub fn shows_empty(&self) -> bool {
        matches!(self, Self::Empty | Self::Failed(_))
    }
}

//! View state for the articles review screen.
//!
//! DESIGN
//! ======
//! Every fetch is stamped with a ticket; a response whose ticket is not the
//! latest (the filter changed, or an action re-fetched) is dropped so an old
//! list can never overwrite a newer one. Decisions never touch `list`
//! directly: success triggers a full re-fetch.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use std::collections::HashSet;

use super::load::LoadState;
use crate::net::types::{Article, StatusFilter};

#[derive(Clone, Debug, Default)]
pub struct ArticlesState {
    pub filter: StatusFilter,
    pub list: LoadState<Vec<Article>>,
    /// Article shown in the read-only detail overlay.
    pub selected: Option<Article>,
    /// Articles with an approve/reject request in flight.
    pub pending_actions: HashSet<i64>,
    load_ticket: u64,
}

impl ArticlesState {
    /// Change the filter. Returns `true` if it actually changed.
    pub fn set_filter(&mut self, filter: StatusFilter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Enter `Loading` and return the ticket the response must present.
    pub fn begin_load(&mut self) -> u64 {
        self.load_ticket += 1;
        self.list = LoadState::Loading;
        self.load_ticket
    }

    /// Settle a fetch. Returns `false` when the response was stale and dropped.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<Article>, String>) -> bool {
        if ticket != self.load_ticket {
            return false;
        }
        self.list = LoadState::from_list(result);
        true
    }

    /// Number of articles currently listed.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list.items().len()
    }

    /// Mark a decision as in flight. Returns `false` if one already is.
    pub fn begin_action(&mut self, article_id: i64) -> bool {
        self.pending_actions.insert(article_id)
    }

    pub fn finish_action(&mut self, article_id: i64) {
        self.pending_actions.remove(&article_id);
    }

    #[must_use]
    pub fn is_action_pending(&self, article_id: i64) -> bool {
        self.pending_actions.contains(&article_id)
    }

    /// Open the detail overlay for a listed article.
    pub fn select(&mut self, article_id: i64) {
        self.selected = self.list.items().iter().find(|a| a.id == article_id).cloned();
    }

    /// Close the detail overlay. Purely local.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}

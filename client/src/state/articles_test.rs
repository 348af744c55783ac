use super::*;
use crate::net::types::ArticleStatus;

fn article(id: i64, status: ArticleStatus) -> Article {
    Article {
        id,
        title: format!("Статья {id}"),
        content: "Текст".to_owned(),
        url: format!("https://example.by/{id}"),
        source: "example.by".to_owned(),
        ai_score: 8.0,
        relevance_score: 7.0,
        status,
        found_date: "2026-10-01 09:00:00".to_owned(),
        keywords: Vec::new(),
    }
}

#[test]
fn default_state_is_loading_all() {
    let state = ArticlesState::default();
    assert_eq!(state.filter, StatusFilter::All);
    assert!(state.list.is_loading());
    assert_eq!(state.count(), 0);
}

#[test]
fn set_filter_reports_change() {
    let mut state = ArticlesState::default();
    assert!(!state.set_filter(StatusFilter::All));
    assert!(state.set_filter(StatusFilter::Pending));
    assert_eq!(state.filter, StatusFilter::Pending);
}

#[test]
fn finish_load_populates_list() {
    let mut state = ArticlesState::default();
    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, Ok(vec![article(1, ArticleStatus::Pending)])));
    assert_eq!(state.count(), 1);
}

#[test]
fn stale_response_is_dropped() {
    let mut state = ArticlesState::default();
    let old = state.begin_load();
    let new = state.begin_load();
    assert!(state.finish_load(new, Ok(vec![article(2, ArticleStatus::Published)])));
    assert!(!state.finish_load(old, Ok(vec![article(1, ArticleStatus::Pending)])));
    assert_eq!(state.list.items()[0].id, 2);
}

#[test]
fn failed_fetch_leaves_empty_list() {
    let mut state = ArticlesState::default();
    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, Ok(vec![article(1, ArticleStatus::Pending)])));
    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, Err("network".to_owned())));
    assert!(state.list.is_failed());
    assert_eq!(state.count(), 0);
}

#[test]
fn begin_load_clears_previous_items() {
    let mut state = ArticlesState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(vec![article(1, ArticleStatus::Pending)]));
    state.begin_load();
    assert!(state.list.is_loading());
    assert_eq!(state.count(), 0);
}

#[test]
fn duplicate_action_is_refused_until_finished() {
    let mut state = ArticlesState::default();
    assert!(state.begin_action(5));
    assert!(state.is_action_pending(5));
    assert!(!state.begin_action(5));
    state.finish_action(5);
    assert!(!state.is_action_pending(5));
    assert!(state.begin_action(5));
}

#[test]
fn select_and_close_detail() {
    let mut state = ArticlesState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(vec![article(1, ArticleStatus::Pending), article(2, ArticleStatus::Published)]));
    state.select(2);
    assert_eq!(state.selected.as_ref().map(|a| a.id), Some(2));
    state.close_detail();
    assert!(state.selected.is_none());
    assert_eq!(state.count(), 2);
}

#[test]
fn select_unknown_id_clears_selection() {
    let mut state = ArticlesState::default();
    state.select(99);
    assert!(state.selected.is_none());
}

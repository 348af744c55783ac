use super::*;

// =============================================================
// SettingsField
// =============================================================

#[test]
fn hour_and_minute_fields_carry_clock_bounds() {
    assert_eq!(SettingsField::SearchHour.bounds().max, "23");
    assert_eq!(SettingsField::InstagramPostMinute.bounds().max, "59");
    assert_eq!(SettingsField::MaxArticlesPerDay.bounds(), InputBounds { min: "1", max: "20", step: "1" });
    assert_eq!(SettingsField::MinArticleScore.bounds().step, "0.1");
}

#[test]
fn read_renders_current_values() {
    let settings = Settings::default();
    assert_eq!(SettingsField::SearchHour.read(&settings), "9");
    assert_eq!(SettingsField::BlogPostMinute.read(&settings), "0");
    assert_eq!(SettingsField::MaxArticlesPerDay.read(&settings), "5");
    assert_eq!(SettingsField::MinArticleScore.read(&settings), "7");
}

#[test]
fn write_accepts_integers_and_truncates_fractions() {
    let mut settings = Settings::default();
    assert!(SettingsField::FacebookPostHour.write(&mut settings, "18"));
    assert_eq!(settings.facebook_post_hour, 18);
    assert!(SettingsField::MaxArticlesPerDay.write(&mut settings, " 7.9 "));
    assert_eq!(settings.max_articles_per_day, 7);
}

#[test]
fn write_leaves_field_unchanged_on_garbage() {
    let mut settings = Settings::default();
    assert!(!SettingsField::SearchHour.write(&mut settings, "abc"));
    assert!(!SettingsField::SearchHour.write(&mut settings, ""));
    assert!(!SettingsField::SearchHour.write(&mut settings, "-3"));
    assert!(!SettingsField::MinArticleScore.write(&mut settings, "NaN"));
    assert!(!SettingsField::MinArticleScore.write(&mut settings, "-3"));
    assert!(!SettingsField::MinArticleScore.write(&mut settings, "-0.5"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn write_does_not_clamp_out_of_range_values() {
    let mut settings = Settings::default();
    assert!(SettingsField::SearchMinute.write(&mut settings, "75"));
    assert_eq!(settings.search_minute, 75);
    assert!(SettingsField::MinArticleScore.write(&mut settings, "12.5"));
    assert!((settings.min_article_score - 12.5).abs() < f64::EPSILON);
}

#[test]
fn schedule_rows_cover_all_four_jobs() {
    let labels: Vec<_> = SCHEDULE_ROWS.iter().map(|row| row.label).collect();
    assert_eq!(labels, ["Поиск статей", "Публикация в блог", "Публикация в Facebook", "Публикация в Instagram"]);
    assert_eq!(SCHEDULE_ROWS[2].hour, SettingsField::FacebookPostHour);
}

// =============================================================
// SettingsState
// =============================================================

#[test]
fn state_starts_loading_with_default_draft() {
    let state = SettingsState::default();
    assert!(state.record.is_loading());
    assert_eq!(state.form, Settings::default());
    assert!(!state.saving);
}

#[test]
fn successful_load_replaces_draft() {
    let mut state = SettingsState::default();
    let fetched = Settings { search_hour: 6, ..Settings::default() };
    state.finish_load(Ok(fetched.clone()));
    assert_eq!(state.form, fetched);
    assert_eq!(state.record.populated(), Some(&fetched));
}

#[test]
fn failed_load_keeps_draft() {
    let mut state = SettingsState::default();
    state.edit(SettingsField::SearchHour, "11");
    state.finish_load(Err("settings fetch failed: 502".to_owned()));
    assert!(state.record.is_failed());
    assert_eq!(state.form.search_hour, 11);
}

#[test]
fn reset_discards_unsaved_edits() {
    let mut state = SettingsState::default();
    state.finish_load(Ok(Settings::default()));
    state.edit(SettingsField::MaxArticlesPerDay, "12");
    state.begin_load();
    assert!(state.record.is_loading());
    state.finish_load(Ok(Settings::default()));
    assert_eq!(state.form.max_articles_per_day, 5);
}

#[test]
fn save_is_single_flight() {
    let mut state = SettingsState::default();
    state.edit(SettingsField::SearchMinute, "30");
    let payload = state.begin_save();
    assert_eq!(payload.map(|s| s.search_minute), Some(30));
    assert!(state.saving);
    assert!(state.begin_save().is_none());
    state.finish_save();
    assert!(!state.saving);
    assert!(state.begin_save().is_some());
}

#[test]
fn schedule_row_preview_is_zero_padded() {
    let settings = Settings { instagram_post_hour: 7, instagram_post_minute: 5, ..Settings::default() };
    assert_eq!(SCHEDULE_ROWS[0].preview(&settings), "09:00");
    assert_eq!(SCHEDULE_ROWS[3].preview(&settings), "07:05");
}

//! Settings form state.
//!
//! DESIGN
//! ======
//! `record` tracks the fetch lifecycle of the backend copy; `form` is the
//! editable draft bound to the inputs. A save posts the whole draft, a reset
//! re-fetches and overwrites the draft. Range limits live on the input
//! widgets only: the draft accepts any value that parses.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use super::load::LoadState;
use crate::net::types::Settings;
use crate::util::format::schedule_preview;

/// One bound input on the settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    SearchHour,
    SearchMinute,
    BlogPostHour,
    BlogPostMinute,
    FacebookPostHour,
    FacebookPostMinute,
    InstagramPostHour,
    InstagramPostMinute,
    MaxArticlesPerDay,
    MinArticleScore,
}

/// Native `<input type="number">` constraints for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputBounds {
    pub min: &'static str,
    pub max: &'static str,
    pub step: &'static str,
}

impl SettingsField {
    #[must_use]
    pub fn bounds(self) -> InputBounds {
        match self {
            Self::SearchHour | Self::BlogPostHour | Self::FacebookPostHour | Self::InstagramPostHour => {
                InputBounds { min: "0", max: "23", step: "1" }
            }
            Self::SearchMinute | Self::BlogPostMinute | Self::FacebookPostMinute | Self::InstagramPostMinute => {
                InputBounds { min: "0", max: "59", step: "1" }
            }
            Self::MaxArticlesPerDay => InputBounds { min: "1", max: "20", step: "1" },
            Self::MinArticleScore => InputBounds { min: "0", max: "10", step: "0.1" },
        }
    }

    fn slot(self, settings: &mut Settings) -> Option<&mut u32> {
        match self {
            Self::SearchHour => Some(&mut settings.search_hour),
            Self::SearchMinute => Some(&mut settings.search_minute),
            Self::BlogPostHour => Some(&mut settings.blog_post_hour),
            Self::BlogPostMinute => Some(&mut settings.blog_post_minute),
            Self::FacebookPostHour => Some(&mut settings.facebook_post_hour),
            Self::FacebookPostMinute => Some(&mut settings.facebook_post_minute),
            Self::InstagramPostHour => Some(&mut settings.instagram_post_hour),
            Self::InstagramPostMinute => Some(&mut settings.instagram_post_minute),
            Self::MaxArticlesPerDay => Some(&mut settings.max_articles_per_day),
            Self::MinArticleScore => None,
        }
    }

    fn whole(self, settings: &Settings) -> Option<u32> {
        match self {
            Self::SearchHour => Some(settings.search_hour),
            Self::SearchMinute => Some(settings.search_minute),
            Self::BlogPostHour => Some(settings.blog_post_hour),
            Self::BlogPostMinute => Some(settings.blog_post_minute),
            Self::FacebookPostHour => Some(settings.facebook_post_hour),
            Self::FacebookPostMinute => Some(settings.facebook_post_minute),
            Self::InstagramPostHour => Some(settings.instagram_post_hour),
            Self::InstagramPostMinute => Some(settings.instagram_post_minute),
            Self::MaxArticlesPerDay => Some(settings.max_articles_per_day),
            Self::MinArticleScore => None,
        }
    }

    /// Current value rendered into the input.
    #[must_use]
    pub fn read(self, settings: &Settings) -> String {
        self.whole(settings)
            .map_or_else(|| settings.min_article_score.to_string(), |value| value.to_string())
    }

    /// Apply raw input text. Returns `false` (and leaves the draft untouched)
    /// when the text is not a number the field can hold.
    pub fn write(self, settings: &mut Settings, raw: &str) -> bool {
        let Ok(parsed) = raw.trim().parse::<f64>() else {
            return false;
        };
        if !parsed.is_finite() || parsed < 0.0 {
            return false;
        }
        match self.slot(settings) {
            Some(slot) => {
                let whole = parsed.trunc();
                if whole > f64::from(u32::MAX) {
                    return false;
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    *slot = whole as u32;
                }
                true
            }
            None => {
                settings.min_article_score = parsed;
                true
            }
        }
    }
}

/// One schedule row: label plus its hour/minute inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleRow {
    pub label: &'static str,
    pub hour: SettingsField,
    pub minute: SettingsField,
}

impl ScheduleRow {
    /// `HH:MM` shown next to the inputs.
    #[must_use]
    pub fn preview(&self, settings: &Settings) -> String {
        schedule_preview(self.hour.whole(settings).unwrap_or_default(), self.minute.whole(settings).unwrap_or_default())
    }
}

pub const SCHEDULE_ROWS: [ScheduleRow; 4] = [
    ScheduleRow { label: "Поиск статей", hour: SettingsField::SearchHour, minute: SettingsField::SearchMinute },
    ScheduleRow {
        label: "Публикация в блог",
        hour: SettingsField::BlogPostHour,
        minute: SettingsField::BlogPostMinute,
    },
    ScheduleRow {
        label: "Публикация в Facebook",
        hour: SettingsField::FacebookPostHour,
        minute: SettingsField::FacebookPostMinute,
    },
    ScheduleRow {
        label: "Публикация в Instagram",
        hour: SettingsField::InstagramPostHour,
        minute: SettingsField::InstagramPostMinute,
    },
];

#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub record: LoadState<Settings>,
    pub form: Settings,
    pub saving: bool,
}

impl SettingsState {
    pub fn begin_load(&mut self) {
        self.record = LoadState::Loading;
    }

    /// Settle a fetch. On success the draft is replaced by the server copy;
    /// on failure the draft keeps whatever it had.
    pub fn finish_load(&mut self, result: Result<Settings, String>) {
        if let Ok(settings) = &result {
            self.form = settings.clone();
        }
        self.record = LoadState::from_record(result);
    }

    /// Start a save. Returns the record to post, or `None` if one is in flight.
    pub fn begin_save(&mut self) -> Option<Settings> {
        if self.saving {
            return None;
        }
        self.saving = true;
        Some(self.form.clone())
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    pub fn edit(&mut self, field: SettingsField, raw: &str) -> bool {
        field.write(&mut self.form, raw)
    }
}

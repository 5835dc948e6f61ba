// src/application/ports/localization.rs
use std::fmt;

/// Resource key for the message returned when a favorite source already exists.
pub const NEWS_FAVORITE_SOURCE_DUPLICATED: &str = "NewsFavoriteSourceDuplicated";

/// Lower-cased primary language tag, e.g. `en` or `es`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Parses a language tag and keeps only its primary subtag (`es-PE` -> `es`).
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.trim();
        if primary.is_empty()
            || primary == "*"
            || !primary.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }
        Some(Self(primary.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait MessageLocalizer: Send + Sync {
    fn localize(&self, key: &str, locale: &Locale) -> String;

    fn supports(&self, locale: &Locale) -> bool;

    fn default_locale(&self) -> &Locale;
}

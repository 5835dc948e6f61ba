// src/infrastructure/localization.rs
use crate::application::ports::localization::{Locale, MessageLocalizer};
use std::collections::HashMap;
use thiserror::Error;

const EMBEDDED_CATALOGS: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/messages.en.json")),
    ("es", include_str!("../../resources/messages.es.json")),
];

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("invalid locale tag '{0}'")]
    InvalidLocale(String),
    #[error("invalid message catalog for locale '{locale}': {source}")]
    Catalog {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no message catalog for default locale '{0}'")]
    MissingDefault(Locale),
}

/// Message catalogs compiled into the binary, keyed by primary language tag.
pub struct EmbeddedMessageCatalog {
    catalogs: HashMap<Locale, HashMap<String, String>>,
    default_locale: Locale,
}

impl EmbeddedMessageCatalog {
    pub fn load(default_locale: Locale) -> Result<Self, LocalizationError> {
        Self::from_sources(EMBEDDED_CATALOGS, default_locale)
    }

    pub fn from_sources(
        sources: &[(&str, &str)],
        default_locale: Locale,
    ) -> Result<Self, LocalizationError> {
        let mut catalogs = HashMap::with_capacity(sources.len());
        for (tag, raw) in sources {
            let locale =
                Locale::parse(tag).ok_or_else(|| LocalizationError::InvalidLocale((*tag).into()))?;
            let messages: HashMap<String, String> =
                serde_json::from_str(raw).map_err(|source| LocalizationError::Catalog {
                    locale: (*tag).into(),
                    source,
                })?;
            catalogs.insert(locale, messages);
        }

        if !catalogs.contains_key(&default_locale) {
            return Err(LocalizationError::MissingDefault(default_locale));
        }

        Ok(Self {
            catalogs,
            default_locale,
        })
    }

    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        self.catalogs
            .get(locale)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

impl MessageLocalizer for EmbeddedMessageCatalog {
    fn localize(&self, key: &str, locale: &Locale) -> String {
        self.lookup(key, locale)
            .or_else(|| self.lookup(key, &self.default_locale))
            .map_or_else(
                || {
                    tracing::warn!(key, locale = %locale, "missing localized message");
                    key.to_string()
                },
                str::to_string,
            )
    }

    fn supports(&self, locale: &Locale) -> bool {
        self.catalogs.contains_key(locale)
    }

    fn default_locale(&self) -> &Locale {
        &self.default_locale
    }
}

/// Picks the supported locale with the highest quality from an `Accept-Language`
/// header value, falling back to the localizer's default.
pub fn negotiate_locale(accept_language: Option<&str>, localizer: &dyn MessageLocalizer) -> Locale {
    let Some(header) = accept_language else {
        return localizer.default_locale().clone();
    };

    let mut candidates: Vec<(Locale, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let locale = Locale::parse(parts.next()?)?;
            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())?;
            (quality > 0.0).then_some((locale, quality))
        })
        .collect();
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    candidates
        .into_iter()
        .map(|(locale, _)| locale)
        .find(|locale| localizer.supports(locale))
        .unwrap_or_else(|| localizer.default_locale().clone())
}

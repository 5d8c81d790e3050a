//! Locale registry: locale code → dictionary and locale code → display name.

/// Registry builder
mod builder;
/// Hot-swappable registry handle
mod shared;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize,
};

pub use builder::RegistryBuilder;
pub use shared::SharedRegistry;

use crate::dictionary::Dictionary;
use crate::types::LocaleCode;

/// Which locales `Registry::list_locales` offers for selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocaleListPolicy {
    /// Every locale with a display name, even one that resolves to the
    /// default dictionary because it has none of its own.
    #[default]
    All,
    /// Only locales that have their own dictionary.
    WithDictionary,
}

/// A selectable locale: its code and the name shown in a language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Normalized locale code
    pub code: LocaleCode,
    /// Name shown in the picker
    pub display_name: String,
}

/// Read-only table of dictionaries and locale display names.
///
/// Built once via [`Registry::builder`] and never mutated afterwards. To pick
/// up new translations, build a replacement and swap it in through
/// [`SharedRegistry`].
#[derive(Debug, Clone)]
pub struct Registry {
    /// Dictionaries by normalized locale code.
    dictionaries: HashMap<LocaleCode, Arc<Dictionary>>,
    /// Display names in authored order.
    languages: Vec<LocaleEntry>,
    /// Dictionary returned for unregistered codes.
    default_dictionary: Arc<Dictionary>,
    /// Locale the default dictionary aliases, if any.
    default_locale: Option<LocaleCode>,
    /// Picker filter.
    list_policy: LocaleListPolicy,
    /// Key of the "not yet translated" notice.
    missing_translation_key: String,
}

impl Registry {
    /// Starts a registry whose fallback slot holds `default_dictionary`.
    #[must_use]
    pub fn builder(default_dictionary: impl Into<Arc<Dictionary>>) -> RegistryBuilder {
        RegistryBuilder::new(default_dictionary.into())
    }

    /// Returns the dictionary registered for `code`.
    ///
    /// Lookup is an exact match on the normalized code; `zh-CN` does not
    /// match a `zh` dictionary. Anything unregistered gets the default
    /// dictionary. Never fails.
    #[must_use]
    pub fn resolve_dictionary(&self, code: &str) -> &Dictionary {
        let code = LocaleCode::new(code);
        if let Some(dictionary) = self.dictionaries.get(&code) {
            return dictionary;
        }

        tracing::trace!(locale = %code, "No dictionary registered, using default");
        &self.default_dictionary
    }

    /// Locales available for selection, in authored order.
    #[must_use]
    pub fn list_locales(&self) -> Vec<(&LocaleCode, &str)> {
        self.languages
            .iter()
            .filter(|entry| match self.list_policy {
                LocaleListPolicy::All => true,
                LocaleListPolicy::WithDictionary => self.has_dictionary(entry.code.as_str()),
            })
            .map(|entry| (&entry.code, entry.display_name.as_str()))
            .collect()
    }

    /// Display name for `code`. No fallback: a missing name stays missing.
    #[must_use]
    pub fn display_name_of(&self, code: &str) -> Option<&str> {
        let code = LocaleCode::new(code);
        self.languages
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.display_name.as_str())
    }

    /// Dictionary every unregistered code resolves to.
    #[must_use]
    pub fn default_dictionary(&self) -> &Dictionary {
        &self.default_dictionary
    }

    /// Locale the default dictionary is registered under, if any.
    #[must_use]
    pub const fn default_locale(&self) -> Option<&LocaleCode> {
        self.default_locale.as_ref()
    }

    /// Key whose value is shown in place of an untranslated string.
    #[must_use]
    pub fn missing_translation_key(&self) -> &str {
        &self.missing_translation_key
    }

    /// Filter applied by [`Registry::list_locales`].
    #[must_use]
    pub const fn list_policy(&self) -> LocaleListPolicy {
        self.list_policy
    }

    /// True if `code` has its own dictionary (exact match after normalization).
    #[must_use]
    pub fn has_dictionary(&self, code: &str) -> bool {
        self.dictionaries.contains_key(&LocaleCode::new(code))
    }

    /// Display-named locales that fall back to the default dictionary.
    #[must_use]
    pub fn locales_without_dictionary(&self) -> Vec<&LocaleCode> {
        self.languages
            .iter()
            .map(|entry| &entry.code)
            .filter(|code| !self.dictionaries.contains_key(*code))
            .collect()
    }

    /// Registered dictionaries sorted by locale code.
    #[must_use]
    pub fn dictionaries(&self) -> Vec<(&LocaleCode, &Dictionary)> {
        let mut dictionaries: Vec<_> =
            self.dictionaries.iter().map(|(code, dictionary)| (code, &**dictionary)).collect();
        dictionaries.sort_by(|a, b| a.0.cmp(b.0));
        dictionaries
    }
}

//! Fallback chain for rendering a UI string in a requested locale.
//!
//! The chain is: the locale's dictionary, then the default dictionary, then
//! the "missing translation" notice, then the key itself.

use crate::dictionary::Dictionary;
use crate::registry::Registry;

/// Outcome of a lookup, tagged with the step of the chain that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Found in the dictionary resolved for the requested locale.
    Localized(&'a str),
    /// Found only in the default dictionary.
    Fallback(&'a str),
    /// Not found anywhere; holds the notice text (or the key if no notice exists).
    Untranslated(&'a str),
}

impl<'a> Lookup<'a> {
    /// Text to display, whichever variant this is.
    #[must_use]
    pub const fn text(self) -> &'a str {
        match self {
            Self::Localized(text) | Self::Fallback(text) | Self::Untranslated(text) => text,
        }
    }

    /// True if the requested locale's own dictionary had the key.
    #[must_use]
    pub const fn is_localized(self) -> bool {
        matches!(self, Self::Localized(_))
    }
}

/// Looks up keys for one requested locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Dictionary resolved for the requested locale
    dictionary: &'a Dictionary,
    /// Registry fallback dictionary
    default_dictionary: &'a Dictionary,
    /// Key of the untranslated notice
    missing_translation_key: &'a str,
}

impl<'a> Translator<'a> {
    /// Translator for `locale`, using the registry's notice key.
    #[must_use]
    pub fn new(registry: &'a Registry, locale: &str) -> Self {
        Self {
            dictionary: registry.resolve_dictionary(locale),
            default_dictionary: registry.default_dictionary(),
            missing_translation_key: registry.missing_translation_key(),
        }
    }

    /// Uses `key` instead of the registry's notice key.
    #[must_use]
    pub const fn with_missing_translation_key(mut self, key: &'a str) -> Self {
        self.missing_translation_key = key;
        self
    }

    /// Dictionary the requested locale resolved to.
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Walks the fallback chain for `key`.
    #[must_use]
    pub fn lookup(&self, key: &'a str) -> Lookup<'a> {
        if let Some(text) = self.dictionary.get(key) {
            return Lookup::Localized(text);
        }

        if !std::ptr::eq(self.dictionary, self.default_dictionary)
            && let Some(text) = self.default_dictionary.get(key)
        {
            tracing::debug!(key, "Translation missing, using default dictionary");
            return Lookup::Fallback(text);
        }

        tracing::debug!(key, "Translation missing in all dictionaries");
        let notice = self
            .dictionary
            .get(self.missing_translation_key)
            .or_else(|| self.default_dictionary.get(self.missing_translation_key))
            .unwrap_or(key);
        Lookup::Untranslated(notice)
    }

    /// Text to display for `key`, whichever step of the chain produced it.
    #[must_use]
    pub fn text(&self, key: &'a str) -> &'a str {
        self.lookup(key).text()
    }
}

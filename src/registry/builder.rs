//! Builder for [`Registry`].

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    LocaleEntry,
    LocaleListPolicy,
    Registry,
};
use crate::builtin::MISSING_TRANSLATION_KEY;
use crate::dictionary::Dictionary;
use crate::types::LocaleCode;

/// Collects dictionaries and display names, then freezes them into a [`Registry`].
///
/// Registering a code twice replaces the earlier entry. A replaced display
/// name keeps its original position in the picker order.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    /// Dictionaries registered so far
    dictionaries: HashMap<LocaleCode, Arc<Dictionary>>,
    /// Display names in registration order
    languages: Vec<LocaleEntry>,
    /// Fallback dictionary
    default_dictionary: Arc<Dictionary>,
    /// Locale the fallback dictionary is registered under
    default_locale: Option<LocaleCode>,
    /// Picker filter
    list_policy: LocaleListPolicy,
    /// Key of the "not yet translated" notice
    missing_translation_key: String,
}

impl RegistryBuilder {
    /// Empty builder around the fallback dictionary.
    pub(super) fn new(default_dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionaries: HashMap::new(),
            languages: Vec::new(),
            default_dictionary,
            default_locale: None,
            list_policy: LocaleListPolicy::default(),
            missing_translation_key: MISSING_TRANSLATION_KEY.to_string(),
        }
    }

    /// Registers `dictionary` for `code`.
    #[must_use]
    pub fn dictionary(
        mut self,
        code: impl Into<LocaleCode>,
        dictionary: impl Into<Arc<Dictionary>>,
    ) -> Self {
        let code = code.into();
        if self.dictionaries.insert(code.clone(), dictionary.into()).is_some() {
            tracing::debug!(locale = %code, "Replacing previously registered dictionary");
        }
        self
    }

    /// Sets the picker name for `code`.
    #[must_use]
    pub fn display_name(mut self, code: impl Into<LocaleCode>, name: impl Into<String>) -> Self {
        let code = code.into();
        let display_name = name.into();
        if let Some(entry) = self.languages.iter_mut().find(|entry| entry.code == code) {
            entry.display_name = display_name;
        } else {
            self.languages.push(LocaleEntry { code, display_name });
        }
        self
    }

    /// Marks the default dictionary as the one for `code`.
    ///
    /// At build time the default dictionary is registered under `code`,
    /// overriding any other dictionary given for the same code.
    #[must_use]
    pub fn default_locale(mut self, code: impl Into<LocaleCode>) -> Self {
        self.default_locale = Some(code.into());
        self
    }

    /// Sets which locales [`Registry::list_locales`] offers.
    #[must_use]
    pub fn list_policy(mut self, policy: LocaleListPolicy) -> Self {
        self.list_policy = policy;
        self
    }

    /// Key looked up when a translation is missing (default `missing.translation`).
    #[must_use]
    pub fn missing_translation_key(mut self, key: impl Into<String>) -> Self {
        self.missing_translation_key = key.into();
        self
    }

    /// Freezes the collected tables.
    #[must_use]
    pub fn build(mut self) -> Registry {
        if let Some(code) = &self.default_locale {
            self.dictionaries.insert(code.clone(), Arc::clone(&self.default_dictionary));
        }

        tracing::debug!(
            dictionaries = self.dictionaries.len(),
            languages = self.languages.len(),
            default_locale = ?self.default_locale,
            "Registry built"
        );

        Registry {
            dictionaries: self.dictionaries,
            languages: self.languages,
            default_dictionary: self.default_dictionary,
            default_locale: self.default_locale,
            list_policy: self.list_policy,
            missing_translation_key: self.missing_translation_key,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_display_name_replacement_keeps_position() {
        let registry = Registry::builder(Dictionary::default())
            .display_name("en", "English")
            .display_name("zh", "中文")
            .display_name("en", "English (US)")
            .build();

        let locales: Vec<_> = registry
            .list_locales()
            .into_iter()
            .map(|(code, name)| (code.as_str(), name))
            .collect();

        assert_eq!(locales, vec![("en", "English (US)"), ("zh", "中文")]);
    }

    #[rstest]
    fn test_dictionary_replacement() {
        let registry = Registry::builder(Dictionary::default())
            .dictionary("en", Dictionary::from_static(&[("toc.overview", "Overview")]))
            .dictionary("EN", Dictionary::from_static(&[("toc.overview", "Preface")]))
            .build();

        assert_that!(registry.resolve_dictionary("en").get("toc.overview"), some(eq("Preface")));
        assert_that!(registry.dictionaries().len(), eq(1));
    }

    #[rstest]
    fn test_default_locale_overrides_explicit_dictionary() {
        let registry = Registry::builder(Dictionary::from_static(&[("toc.overview", "前言")]))
            .dictionary("zh", Dictionary::from_static(&[("toc.overview", "other")]))
            .default_locale("zh")
            .build();

        assert!(std::ptr::eq(registry.resolve_dictionary("zh"), registry.default_dictionary()));
        assert_that!(registry.default_locale().map(LocaleCode::as_str), some(eq("zh")));
    }

    #[rstest]
    fn test_default_policy_is_all() {
        let registry = Registry::builder(Dictionary::default()).build();

        assert_that!(registry.list_policy(), eq(LocaleListPolicy::All));
    }

    #[rstest]
    #[case::default_key(None, "missing.translation")]
    #[case::custom_key(Some("notice.untranslated"), "notice.untranslated")]
    fn test_missing_translation_key(#[case] key: Option<&str>, #[case] expected: &str) {
        let mut builder = Registry::builder(Dictionary::default());
        if let Some(key) = key {
            builder = builder.missing_translation_key(key);
        }

        let registry = builder.build();

        assert_that!(registry.missing_translation_key(), eq(expected));
    }
}

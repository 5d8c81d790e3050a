//! Cross-dictionary consistency checks.
//!
//! Every dictionary is expected to carry the default dictionary's key set.
//! These checks report where registered data departs from that, plus gaps
//! between the dictionary table and the display-name table.

use std::fmt;

use crate::registry::Registry;
use crate::types::LocaleCode;

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Metadata gap; lookups still work.
    Warning,
    /// Key drift between dictionaries.
    Error,
}

/// A single finding from [`check_registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// Keys present in the default dictionary but not in this locale's.
    MissingKeys {
        /// Locale being checked
        locale: LocaleCode,
        /// Sorted missing keys
        keys: Vec<String>,
    },
    /// Keys present in this locale's dictionary but not in the default.
    ExtraKeys {
        /// Locale being checked
        locale: LocaleCode,
        /// Sorted unknown keys
        keys: Vec<String>,
    },
    /// Locale offered in the picker without a dictionary of its own.
    MissingDictionary {
        /// Locale offered in the picker
        locale: LocaleCode,
    },
    /// Dictionary registered for a locale that has no display name.
    MissingDisplayName {
        /// Locale with a dictionary
        locale: LocaleCode,
    },
}

impl ConsistencyIssue {
    /// Severity of this kind of issue.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MissingKeys { .. } | Self::ExtraKeys { .. } => Severity::Error,
            Self::MissingDictionary { .. } | Self::MissingDisplayName { .. } => Severity::Warning,
        }
    }

    /// Locale the issue is about.
    #[must_use]
    pub const fn locale(&self) -> &LocaleCode {
        match self {
            Self::MissingKeys { locale, .. }
            | Self::ExtraKeys { locale, .. }
            | Self::MissingDictionary { locale }
            | Self::MissingDisplayName { locale } => locale,
        }
    }
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKeys { locale, keys } => {
                write!(f, "'{locale}' is missing {} key(s): {}", keys.len(), keys.join(", "))
            }
            Self::ExtraKeys { locale, keys } => {
                write!(f, "'{locale}' has {} unknown key(s): {}", keys.len(), keys.join(", "))
            }
            Self::MissingDictionary { locale } => {
                write!(f, "'{locale}' has a display name but no dictionary")
            }
            Self::MissingDisplayName { locale } => {
                write!(f, "'{locale}' has a dictionary but no display name")
            }
        }
    }
}

/// Compares every registered dictionary with the default one and checks the
/// display-name table against the dictionary table.
///
/// Issues are ordered by locale code; key lists are sorted.
#[must_use]
pub fn check_registry(registry: &Registry) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();
    let default_keys = registry.default_dictionary().key_set();

    for (locale, dictionary) in registry.dictionaries() {
        let keys = dictionary.key_set();

        let missing: Vec<String> =
            default_keys.difference(&keys).map(|key| (*key).to_string()).collect();
        if !missing.is_empty() {
            issues.push(ConsistencyIssue::MissingKeys { locale: locale.clone(), keys: missing });
        }

        let extra: Vec<String> =
            keys.difference(&default_keys).map(|key| (*key).to_string()).collect();
        if !extra.is_empty() {
            issues.push(ConsistencyIssue::ExtraKeys { locale: locale.clone(), keys: extra });
        }

        if registry.display_name_of(locale.as_str()).is_none() {
            issues.push(ConsistencyIssue::MissingDisplayName { locale: locale.clone() });
        }
    }

    for locale in registry.locales_without_dictionary() {
        issues.push(ConsistencyIssue::MissingDictionary { locale: locale.clone() });
    }

    issues.sort_by(|a, b| a.locale().cmp(b.locale()));

    for issue in &issues {
        tracing::debug!(severity = ?issue.severity(), "{issue}");
    }

    issues
}

/// True if no issue of `Severity::Error` is found.
#[must_use]
pub fn is_consistent(registry: &Registry) -> bool {
    check_registry(registry).iter().all(|issue| issue.severity() < Severity::Error)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::builtin;
    use crate::dictionary::Dictionary;

    #[rstest]
    fn test_builtin_registry_has_no_key_drift() {
        let registry = builtin::registry();

        assert!(is_consistent(&registry));
    }

    #[rstest]
    fn test_builtin_registry_reports_english_without_dictionary() {
        let issues = check_registry(&builtin::registry());

        assert_eq!(
            issues,
            vec![ConsistencyIssue::MissingDictionary { locale: LocaleCode::new("en") }]
        );
        assert_that!(issues[0].severity(), eq(Severity::Warning));
    }

    #[rstest]
    fn test_key_drift_is_reported() {
        let registry = Registry::builder(Dictionary::from_static(&[
            ("hero.title", "标题"),
            ("pagination.next", "下一个"),
            ("toc.overview", "前言"),
        ]))
        .default_locale("zh")
        .dictionary(
            "en",
            Dictionary::from_static(&[("hero.title", "Title"), ("hero.subtitle", "Subtitle")]),
        )
        .display_name("zh", "简体中文")
        .display_name("en", "English")
        .build();

        let issues = check_registry(&registry);

        assert_eq!(
            issues,
            vec![
                ConsistencyIssue::MissingKeys {
                    locale: LocaleCode::new("en"),
                    keys: vec!["pagination.next".to_string(), "toc.overview".to_string()],
                },
                ConsistencyIssue::ExtraKeys {
                    locale: LocaleCode::new("en"),
                    keys: vec!["hero.subtitle".to_string()],
                },
            ]
        );
        assert!(!is_consistent(&registry));
    }

    #[rstest]
    fn test_dictionary_without_display_name() {
        let registry = Registry::builder(Dictionary::default())
            .dictionary("ja", Dictionary::default())
            .build();

        let issues = check_registry(&registry);

        assert_eq!(
            issues,
            vec![ConsistencyIssue::MissingDisplayName { locale: LocaleCode::new("ja") }]
        );
        assert!(is_consistent(&registry));
    }

    #[rstest]
    fn test_issue_display() {
        let issue = ConsistencyIssue::MissingKeys {
            locale: LocaleCode::new("en"),
            keys: vec!["a".to_string(), "b".to_string()],
        };

        assert_that!(issue.to_string(), eq("'en' is missing 2 key(s): a, b"));
    }
}

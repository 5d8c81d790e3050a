//! Locale data compiled into the crate for the documentation site.

/// Simplified Chinese UI strings
mod zh;

use crate::dictionary::Dictionary;
use crate::registry::Registry;

/// Locale used for the fallback slot.
pub const DEFAULT_LOCALE: &str = "zh";

/// Key whose value tells readers that a section has not been translated yet.
pub const MISSING_TRANSLATION_KEY: &str = "missing.translation";

/// Language picker entries in display order.
///
/// `pt-br` (Português do Brasil) is not offered until its dictionary exists.
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("zh", "简体中文")];

/// Simplified Chinese dictionary.
#[must_use]
pub fn chinese() -> Dictionary {
    Dictionary::from_static(zh::UI)
}

/// Builds the site registry.
///
/// Chinese is registered under `zh` and fills the default slot. English has
/// a display name but no dictionary, so it resolves to Chinese.
#[must_use]
pub fn registry() -> Registry {
    let mut builder = Registry::builder(chinese()).default_locale(DEFAULT_LOCALE);
    for &(code, name) in LANGUAGES {
        builder = builder.display_name(code, name);
    }
    builder.build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_english_falls_back_to_chinese() {
        let registry = registry();

        assert_that!(
            registry.resolve_dictionary("en").get("hero.title"),
            some(eq("使用响应式精度轻松创建 UI"))
        );
        assert!(std::ptr::eq(registry.resolve_dictionary("en"), registry.default_dictionary()));
    }

    #[rstest]
    #[case::chinese("zh", Some("简体中文"))]
    #[case::english("en", Some("English"))]
    #[case::portuguese("pt-br", None)]
    fn test_display_names(#[case] code: &str, #[case] expected: Option<&str>) {
        let registry = registry();

        assert_that!(registry.display_name_of(code), eq(expected));
    }

    #[rstest]
    fn test_dictionary_carries_missing_translation_notice() {
        let dictionary = chinese();

        assert_that!(dictionary.get(MISSING_TRANSLATION_KEY), some(eq("这部分还没有被翻译")));
    }

    #[rstest]
    #[case::hero("hero.button.primary", "开始使用")]
    #[case::nav("main.nav.tab.learn", "学习")]
    #[case::untranslated_nav("main.nav.section.stores", "Stores")]
    #[case::toc("toc.this.page", "目录")]
    #[case::contribute("contribute.edit", "编辑此页面")]
    #[case::pagination("pagination.previous", "上一个")]
    fn test_chinese_entries(#[case] key: &str, #[case] expected: &str) {
        let dictionary = chinese();

        assert_that!(dictionary.get(key), some(eq(expected)));
    }

    #[rstest]
    fn test_no_duplicate_keys_in_table() {
        assert_that!(chinese().len(), eq(zh::UI.len()));
    }

    #[rstest]
    fn test_every_registered_dictionary_matches_default_keys() {
        let registry = registry();
        let default_keys = registry.default_dictionary().key_set();

        for (code, dictionary) in registry.dictionaries() {
            assert_eq!(dictionary.key_set(), default_keys, "key drift in '{code}'");
        }
    }
}

//! Locale registry behavior as seen by a page renderer and a language picker.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use docs_site_i18n::config::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
use docs_site_i18n::consistency::check_registry;
use docs_site_i18n::loader::load_registry;
use docs_site_i18n::{
    Dictionary,
    Lookup,
    Registry,
    SharedRegistry,
    Translator,
    builtin,
};
use googletest::prelude::*;
use rstest::*;
use tempfile::TempDir;

#[rstest]
#[case::registered("zh")]
#[case::display_only("en")]
#[case::commented_out("pt-br")]
#[case::empty("")]
#[case::garbage("\u{0}??//..")]
#[case::long("x-very-long-private-use-tag-that-nobody-registered")]
fn resolve_always_yields_a_dictionary(#[case] code: &str) {
    let registry = builtin::registry();

    let dictionary = registry.resolve_dictionary(code);

    assert!(!dictionary.is_empty());
    assert_that!(dictionary.get("hero.title"), some(eq("使用响应式精度轻松创建 UI")));
}

#[rstest]
fn english_page_renders_chinese_until_translated() {
    let registry = builtin::registry();

    assert!(std::ptr::eq(registry.resolve_dictionary("en"), registry.default_dictionary()));
    assert_that!(
        registry.resolve_dictionary("en").get("hero.title"),
        some(eq("使用响应式精度轻松创建 UI"))
    );
}

#[rstest]
fn language_picker_lists_authored_locales() {
    let registry = builtin::registry();

    let locales: Vec<_> = registry
        .list_locales()
        .into_iter()
        .map(|(code, name)| (code.as_str().to_string(), name.to_string()))
        .collect();

    assert_eq!(
        locales,
        vec![
            ("en".to_string(), "English".to_string()),
            ("zh".to_string(), "简体中文".to_string())
        ]
    );
    assert_that!(registry.display_name_of("zh"), some(eq("简体中文")));
    assert_that!(registry.display_name_of("pt-br"), none());
}

#[rstest]
fn translator_walks_fallback_chain() {
    let registry = Registry::builder(builtin::chinese())
        .default_locale("zh")
        .dictionary("en", Dictionary::from_static(&[("hero.title", "Create UIs")]))
        .display_name("en", "English")
        .display_name("zh", "简体中文")
        .build();
    let translator = Translator::new(&registry, "EN");

    assert_that!(translator.lookup("hero.title"), eq(Lookup::Localized("Create UIs")));
    assert_that!(translator.lookup("pagination.next"), eq(Lookup::Fallback("下一个")));
    assert_that!(translator.lookup("no.such.key"), eq(Lookup::Untranslated("这部分还没有被翻译")));

    let regional = Translator::new(&registry, "en-US");
    assert_that!(regional.lookup("hero.title"), eq(Lookup::Localized("使用响应式精度轻松创建 UI")));
}

#[rstest]
fn workspace_translations_replace_builtin_registry() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        r#"{
            "missingTranslationKey": "notice.untranslated",
            "languages": [
                {"code": "zh", "name": "简体中文"},
                {"code": "en", "name": "English"}
            ]
        }"#,
    )
    .unwrap();
    fs::create_dir_all(temp_dir.path().join("locales")).unwrap();
    fs::write(
        temp_dir.path().join("locales/zh.json"),
        r#"{"hero": {"title": "新标题"}, "notice": {"untranslated": "未翻译"}}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("locales/en.json"),
        r#"{"hero": {"title": "New title"}}"#,
    )
    .unwrap();

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(temp_dir.path())).unwrap();
    let settings = config_manager.get_settings();

    let shared = SharedRegistry::new(builtin::registry());
    let before = shared.snapshot();
    shared.replace(load_registry(temp_dir.path(), settings).unwrap());
    let after = shared.snapshot();

    assert_that!(
        before.resolve_dictionary("en").get("hero.title"),
        some(eq("使用响应式精度轻松创建 UI"))
    );
    assert_that!(after.resolve_dictionary("en").get("hero.title"), some(eq("New title")));

    let translator = Translator::new(&after, "en");
    assert_that!(translator.text("toc.overview"), eq("未翻译"));

    let issues: Vec<_> = check_registry(&after).iter().map(ToString::to_string).collect();
    assert_that!(issues, elements_are![eq("'en' is missing 1 key(s): notice.untranslated")]);
}

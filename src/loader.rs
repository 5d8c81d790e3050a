//! Builds a [`Registry`] from translation files in a workspace.

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;
use thiserror::Error;

use crate::config::{
    ConfigError,
    ConfigManager,
    FileMatcher,
    I18nSettings,
    MatcherError,
};
use crate::dictionary::{
    Dictionary,
    DictionaryError,
};
use crate::registry::Registry;
use crate::types::LocaleCode;

/// File stems that name a UI area rather than a locale (`dictionaries/zh/ui.json`).
const CONTAINER_STEMS: &[&str] = &["ui", "index"];

/// Errors raised while building a registry from workspace files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Matcher(#[from] MatcherError),

    #[error("Failed to read translation file {path:?}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {path:?}: {source}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        #[source]
        source: DictionaryError,
    },

    #[error("Cannot determine the locale of translation file {0:?}")]
    UnknownLocale(PathBuf),

    #[error("Locale '{locale}' is defined by both {first:?} and {second:?}")]
    DuplicateLocale {
        /// Locale both files resolve to
        locale: LocaleCode,
        /// File seen first (in path order)
        first: PathBuf,
        /// File seen second
        second: PathBuf,
    },

    #[error("No translation file found for default locale '{0}'")]
    MissingDefaultLocale(LocaleCode),
}

/// Loads `.site-i18n.json` from `workspace_root` (defaults if absent) and
/// builds the registry it describes.
pub fn load_workspace(workspace_root: &Path) -> Result<Registry, LoadError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(workspace_root))?;
    load_registry(workspace_root, config_manager.get_settings())
}

/// Builds a registry from the translation files matched by `settings`.
///
/// Every matched file must parse and name a distinct locale. The file for
/// `settings.default_locale` fills the fallback slot, and
/// `settings.missing_translation_key` becomes the registry's notice key.
pub fn load_registry(workspace_root: &Path, settings: &I18nSettings) -> Result<Registry, LoadError> {
    tracing::debug!(workspace_root = %workspace_root.display(), "Loading translation files");
    let matcher = FileMatcher::new(workspace_root.to_path_buf(), settings)?;

    let mut dictionaries: BTreeMap<LocaleCode, (PathBuf, Dictionary)> = BTreeMap::new();
    for path in find_translation_files(&matcher) {
        let locale =
            detect_locale_from_path(&path).ok_or_else(|| LoadError::UnknownLocale(path.clone()))?;
        if let Some((first, _)) = dictionaries.get(&locale) {
            return Err(LoadError::DuplicateLocale {
                locale,
                first: first.clone(),
                second: path,
            });
        }

        let dictionary = load_dictionary_file(&path, &settings.key_separator)?;
        tracing::debug!(%locale, path = %path.display(), keys = dictionary.len(), "Loaded dictionary");
        dictionaries.insert(locale, (path, dictionary));
    }

    let default_locale = LocaleCode::new(&settings.default_locale);
    let (_, default_dictionary) = dictionaries
        .remove(&default_locale)
        .ok_or_else(|| LoadError::MissingDefaultLocale(default_locale.clone()))?;

    let mut builder = Registry::builder(default_dictionary)
        .default_locale(default_locale)
        .list_policy(settings.locale_list)
        .missing_translation_key(settings.missing_translation_key.as_str());
    for (locale, (_, dictionary)) in dictionaries {
        builder = builder.dictionary(locale, dictionary);
    }
    for language in &settings.languages {
        builder = builder.display_name(language.code.as_str(), language.name.as_str());
    }

    Ok(builder.build())
}

/// Reads and flattens one translation file.
pub fn load_dictionary_file(path: &Path, separator: &str) -> Result<Dictionary, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;

    Dictionary::from_json_str(&content, separator)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
}

/// Matched translation files, sorted by path.
fn find_translation_files(matcher: &FileMatcher) -> Vec<PathBuf> {
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(matcher.workspace_root())
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if matcher.is_translation_file(entry.path()) {
            found_files.push(entry.into_path());
        }
    }

    found_files.sort();
    found_files
}

/// Detect locale from file path
///
/// # Examples
/// - `locales/zh.json` → `zh`
/// - `locales/pt_BR.json` → `pt-br`
/// - `dictionaries/zh/ui.json` → `zh`
fn detect_locale_from_path(path: &Path) -> Option<LocaleCode> {
    let stem = path.file_stem()?.to_str()?;
    let name = if CONTAINER_STEMS.contains(&stem.to_ascii_lowercase().as_str()) {
        path.parent()?.file_name()?.to_str()?
    } else {
        stem
    };

    let code = LocaleCode::new(name);
    if code.is_empty() { None } else { Some(code) }
}

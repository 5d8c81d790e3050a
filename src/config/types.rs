use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::builtin;
use crate::registry::LocaleListPolicy;
use crate::types::LocaleCode;

/// Name of the configuration file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".site-i18n.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languages[0].code")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub translation_files: TranslationFilesConfig,

    /// Joins nested object keys when flattening translation files.
    pub key_separator: String,

    /// Locale whose dictionary fills the fallback slot.
    pub default_locale: String,

    /// Key holding the "not translated yet" notice.
    pub missing_translation_key: String,

    /// Whether locales without a dictionary are offered in the picker.
    pub locale_list: LocaleListPolicy,

    /// Picker entries in display order.
    pub languages: Vec<LanguageConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Duplicate language code
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if LocaleCode::new(&self.default_locale).is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The default locale cannot be empty. Example: \"zh\"",
            ));
        }

        if self.missing_translation_key.is_empty() {
            errors.push(ValidationError::new(
                "missingTranslationKey",
                "The key cannot be empty. Example: \"missing.translation\"",
            ));
        }

        if self.translation_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/locales/*.json\"]",
            ));
        }

        for (index, pattern) in self.translation_files.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("translationFiles.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.translation_files.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("translationFiles.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        let mut seen: Vec<LocaleCode> = Vec::with_capacity(self.languages.len());
        for (index, language) in self.languages.iter().enumerate() {
            let code = LocaleCode::new(&language.code);
            if code.is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}].code"),
                    "The locale code cannot be empty",
                ));
            } else if seen.contains(&code) {
                errors.push(ValidationError::new(
                    format!("languages[{index}].code"),
                    format!("Duplicate locale code '{code}'"),
                ));
            }
            if language.name.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}].name"),
                    "The display name cannot be empty",
                ));
            }
            seen.push(code);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec![
                "**/locales/*.json".to_string(),
                "**/dictionaries/*/ui.json".to_string(),
            ],
            exclude_patterns: vec!["**/node_modules/**".to_string()],
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            translation_files: TranslationFilesConfig::default(),
            key_separator: ".".to_string(),
            default_locale: builtin::DEFAULT_LOCALE.to_string(),
            missing_translation_key: builtin::MISSING_TRANSLATION_KEY.to_string(),
            locale_list: LocaleListPolicy::default(),
            languages: builtin::LANGUAGES
                .iter()
                .map(|&(code, name)| LanguageConfig { code: code.to_string(), name: name.to_string() })
                .collect(),
        }
    }
}

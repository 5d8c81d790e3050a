//! docs-site-i18n
//!
//! UI string dictionaries and the locale registry for a documentation site.

pub mod builtin;
pub mod config;
pub mod consistency;
pub mod dictionary;
pub mod loader;
pub mod registry;
pub mod translate;
pub mod types;

mod test_utils;

pub use dictionary::Dictionary;
pub use registry::{
    LocaleListPolicy,
    Registry,
    SharedRegistry,
};
pub use translate::{
    Lookup,
    Translator,
};
pub use types::{
    LocaleCode,
    TranslationKey,
};

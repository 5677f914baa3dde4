// Token Updater: JSON catalog translator
//
// Catalogs are nested JSON objects, flattened into dotted keys:
//   { "token_updater": { "title": "..." } }  ->  "token_updater.title"
// Built-in catalogs are compiled in; a locales directory can override them.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use super::{format_message, FallbackMessages, I18nError, MessageSource};

pub const DEFAULT_LOCALE: &str = "en";

const BUILTIN_CATALOGS: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("zh_cn", include_str!("../../locales/zh_cn.json")),
];

/// Message catalog for one locale, backed by `FallbackMessages` for any
/// key the catalog does not define.
#[derive(Debug)]
pub struct Translator {
    locale: String,
    messages: HashMap<String, String>,
    fallback: FallbackMessages,
}

impl Translator {
    /// Load the catalog for `locale`, preferring `<locales_dir>/<locale>.json`
    /// over the built-in catalogs. Unknown locales fall back to English.
    pub fn new(locale: &str, locales_dir: Option<&Path>) -> Result<Self, I18nError> {
        let locale = normalize_locale(locale);

        if let Some(dir) = locales_dir {
            let path = dir.join(format!("{}.json", locale));
            if path.is_file() {
                let text = std::fs::read_to_string(&path).map_err(|source| I18nError::Read {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(locale = %locale, path = %path.display(), "Loaded locale file");
                return Self::from_json(&locale, &text);
            }
            tracing::warn!(
                locale = %locale,
                dir = %dir.display(),
                "Locale file not found, using built-in catalog"
            );
        }

        Self::builtin(&locale)
    }

    /// Load a compiled-in catalog. Unknown locales fall back to English.
    pub fn builtin(locale: &str) -> Result<Self, I18nError> {
        let locale = normalize_locale(locale);

        match BUILTIN_CATALOGS.iter().find(|(name, _)| *name == locale) {
            Some((name, text)) => Self::from_json(name, text),
            None => {
                tracing::warn!(locale = %locale, "Unsupported locale, falling back to '{}'", DEFAULT_LOCALE);
                Self::from_json(DEFAULT_LOCALE, BUILTIN_CATALOGS[0].1)
            }
        }
    }

    /// Build a translator from catalog JSON text.
    pub fn from_json(locale: &str, text: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(text).map_err(|source| I18nError::Parse {
            locale: locale.to_string(),
            source,
        })?;

        if !value.is_object() {
            return Err(I18nError::NotAnObject(locale.to_string()));
        }

        let mut messages = HashMap::new();
        flatten("", &value, &mut messages);

        Ok(Self {
            locale: locale.to_string(),
            messages,
            fallback: FallbackMessages,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Locales with a compiled-in catalog.
    pub fn builtin_locales() -> impl Iterator<Item = &'static str> {
        BUILTIN_CATALOGS.iter().map(|(name, _)| *name)
    }
}

impl MessageSource for Translator {
    fn get(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.messages.get(key) {
            Some(template) => format_message(template, args),
            None => {
                tracing::debug!(locale = %self.locale, key = %key, "Missing translation, using fallback");
                self.fallback.get(key, args)
            }
        }
    }
}

/// `zh-CN` and `zh_CN` both select the `zh_cn` catalog.
fn normalize_locale(locale: &str) -> String {
    locale.trim().to_lowercase().replace('-', "_")
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        // Numbers and booleans are kept as their JSON text; arrays and nulls are not messages.
        Value::Number(_) | Value::Bool(_) => {
            out.insert(prefix.to_string(), value.to_string());
        }
        Value::Array(_) | Value::Null => {}
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

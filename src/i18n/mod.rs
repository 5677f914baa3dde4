// Token Updater: Message translation
//
// User-facing text is looked up by key through a `MessageSource`. The
// translator is built once at startup and only read afterwards.

mod error;
mod fallback;
mod translator;

pub use error::I18nError;
pub use fallback::FallbackMessages;
pub use translator::{Translator, DEFAULT_LOCALE};

/// Key to formatted-string lookup used for every user-facing message.
pub trait MessageSource {
    /// Look up `key` and substitute `{name}` placeholders from `args`.
    fn get(&self, key: &str, args: &[(&str, &str)]) -> String;
}

/// Replace each `{name}` in `template` with its value from `args`.
pub(crate) fn format_message(template: &str, args: &[(&str, &str)]) -> String {
    let mut message = template.to_string();
    for (name, value) in args {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}

//! Localized UI strings for `coachcal-ui`.
//!
//! Fluent bundles live in `i18n/<locale>/coachcal-ui.ftl` (en-US is the
//! fallback) and are embedded with `rust-embed`. Components call
//! [`init`] once and look messages up through the [`t!`](crate::t) macro,
//! which routes `fl!` through the shared [`LOADER`]:
//!
//! ```ignore
//! let title = t!("chart-default-title");
//! let error = t!("chart-error", reason = err.to_string());
//! ```
//!
//! The navbar switches languages at runtime with [`set_language`].

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message in the shared loader, optionally with named arguments.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the FTL file stem in every locale folder.
const DOMAIN: &str = "coachcal-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles matching the user's requested languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        // Bidi isolation marks would end up inside SVG axis and tooltip text.
        LOADER.set_use_isolating(false);
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
        debug!(language = %current_language(), "localization ready");
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        warn!(tag, "ignoring malformed language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language the loader currently resolves messages in, e.g. `fr-FR`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale folders, sorted, for the language picker.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_embedded() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
    }

    #[test]
    fn chart_error_carries_its_reason_without_isolation_marks() {
        init();
        let s = t!("chart-error", reason = "bad input");
        assert!(s.contains("bad input"));
        assert!(!s.contains('\u{2068}') && !s.contains('\u{2069}'));
    }

    // The only test that changes the global language.
    #[test]
    fn switching_languages_changes_lookups() {
        init();
        set_language("fr-FR").unwrap();
        assert_eq!(current_language(), "fr-FR");
        assert_eq!(t!("nav-home"), "Accueil");

        set_language("es-ES").unwrap();
        assert_eq!(t!("chart-period-monthly"), "Mensual");

        set_language("not a tag!!").unwrap();
        assert_eq!(current_language(), "es-ES");

        set_language(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(t!("nav-home"), "Home");
        assert_eq!(t!("unit-steps"), "steps");
    }
}

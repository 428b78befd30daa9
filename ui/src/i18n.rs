//! Localization for `academia-ui`.
//!
//! Fluent bundles live under `i18n/<lang>/academia_ui.ftl` and are embedded at
//! compile time. `en-US` is the fallback and the reference for key
//! completeness; `pt-BR` carries the gym's own labels.
//!
//! ```ignore
//! use crate::t;
//! crate::i18n::init();
//! let title = t!("app-title");
//! let rate = t!("binomial-rate", rate = "66.67%");
//! ```
use std::sync::Once;

use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Lookup through the shared loader.
///
/// ```ignore
/// t!("app-title")
/// t!("unit-kcal", value = "588")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// The package name with `-` mapped to `_`, as `fl!` resolves it; also the `.ftl` file stem.
const DOMAIN: &str = "academia_ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

/// Preferred when the OS asks for nothing we ship.
const HOUSE_LANGUAGE: LanguageIdentifier = langid!("pt-BR");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("unsupported language tag {0:?}")]
    Unsupported(String),
    #[error(transparent)]
    Embed(#[from] I18nEmbedError),
}

static INIT: Once = Once::new();

/// Load bundles for the OS language preference (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select(&requested) {
            Ok(selected) => info!(?selected, "localization ready"),
            Err(err) => warn!(%err, "language selection failed; using fallback"),
        }
    });
}

/// Switch to one of the embedded languages. Unknown tags leave the current
/// selection untouched.
pub fn set_language(tag: &str) -> Result<(), LanguageError> {
    init();
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LanguageError::Unsupported(tag.to_string()))?;
    if !available_languages().contains(&lang.to_string()) {
        return Err(LanguageError::Unsupported(tag.to_string()));
    }
    select(&[lang])?;
    Ok(())
}

/// Every `select` rebuilds the bundles, which resets bidi isolation; values are
/// interpolated into plain UI text, so it is switched off after each load.
fn select(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(selected)
}

pub fn current_language() -> String {
    init();
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn requested_languages() -> Vec<LanguageIdentifier> {
    let mut requested = i18n_embed::DesktopLanguageRequester::requested_languages();
    requested.push(HOUSE_LANGUAGE);
    requested
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // The loader is global; tests that switch languages take turns.
    static SWITCHING: Mutex<()> = Mutex::new(());

    fn exclusive() -> MutexGuard<'static, ()> {
        SWITCHING.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn both_bundles_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "pt-BR"]);
    }

    #[test]
    fn interpolated_values_carry_no_isolation_marks() {
        let _guard = exclusive();
        for tag in ["pt-BR", "en-US"] {
            set_language(tag).unwrap();
            let text = fl!(&*LOADER, "binomial-rate", rate = "66.67%");
            assert!(text.ends_with(": 66.67%"), "{tag}: {text:?}");
            assert!(!text.contains(['\u{2068}', '\u{2069}']), "{tag}: {text:?}");
        }
    }

    #[test]
    fn switching_changes_lookups_and_rejects_unknown_tags() {
        let _guard = exclusive();
        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "summary-total-wins"), "Total sparring wins");
        assert_eq!(fl!(&*LOADER, "unit-kcal", value = "588"), "588 kcal");

        set_language("pt-BR").unwrap();
        assert_eq!(current_language(), "pt-BR");
        assert_eq!(fl!(&*LOADER, "summary-total-wins"), "Total de Vitórias em Sparring");

        assert!(matches!(
            set_language("zz-ZZ"),
            Err(LanguageError::Unsupported(_))
        ));
        assert_eq!(current_language(), "pt-BR");
    }
}

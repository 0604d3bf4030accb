//! Localization for the dashboard.
//!
//! `i18n-embed` picks the language and loads the bundles, `rust-embed`
//! compiles the `.ftl` files into the binary, and `i18n-embed-fl` checks
//! literal keys at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/whatif-ui.ftl   (fallback, reference for every other locale)
//!   it-IT/whatif-ui.ftl
//! ```
//!
//! Call [`init`] once at startup (it is idempotent), then look strings up
//! with `t!("nav-home")`. Keys only known at runtime, such as chart titles
//! carried in data, go through [`tr`].
//!
//! Desktop builds ask the OS for the preferred languages, web builds read
//! `navigator.languages`. On wasm the bundles are always embedded, even in
//! debug builds.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Translate a literal key through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// t!("upload-analyzed-at", time = "10:42 UTC")
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

/// Fallback file path must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "whatif-ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

static INIT: Once = Once::new();

/// Load the bundles for the platform's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "languages selected"),
            Err(err) => warn!(error = %err, "failed selecting languages, using fallback"),
        }
    });
}

/// Look up a key chosen at runtime. Unknown keys come back as the key itself.
pub fn tr(key: &str) -> String {
    init();
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        warn!(key, "missing translation");
        key.to_string()
    }
}

/// Switch language at runtime. Tags that do not parse are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted, for the picker.
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

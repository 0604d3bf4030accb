use dioxus::prelude::*;
use tracing::trace;

use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code so the page re-renders on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());
    trace!(%lang, "home render");

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-tagline-short")} }
            p { {t!("home-intro")} }

            ul { class: "page-home__features",
                li { {t!("home-feature-bottlenecks")} }
                li { {t!("home-feature-resources")} }
                li { {t!("home-feature-costs")} }
            }
            p { class: "page-home__cta",
                {t!("home-cta")}
            }
        }
    }
}

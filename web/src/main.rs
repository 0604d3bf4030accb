use dioxus::prelude::*;
use tracing::{info, Level};

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Analysis, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/analysis")]
    Analysis {},
}

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_analysis(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analysis {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting web dashboard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        analysis: nav_analysis,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "What-if Analysis" }
        document::Style { "{THEME_CSS}" }

        // Remount the routed tree when the language changes.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web router layout around the shared navbar.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

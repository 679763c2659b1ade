use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::settings::ChartSettings;
use ui::views::{Analytics, Home, StepCounter};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
    #[route("/steps")]
    StepCounter {},
    #[route("/analytics")]
    Analytics {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Home {}, "{label}" })
}
fn nav_step_counter(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::StepCounter {}, "{label}" })
}
fn nav_analytics(label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Analytics {}, "{label}" })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already installed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(ChartSettings::default);

    register_nav(NavBuilder {
        home: nav_home,
        step_counter: nav_step_counter,
        analytics: nav_analytics,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

/// Mobile router layout: shared navbar above the routed screen.
#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

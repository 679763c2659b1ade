use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

// Navbar stylesheet (inlined in release native builds as well)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Screens the shared UI can link to. Each platform maps these onto its own
/// `Route` enum through a registered [`NavBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    StepCounter,
    Analytics,
}

/// Link factories supplied by the platform crate, so `ui` never needs to
/// know each platform's `Route` type.
///
/// Each function receives the localized label and a CSS class and must return
/// a `Link` (or anything styled like one) containing exactly that label.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label, class| rsx!( Link { class, to: Route::Home {}, "{label}" } ),
///         step_counter: |label, class| rsx!( Link { class, to: Route::StepCounter {}, "{label}" } ),
///         analytics: |label, class| rsx!( Link { class, to: Route::Analytics {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a registered builder, [`screen_link`] degrades to plain text and
/// `AppNavbar` renders whatever children it was given.
pub struct NavBuilder {
    pub home: fn(label: &str, class: &str) -> Element,
    pub step_counter: fn(label: &str, class: &str) -> Element,
    pub analytics: fn(label: &str, class: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Navigate-to-screen capability for shared views.
pub fn screen_link(screen: Screen, label: &str, class: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => {
            let build = match screen {
                Screen::Home => builder.home,
                Screen::StepCounter => builder.step_counter,
                Screen::Analytics => builder.analytics,
            };
            build(label, class)
        }
        None => rsx! {
            span { class: "{class}", "{label}" }
        },
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    debug!(lang = %_lang_marker, "AppNavbar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav = NAV_BUILDER.get().is_some().then(|| {
        rsx! {
            nav { class: "navbar__links",
                {screen_link(Screen::Home, &t!("nav-home"), "navbar__link")}
                {screen_link(Screen::StepCounter, &t!("nav-steps"), "navbar__link")}
                {screen_link(Screen::Analytics, &t!("nav-analytics"), "navbar__link")}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {screen_link(Screen::Home, "CoachCal", "navbar__brand-link")}
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

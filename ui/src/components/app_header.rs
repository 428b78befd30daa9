use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Brand bar with the locale switcher.
///
/// The host may provide a `Signal<String>` context holding the active language
/// code; switching languages writes to it so keyed subtrees remount with fresh
/// strings. Without that context only the header itself re-renders.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let code = evt.value();
        match i18n::set_language(&code) {
            Ok(()) => {
                debug!(lang = %code, "language switched");
                current_lang.set(code.clone());
                if let Some(mut ctx) = lang_code_ctx {
                    ctx.set(code);
                }
            }
            Err(err) => warn!(lang = %code, %err, "language switch failed"),
        }
    };

    rsx! {
        header { id: "app-header", class: "app-header",
            div { style: "display:none", "{lang_marker}" }
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__mark", aria_hidden: "true", "🥊" }
                    span { class: "app-header__title", {t!("app-title")} }
                    span { class: "app-header__subtitle", {t!("app-tagline")} }
                }
                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::Path;

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::logger::tracing::{error, info, Level};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::config::DATA_FILE;
use ui::dataset;
use ui::views::Dashboard;

const WINDOW_TITLE: &str = "Painel da Academia de Boxe";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Load the dataset into the shared cache before any window opens. A missing
/// or malformed file ends the process.
fn preload() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    match dataset::shared(Path::new(DATA_FILE)) {
        Ok(data) => info!(rows = data.len(), file = DATA_FILE, "dashboard data ready"),
        Err(err) => {
            error!(%err, file = DATA_FILE, "cannot start without the dataset");
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "desktop")]
fn main() {
    preload();
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(LogicalSize::new(1280.0, 900.0)),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    preload();
    LaunchBuilder::new().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Switching language rewrites this signal; the keyed wrapper remounts the page.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Already cached by `preload`; a changed file on disk is reloaded once.
    let data = use_hook(|| dataset::shared(Path::new(DATA_FILE)));
    let page = match data {
        Ok(dataset) => rsx! { Dashboard { dataset } },
        Err(err) => rsx! {
            p { class: "fatal", role: "alert", "{err}" }
        },
    };

    rsx! {
        document::Title { "{WINDOW_TITLE}" }
        document::Style { "{MAIN_CSS_INLINE}" }

        AppHeader {}
        div {
            key: "{lang_code()}",
            class: "app-main",
            {page}
        }
    }
}

use dioxus::prelude::*;
use shared_types::{AppConfig, MockDataProvider, NoopAttendanceStore, ShellState};

mod context;
mod format_helpers;
mod icons;
mod shell;
mod tones;
mod views;

use context::{DataSource, StoreHandle};
use shell::Shell;

const CONFIG_TOML: &str = include_str!("../config.toml");

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    // The subscriber has to exist before the fallback warning is emitted,
    // so the level is read ahead of the full load.
    let level = AppConfig::from_toml_str(CONFIG_TOML)
        .map(|config| config.logging)
        .unwrap_or_default()
        .tracing_level();
    if dioxus::logger::init(level).is_err() {
        tracing::debug!("logger already initialised");
    }

    let config = AppConfig::from_toml_or_default(CONFIG_TOML);
    tracing::info!(
        role = config.session.user().role.as_str(),
        brand = %config.ui.brand,
        "starting portal"
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();

    let initial_drawer = config.ui.drawer_open;
    let session = config.session.user();
    use_context_provider(|| Signal::new(ShellState::new(session).with_drawer_open(initial_drawer)));
    use_context_provider(|| DataSource::new(MockDataProvider));
    use_context_provider(|| StoreHandle::new(NoopAttendanceStore));
    use_context_provider(|| config.ui.clone());

    rsx! {
        shared_ui::KitStyles {}
        document::Link { rel: "stylesheet", href: APP_CSS }
        shared_ui::ToastProvider {
            Shell {}
        }
    }
}

use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod models;
mod services;

use components::{HomeScreen, NavigationBar, NewEventScreen};
use config::AppConfig;
use services::upload_service::tracker_from_settings;
use services::{EventFeed, LocalLedger, NearRpcReader};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Account used for the local ledger when no wallet session exists
const GUEST_ACCOUNT: &str = "guest";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    dioxus::launch(App);
}

#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    NewEvent,
}

#[component]
fn App() -> Element {
    let config = use_context_provider(AppConfig::load);

    let ledger = use_context_provider(|| {
        LocalLedger::new(config.organizer().unwrap_or(GUEST_ACCOUNT))
    });
    use_context_provider(|| match &config.contract.rpc_url {
        Some(rpc_url) => {
            log::info!("Reading events from {} via {}", config.contract.account_id, rpc_url);
            EventFeed::Rpc(NearRpcReader::new(
                rpc_url.clone(),
                config.contract.account_id.clone(),
            ))
        }
        None => EventFeed::Local(ledger.clone()),
    });
    use_context_provider(|| tracker_from_settings(&config.ipfs));

    let mut current_screen = use_signal(|| Screen::Home);
    let mut notice = use_signal(|| None::<String>);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "app",
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }

            main { class: "content",
                match current_screen() {
                    Screen::Home => rsx! {
                        HomeScreen {
                            notice: notice(),
                            on_dismiss: move |_| notice.set(None),
                        }
                    },
                    Screen::NewEvent => rsx! {
                        NewEventScreen {
                            on_created: move |event: models::Event| {
                                notice.set(Some(format!("Event \"{}\" created", event.name)));
                                current_screen.set(Screen::Home);
                            },
                        }
                    },
                }
            }
        }
    }
}

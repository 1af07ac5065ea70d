use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let tab_class = |screen: Screen| {
        if current_screen == screen {
            "nav-tab active"
        } else {
            "nav-tab"
        }
    };

    rsx! {
        nav { class: "nav-bar",
            span { class: "nav-brand", "Future Tickets" }

            button {
                class: tab_class(Screen::Home),
                onclick: move |_| on_navigate.call(Screen::Home),
                "Home"
            }

            button {
                class: tab_class(Screen::NewEvent),
                onclick: move |_| on_navigate.call(Screen::NewEvent),
                "Create Event"
            }
        }
    }
}

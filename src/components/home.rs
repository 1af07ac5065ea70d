use crate::components::{EventCard, FeaturedCarousel};
use crate::services::{EventFeed, EventReader};
use dioxus::prelude::*;

#[component]
pub fn HomeScreen(notice: Option<String>, on_dismiss: EventHandler<()>) -> Element {
    let feed = use_context::<EventFeed>();

    let events = use_resource(move || {
        let feed = feed.clone();
        async move { feed.get_events(None, None).await }
    });

    rsx! {
        div { class: "home",
            if let Some(notice) = notice {
                div { class: "notice",
                    span { "{notice}" }
                    button { onclick: move |_| on_dismiss.call(()), "✕" }
                }
            }

            FeaturedCarousel {}

            h2 { class: "section-title", "Upcoming Events" }
            match &*events.read() {
                None => rsx! {
                    p { class: "hint", "Loading events..." }
                },
                Some(Err(e)) => rsx! {
                    div { class: "error-message", "Could not load events: {e}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "hint", "No events yet." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "event-grid",
                        for event in list.iter().cloned() {
                            EventCard { key: "{event.index}", event }
                        }
                    }
                },
            }
        }
    }
}

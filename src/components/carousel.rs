use crate::config::AppConfig;
use crate::models::FeaturedEvent;
use crate::services::{run_rotation, CarouselController, CarouselPhase, EventFeed, EventReader};
use dioxus::prelude::*;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Rotating highlight of upcoming events
///
/// The rotation timer is armed once on mount and cancelled on unmount.
#[component]
pub fn FeaturedCarousel() -> Element {
    let feed = use_context::<EventFeed>();
    let config = use_context::<AppConfig>();
    let mut carousel = use_signal(CarouselController::<FeaturedEvent>::new);

    // Load featured events on mount
    use_effect(move || {
        let feed = feed.clone();
        spawn(async move {
            match feed.get_events(None, None).await {
                Ok(events) => {
                    let featured: Vec<FeaturedEvent> =
                        events.iter().map(FeaturedEvent::from).collect();
                    log::info!("Carousel loaded {} featured events", featured.len());
                    carousel.write().load(featured);
                }
                Err(e) => log::error!("Failed to load featured events: {}", e),
            }
        });
    });

    let cancel = use_hook(CancellationToken::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });
    use_hook(move || {
        let period = Duration::from_secs(config.carousel.interval_secs);
        spawn(run_rotation(period, cancel.clone(), move || {
            carousel.write().tick()
        }));
    });

    let (current, phase, position, count) = {
        let state = carousel.read();
        (state.current().cloned(), state.phase(), state.index() + 1, state.len())
    };

    let name = current
        .as_ref()
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "Event Title".to_string());
    let description = current
        .as_ref()
        .map(|e| e.description.clone())
        .unwrap_or_else(|| "Event Description".to_string());
    let banner = current
        .as_ref()
        .map(|e| e.banner.clone())
        .unwrap_or_else(|| "./banner1.png".to_string());
    let slide_class = match phase {
        CarouselPhase::Animating(_) => "carousel-slide fade-anim",
        CarouselPhase::Idle | CarouselPhase::Showing(_) => "carousel-slide",
    };

    rsx! {
        div {
            class: "{slide_class}",
            onanimationend: move |_| carousel.write().animation_finished(),

            div { class: "carousel-content",
                div { class: "carousel-text",
                    h2 { class: "carousel-title", "{name}" }
                    h2 { class: "carousel-description", "{description}" }
                }
                div { class: "carousel-banner",
                    img { src: "{banner}", alt: "" }
                }
            }

            if count > 1 {
                div { class: "carousel-controls",
                    span { class: "hint", "{position} / {count}" }
                    button { onclick: move |_| carousel.write().prev(), "‹ Previous" }
                    button { onclick: move |_| carousel.write().next(), "Next ›" }
                }
            }
        }
    }
}

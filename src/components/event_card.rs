use crate::models::Event;
use crate::services::unit_converter::format_base_units;
use chrono::NaiveDate;
use dioxus::prelude::*;

/// Month abbreviation and day of month, e.g. ("APR", "17")
fn calendar_badge(date: &str) -> (String, String) {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => (d.format("%b").to_string().to_uppercase(), d.format("%d").to_string()),
        Err(_) => ("---".to_string(), "--".to_string()),
    }
}

/// Cheapest ticket price of the event, formatted in NEAR
fn lowest_price(event: &Event) -> Option<String> {
    event
        .tickets
        .iter()
        .filter_map(|t| t.price)
        .min()
        .map(format_base_units)
}

#[component]
pub fn EventCard(event: Event) -> Element {
    let (month, day) = calendar_badge(&event.date);
    let price = lowest_price(&event);

    rsx! {
        div { class: "event-card",
            img { class: "event-card-banner", src: "{event.banner}", alt: "{event.name}" }
            div { class: "event-card-body",
                div { class: "event-card-date",
                    h2 { class: "event-card-month", "{month}" }
                    h2 { class: "event-card-day", "{day}" }
                }
                div {
                    h2 { class: "event-card-name", "{event.name}" }
                    h2 { class: "event-card-description", "{event.description}" }
                    if let Some(price) = price {
                        p { class: "event-card-price", "from {price} NEAR" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseUnits, TicketMetadata, TicketSeries};

    fn series(price: Option<u128>) -> TicketSeries {
        TicketSeries {
            token_series_id: "1".to_string(),
            metadata: TicketMetadata::default(),
            creator_id: "alice.testnet".to_string(),
            is_mintable: true,
            price: price.map(BaseUnits),
        }
    }

    #[test]
    fn test_calendar_badge() {
        assert_eq!(
            calendar_badge("2026-04-17"),
            ("APR".to_string(), "17".to_string())
        );
        assert_eq!(calendar_badge("soon"), ("---".to_string(), "--".to_string()));
    }

    #[test]
    fn test_lowest_price() {
        let event = Event {
            name: "Concert".to_string(),
            description: String::new(),
            modality: 0,
            capacity: 0,
            date: "2026-04-17".to_string(),
            time: "20:00".to_string(),
            status: 1,
            index: 1,
            banner: String::new(),
            organizer: "alice.testnet".to_string(),
            ticket_type: Vec::new(),
            tickets: vec![
                series(Some(2_000_000_000_000_000_000_000_000)),
                series(None),
                series(Some(500_000_000_000_000_000_000_000)),
            ],
            location: String::new(),
        };
        assert_eq!(lowest_price(&event), Some("0.5".to_string()));
    }
}

use crate::models::BaseUnits;
use serde::{Deserialize, Serialize};

/// Event as stored by the ticket contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub name: String,
    pub description: String,
    pub modality: u8,
    /// Sum of all tier capacities
    pub capacity: u32,
    pub date: String,
    pub time: String,
    pub status: u8,
    pub index: u64,
    pub banner: String,
    pub organizer: String,
    pub ticket_type: Vec<String>,
    #[serde(default)]
    pub tickets: Vec<TicketSeries>,
    #[serde(default)]
    pub location: String,
}

/// One mintable ticket series, created per tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketSeries {
    pub token_series_id: String,
    pub metadata: TicketMetadata,
    pub creator_id: String,
    pub is_mintable: bool,
    pub price: Option<BaseUnits>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TicketMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub copies: Option<u64>,
    pub extra: Option<String>,
}

/// Summary shown by the featured-events carousel
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedEvent {
    pub name: String,
    pub description: String,
    pub banner: String,
}

impl From<&Event> for FeaturedEvent {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            banner: event.banner.clone(),
        }
    }
}

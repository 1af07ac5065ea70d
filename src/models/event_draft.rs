use crate::models::BaseUnits;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Banner shown until an upload succeeds
pub const BANNER_PLACEHOLDER: &str = "/banner_placeholder.jpg";

/// Status assigned to newly created events
pub const DEFAULT_EVENT_STATUS: u8 = 1;

/// Whether an event takes place at a physical location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    /// Unspecified or non-physical
    #[default]
    Unspecified,
    Physical,
}

impl Modality {
    pub fn as_u8(&self) -> u8 {
        match self {
            Modality::Unspecified => 0,
            Modality::Physical => 1,
        }
    }

    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => Modality::Physical,
            _ => Modality::Unspecified,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Modality::Unspecified => "Online",
            Modality::Physical => "Physical",
        }
    }

    pub fn requires_location(&self) -> bool {
        matches!(self, Modality::Physical)
    }
}

/// One purchasable ticket category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketTier {
    pub capacity: u32,
    pub ticket_type: String,
    pub price: BaseUnits,
}

/// Lengths of the three raw ticket lists at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierListLengths {
    pub capacities: usize,
    pub types: usize,
    pub prices: usize,
}

impl TierListLengths {
    pub fn in_lockstep(&self) -> bool {
        self.capacities == self.types && self.types == self.prices
    }
}

/// Versioned metadata attached to every event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtraMetadata {
    pub version: u32,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl Default for ExtraMetadata {
    fn default() -> Self {
        Self {
            version: 1,
            verified: false,
            fields: BTreeMap::new(),
        }
    }
}

impl ExtraMetadata {
    pub fn to_json(&self) -> String {
        // Only strings, bools and integers: serialization cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Immutable snapshot of an event form, ready for validation and submission
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub organizer: String,
    pub name: String,
    pub description: String,
    pub banner: String,
    pub date: String,
    pub time: String,
    pub status: u8,
    pub modality: Modality,
    pub location: String,
    pub ticket_tiers: Vec<TicketTier>,
    pub tier_lengths: TierListLengths,
    pub ticket_banners: Vec<String>,
    pub extra: ExtraMetadata,
}

/// Argument object of the contract's `create_event` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateEventArgs {
    pub name: String,
    pub description: String,
    pub modality: u8,
    pub capacity: Vec<u32>,
    pub date: String,
    pub time: String,
    pub status: u8,
    pub banner: String,
    pub ticket_type: Vec<String>,
    pub ticket_banners: Vec<String>,
    pub price: Vec<BaseUnits>,
    pub location: String,
    pub extra: String,
}

impl From<&EventDraft> for CreateEventArgs {
    fn from(draft: &EventDraft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone(),
            modality: draft.modality.as_u8(),
            capacity: draft.ticket_tiers.iter().map(|t| t.capacity).collect(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            status: draft.status,
            banner: draft.banner.clone(),
            ticket_type: draft
                .ticket_tiers
                .iter()
                .map(|t| t.ticket_type.clone())
                .collect(),
            ticket_banners: draft.ticket_banners.clone(),
            price: draft.ticket_tiers.iter().map(|t| t.price).collect(),
            location: if draft.modality.requires_location() {
                draft.location.clone()
            } else {
                String::new()
            },
            extra: draft.extra.to_json(),
        }
    }
}

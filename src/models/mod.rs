pub mod base_units;
pub mod event;
pub mod event_draft;

pub use base_units::BaseUnits;
pub use event::{Event, FeaturedEvent, TicketMetadata, TicketSeries};
pub use event_draft::{
    CreateEventArgs, EventDraft, ExtraMetadata, Modality, TicketTier, TierListLengths,
    BANNER_PLACEHOLDER, DEFAULT_EVENT_STATUS,
};

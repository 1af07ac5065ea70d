pub mod carousel;
pub mod contract_service;
pub mod delimited_parser;
pub mod draft_builder;
pub mod ticket_tiers;
pub mod unit_converter;
pub mod upload_service;

pub use carousel::{run_rotation, CarouselController, CarouselPhase};
pub use contract_service::{EventFeed, EventReader, EventWriter, LocalLedger, NearRpcReader};
pub use draft_builder::EventDraftBuilder;
pub use ticket_tiers::TicketTierSynchronizer;

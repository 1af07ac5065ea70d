use crate::error::{AppError, ConversionError, ValidationError};
use crate::models::{
    CreateEventArgs, Event, EventDraft, ExtraMetadata, Modality, BANNER_PLACEHOLDER,
    DEFAULT_EVENT_STATUS,
};
use crate::services::contract_service::EventWriter;
use crate::services::ticket_tiers::TicketTierSynchronizer;
use chrono::{NaiveDate, NaiveTime};
use ipfs_upload::UploadState;

/// Gas attached to every `create_event` call, independent of tier count
pub const SUBMIT_GAS: &str = "300000000000000";
/// Deposit attached to every `create_event` call, independent of tier count
pub const SUBMIT_DEPOSIT: &str = "465000000000000000000000";

/// Single-value fields of the new-event form
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraftBuilder {
    pub organizer: String,
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub status: u8,
    pub modality: Modality,
    pub location: String,
    pub extra: ExtraMetadata,
}

impl EventDraftBuilder {
    pub fn new(organizer: impl Into<String>) -> Self {
        Self {
            organizer: organizer.into(),
            name: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            status: DEFAULT_EVENT_STATUS,
            modality: Modality::default(),
            location: String::new(),
            extra: ExtraMetadata::default(),
        }
    }

    /// Snapshots the form into a draft without touching any input
    ///
    /// Fails only when a ticket number cannot be parsed.
    pub fn build(
        &self,
        tiers: &TicketTierSynchronizer,
        banner: &UploadState,
        ticket_banners: &UploadState,
    ) -> Result<EventDraft, ValidationError> {
        Ok(EventDraft {
            organizer: self.organizer.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            banner: banner
                .first_url()
                .unwrap_or(BANNER_PLACEHOLDER)
                .to_string(),
            date: self.date.clone(),
            time: self.time.clone(),
            status: self.status,
            modality: self.modality,
            location: self.location.clone(),
            ticket_tiers: tiers.tiers()?,
            tier_lengths: tiers.lengths(),
            ticket_banners: ticket_banners.urls.clone(),
            extra: self.extra.clone(),
        })
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingRequiredField(field))
    } else {
        Ok(())
    }
}

/// Checks a draft against `today`, comparing calendar dates only
pub fn validate_for_submit(draft: &EventDraft, today: NaiveDate) -> Result<(), ValidationError> {
    require(&draft.organizer, "organizer")?;
    require(&draft.name, "name")?;
    require(&draft.description, "description")?;
    require(&draft.date, "date")?;
    require(&draft.time, "time")?;

    let date = NaiveDate::parse_from_str(draft.date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(draft.date.clone()))?;
    if date < today {
        return Err(ValidationError::DateInPast {
            date: date.to_string(),
            today: today.to_string(),
        });
    }

    let time = draft.time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime(draft.time.clone()))?;

    if draft.modality.requires_location() {
        require(&draft.location, "location")?;
    }

    if !draft.tier_lengths.in_lockstep() {
        return Err(ValidationError::TierLengthMismatch {
            capacities: draft.tier_lengths.capacities,
            types: draft.tier_lengths.types,
            prices: draft.tier_lengths.prices,
        });
    }
    if draft.ticket_tiers.is_empty() {
        return Err(ValidationError::NoTicketTiers);
    }
    if let Some(position) = draft
        .ticket_tiers
        .iter()
        .position(|tier| tier.ticket_type.trim().is_empty())
    {
        return Err(ValidationError::InvalidTier {
            field: "type",
            position,
            source: ConversionError::Empty,
        });
    }
    if draft.ticket_banners.len() < draft.ticket_tiers.len() {
        return Err(ValidationError::MissingTicketBanners {
            tiers: draft.ticket_tiers.len(),
            banners: draft.ticket_banners.len(),
        });
    }

    Ok(())
}

/// Validates the draft and hands it to the contract with fixed gas and deposit
pub async fn submit<W: EventWriter>(
    contract: &W,
    draft: EventDraft,
    today: NaiveDate,
) -> Result<Event, AppError> {
    validate_for_submit(&draft, today)?;

    let args = CreateEventArgs::from(&draft);
    log::info!(
        "Submitting event '{}' with {} ticket tiers",
        args.name,
        args.ticket_type.len()
    );

    let event = contract
        .create_event(args, SUBMIT_GAS, SUBMIT_DEPOSIT)
        .await?;

    log::info!("Event '{}' created with index {}", event.name, event.index);
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::contract_service::{EventReader, LocalLedger};
    use crate::services::unit_converter::ONE_NEAR_IN_YOCTO;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn uploaded(urls: &[&str]) -> UploadState {
        UploadState::succeed(urls.iter().map(|u| u.to_string()).collect(), None)
    }

    fn tiers() -> TicketTierSynchronizer {
        let mut sync = TicketTierSynchronizer::new();
        sync.set_capacity_text("100,400,1000");
        sync.set_type_text("VIP,GENERAL,X");
        sync.set_price_text("20,16,10");
        sync
    }

    fn valid_builder(date: NaiveDate) -> EventDraftBuilder {
        let mut builder = EventDraftBuilder::new("alice.testnet");
        builder.name = "Concert".to_string();
        builder.description = "Open air".to_string();
        builder.date = date.format("%Y-%m-%d").to_string();
        builder.time = "20:30".to_string();
        builder
    }

    fn valid_draft(date: NaiveDate) -> EventDraft {
        valid_builder(date)
            .build(
                &tiers(),
                &uploaded(&["https://gw/ipfs/banner"]),
                &uploaded(&["https://gw/ipfs/t1", "https://gw/ipfs/t2", "https://gw/ipfs/t3"]),
            )
            .unwrap()
    }

    #[test]
    fn test_today_is_accepted() {
        assert_eq!(validate_for_submit(&valid_draft(today()), today()), Ok(()));
    }

    #[test]
    fn test_yesterday_is_in_the_past() {
        let yesterday = today() - Duration::days(1);
        assert_eq!(
            validate_for_submit(&valid_draft(yesterday), today()),
            Err(ValidationError::DateInPast {
                date: "2026-10-18".to_string(),
                today: "2026-10-19".to_string(),
            })
        );
    }

    #[test]
    fn test_banner_defaults_to_placeholder() {
        let draft = valid_builder(today())
            .build(&tiers(), &UploadState::default(), &UploadState::default())
            .unwrap();
        assert_eq!(draft.banner, BANNER_PLACEHOLDER);
    }

    #[test]
    fn test_build_does_not_touch_inputs() {
        let builder = valid_builder(today());
        let sync = tiers();
        let before = (builder.clone(), sync.clone());
        let _ = builder.build(&sync, &UploadState::default(), &UploadState::default());
        assert_eq!((builder, sync), before);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut draft = valid_draft(today());
        draft.name = "  ".to_string();
        assert_eq!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::MissingRequiredField("name"))
        );
    }

    #[test]
    fn test_location_required_only_when_physical() {
        let mut draft = valid_draft(today());
        assert_eq!(validate_for_submit(&draft, today()), Ok(()));

        draft.modality = Modality::Physical;
        assert_eq!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::MissingRequiredField("location"))
        );

        draft.location = "Berlin".to_string();
        assert_eq!(validate_for_submit(&draft, today()), Ok(()));
    }

    #[test]
    fn test_invalid_date_and_time() {
        let mut draft = valid_draft(today());
        draft.date = "19/10/2026".to_string();
        assert!(matches!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::InvalidDate(_))
        ));

        let mut draft = valid_draft(today());
        draft.time = "25:00".to_string();
        assert!(matches!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_tier_length_mismatch_blocks_submit() {
        let mut sync = tiers();
        sync.set_type_text("VIP,GENERAL");
        let draft = valid_builder(today())
            .build(&sync, &UploadState::default(), &uploaded(&["a", "b", "c"]))
            .unwrap();
        assert_eq!(draft.ticket_tiers.len(), 2);
        assert!(matches!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::TierLengthMismatch { types: 2, .. })
        ));
    }

    #[test]
    fn test_missing_ticket_banners() {
        let draft = valid_builder(today())
            .build(&tiers(), &UploadState::default(), &uploaded(&["a", "b"]))
            .unwrap();
        assert_eq!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::MissingTicketBanners {
                tiers: 3,
                banners: 2
            })
        );
    }

    #[test]
    fn test_blank_ticket_type_blocks_submit() {
        let mut sync = tiers();
        sync.set_type_text("VIP,,X");
        let result = valid_builder(today()).build(
            &sync,
            &UploadState::default(),
            &uploaded(&["a", "b", "c"]),
        );
        assert!(matches!(
            result,
            Err(ValidationError::InvalidTier { field: "type", position: 1, .. })
        ));

        let mut draft = valid_draft(today());
        draft.ticket_tiers[2].ticket_type = "  ".to_string();
        assert_eq!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::InvalidTier {
                field: "type",
                position: 2,
                source: ConversionError::Empty,
            })
        );
    }

    #[test]
    fn test_no_tiers() {
        let draft = valid_builder(today())
            .build(
                &TicketTierSynchronizer::new(),
                &UploadState::default(),
                &UploadState::default(),
            )
            .unwrap();
        assert_eq!(
            validate_for_submit(&draft, today()),
            Err(ValidationError::NoTicketTiers)
        );
    }

    #[test]
    fn test_args_carry_parallel_lists() {
        let args = CreateEventArgs::from(&valid_draft(today()));
        assert_eq!(args.capacity, vec![100, 400, 1000]);
        assert_eq!(args.ticket_type, vec!["VIP", "GENERAL", "X"]);
        assert_eq!(args.price[0].0, 20 * ONE_NEAR_IN_YOCTO);
        assert_eq!(args.location, "");
        assert_eq!(args.extra, r#"{"version":1,"verified":false}"#);

        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["price"][2], "10000000000000000000000000");
    }

    #[tokio::test]
    async fn test_submit_creates_event() {
        let ledger = LocalLedger::new("alice.testnet");
        let event = submit(&ledger, valid_draft(today()), today()).await.unwrap();

        assert_eq!(event.index, 1);
        assert_eq!(event.capacity, 1500);
        assert_eq!(event.organizer, "alice.testnet");
        assert_eq!(ledger.get_events(None, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_draft() {
        let ledger = LocalLedger::new("alice.testnet");
        let yesterday = today() - Duration::days(1);

        let result = submit(&ledger, valid_draft(yesterday), today()).await;

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::DateInPast { .. }))
        ));
        assert_eq!(ledger.events_supply(), 0);
    }
}

use crate::error::{ConversionError, ValidationError};
use crate::models::{BaseUnits, TicketTier, TierListLengths};
use crate::services::delimited_parser::{parse_counts, parse_strings, parse_with};
use crate::services::unit_converter::to_base_units;

fn first_invalid<T>(
    field: &'static str,
    list: &[Result<T, ConversionError>],
) -> Option<ValidationError> {
    list.iter().enumerate().find_map(|(position, result)| {
        result.as_ref().err().map(|e| ValidationError::InvalidTier {
            field,
            position,
            source: e.clone(),
        })
    })
}

fn blank_type(types: &[String]) -> Option<ValidationError> {
    types
        .iter()
        .position(|t| t.trim().is_empty())
        .map(|position| ValidationError::InvalidTier {
            field: "type",
            position,
            source: ConversionError::Empty,
        })
}

/// Keeps the three ticket text fields and their parsed parallel lists
///
/// Every edit re-derives all three lists, each purely from its own text.
/// The i-th entry of each list describes the same tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketTierSynchronizer {
    capacity_text: String,
    type_text: String,
    price_text: String,
    capacities: Vec<Result<u32, ConversionError>>,
    types: Vec<String>,
    prices: Vec<Result<BaseUnits, ConversionError>>,
}

impl TicketTierSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_capacity_text(&mut self, text: impl Into<String>) {
        self.capacity_text = text.into();
        self.resync();
    }

    pub fn set_type_text(&mut self, text: impl Into<String>) {
        self.type_text = text.into();
        self.resync();
    }

    pub fn set_price_text(&mut self, text: impl Into<String>) {
        self.price_text = text.into();
        self.resync();
    }

    fn resync(&mut self) {
        self.capacities = parse_counts(&self.capacity_text);
        self.types = parse_strings(&self.type_text);
        self.prices = parse_with(&self.price_text, to_base_units);
    }

    pub fn capacity_text(&self) -> &str {
        &self.capacity_text
    }

    pub fn type_text(&self) -> &str {
        &self.type_text
    }

    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    #[allow(dead_code)]
    pub fn capacities(&self) -> &[Result<u32, ConversionError>] {
        &self.capacities
    }

    #[allow(dead_code)]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    #[allow(dead_code)]
    pub fn prices(&self) -> &[Result<BaseUnits, ConversionError>] {
        &self.prices
    }

    pub fn lengths(&self) -> TierListLengths {
        TierListLengths {
            capacities: self.capacities.len(),
            types: self.types.len(),
            prices: self.prices.len(),
        }
    }

    /// First unparseable number or blank ticket type, if any
    pub fn first_error(&self) -> Option<ValidationError> {
        first_invalid("capacity", &self.capacities)
            .or_else(|| blank_type(&self.types))
            .or_else(|| first_invalid("price", &self.prices))
    }

    /// Tiers zipped by position, truncated to the shortest list
    ///
    /// Fails on the first invalid number or blank type anywhere in the lists.
    pub fn tiers(&self) -> Result<Vec<TicketTier>, ValidationError> {
        if let Some(e) = self.first_error() {
            return Err(e);
        }

        Ok(self
            .capacities
            .iter()
            .zip(&self.types)
            .zip(&self.prices)
            .filter_map(|((capacity, ticket_type), price)| {
                Some(TicketTier {
                    capacity: *capacity.as_ref().ok()?,
                    ticket_type: ticket_type.clone(),
                    price: *price.as_ref().ok()?,
                })
            })
            .collect())
    }
}

use std::fmt;

/// Failure to turn a typed-in token into a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Token was empty (e.g. `"100,,200"`)
    Empty,
    NonNumeric(String),
    Negative(String),
    /// Value does not fit the target integer type
    Overflow(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::Empty => write!(f, "empty value"),
            ConversionError::NonNumeric(token) => write!(f, "'{}' is not a number", token),
            ConversionError::Negative(token) => write!(f, "'{}' must not be negative", token),
            ConversionError::Overflow(token) => write!(f, "'{}' is too large", token),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Reasons a draft cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequiredField(&'static str),
    DateInPast { date: String, today: String },
    InvalidDate(String),
    InvalidTime(String),
    NoTicketTiers,
    TierLengthMismatch {
        capacities: usize,
        types: usize,
        prices: usize,
    },
    MissingTicketBanners { tiers: usize, banners: usize },
    InvalidTier {
        field: &'static str,
        position: usize,
        source: ConversionError,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::MissingRequiredField(field) => {
                write!(f, "Required field '{}' is empty", field)
            }
            ValidationError::DateInPast { date, today } => {
                write!(f, "Event date {} is before today ({})", date, today)
            }
            ValidationError::InvalidDate(text) => write!(f, "Invalid date: '{}'", text),
            ValidationError::InvalidTime(text) => write!(f, "Invalid time: '{}'", text),
            ValidationError::NoTicketTiers => write!(f, "At least one ticket tier is required"),
            ValidationError::TierLengthMismatch {
                capacities,
                types,
                prices,
            } => write!(
                f,
                "Ticket lists differ in length: {} capacities, {} types, {} prices",
                capacities, types, prices
            ),
            ValidationError::MissingTicketBanners { tiers, banners } => write!(
                f,
                "{} ticket tiers but only {} ticket banners",
                tiers, banners
            ),
            ValidationError::InvalidTier {
                field,
                position,
                source,
            } => write!(f, "Ticket {} #{}: {}", field, position + 1, source),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from the event contract collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum ContractError {
    Transport(String),
    Rpc(String),
    Decode(String),
    NotFound(String),
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContractError::Transport(msg) => write!(f, "Network error: {}", msg),
            ContractError::Rpc(msg) => write!(f, "RPC error: {}", msg),
            ContractError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ContractError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ContractError {}

/// Central error type of the ticket client
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Upload(ipfs_upload::UploadError),
    Contract(ContractError),
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "Validation error: {}", e),
            AppError::Upload(e) => write!(f, "Upload error: {}", e),
            AppError::Contract(e) => write!(f, "Contract error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<ipfs_upload::UploadError> for AppError {
    fn from(e: ipfs_upload::UploadError) -> Self {
        AppError::Upload(e)
    }
}

impl From<ContractError> for AppError {
    fn from(e: ContractError) -> Self {
        AppError::Contract(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-facing messages for notifications
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(ValidationError::DateInPast { .. }) => {
                "Event Date cannot be before today".to_string()
            }
            AppError::Validation(e) => e.to_string(),
            AppError::Upload(_) => "Upload failed. Please try again.".to_string(),
            AppError::Contract(_) => {
                "The event could not be created. Please try again.".to_string()
            }
            AppError::Config(_) => "The app is misconfigured.".to_string(),
        }
    }
}

//! Ticket contract collaborators
//!
//! Signing and broadcasting transactions belongs to the wallet layer. This
//! module provides the interface the app talks to, a read-only NEAR JSON-RPC
//! client for `get_events`, and [`LocalLedger`], an in-memory contract used in
//! offline mode and tests that reproduces the contract's bookkeeping.

use crate::error::ContractError;
use crate::models::{CreateEventArgs, Event, TicketMetadata, TicketSeries};
use base64::Engine;
use serde::Deserialize;
use std::sync::{Arc, Mutex};

/// Page size used by `get_events` when no limit is given
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

/// Separates event name and ticket type in series titles ("Concert - VIP")
pub const TITLE_DELIMITER: &str = " - ";

#[allow(async_fn_in_trait)]
pub trait EventReader {
    async fn get_events(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Event>, ContractError>;
}

#[allow(async_fn_in_trait)]
pub trait EventWriter {
    /// `gas` and `deposit` are integers encoded as decimal strings
    async fn create_event(
        &self,
        args: CreateEventArgs,
        gas: &str,
        deposit: &str,
    ) -> Result<Event, ContractError>;
}

#[derive(Debug, Default)]
struct LedgerState {
    events: Vec<Event>,
    series_count: usize,
}

/// In-memory event contract
#[derive(Debug, Clone)]
pub struct LocalLedger {
    signer: String,
    state: Arc<Mutex<LedgerState>>,
}

impl LocalLedger {
    pub fn new(signer: impl Into<String>) -> Self {
        Self {
            signer: signer.into(),
            state: Arc::new(Mutex::new(LedgerState::default())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, LedgerState>, ContractError> {
        self.state
            .lock()
            .map_err(|_| ContractError::Rpc("ledger state poisoned".to_string()))
    }

    /// Contract-side lookups, used by tests to inspect ledger state
    #[allow(dead_code)]
    pub fn get_event(&self, index: u64) -> Result<Event, ContractError> {
        self.lock()?
            .events
            .iter()
            .find(|e| e.index == index)
            .cloned()
            .ok_or_else(|| ContractError::NotFound(format!("event {}", index)))
    }

    #[allow(dead_code)]
    pub fn events_supply(&self) -> u64 {
        self.lock().map(|s| s.events.len() as u64).unwrap_or(0)
    }
}

impl EventReader for LocalLedger {
    async fn get_events(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Event>, ContractError> {
        let state = self.lock()?;
        Ok(state
            .events
            .iter()
            .skip(from_index.unwrap_or(0) as usize)
            .take(limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize)
            .cloned()
            .collect())
    }
}

impl EventWriter for LocalLedger {
    async fn create_event(
        &self,
        args: CreateEventArgs,
        gas: &str,
        deposit: &str,
    ) -> Result<Event, ContractError> {
        gas.parse::<u64>()
            .map_err(|_| ContractError::Rpc(format!("invalid gas '{}'", gas)))?;
        deposit
            .parse::<u128>()
            .map_err(|_| ContractError::Rpc(format!("invalid deposit '{}'", deposit)))?;

        let tiers = args.ticket_type.len();
        if args.capacity.len() < tiers || args.price.len() < tiers {
            return Err(ContractError::Rpc(format!(
                "{} ticket types but {} capacities and {} prices",
                tiers,
                args.capacity.len(),
                args.price.len()
            )));
        }

        let mut state = self.lock()?;
        let mut tickets = Vec::with_capacity(tiers);
        let mut total_capacity: u32 = 0;

        for (i, ticket_type) in args.ticket_type.iter().enumerate() {
            total_capacity = total_capacity
                .checked_add(args.capacity[i])
                .ok_or_else(|| ContractError::Rpc("total capacity overflow".to_string()))?;
            state.series_count += 1;

            tickets.push(TicketSeries {
                token_series_id: state.series_count.to_string(),
                metadata: TicketMetadata {
                    title: Some(format!("{}{}{}", args.name, TITLE_DELIMITER, ticket_type)),
                    description: None,
                    media: args.ticket_banners.get(i).cloned(),
                    copies: Some(u64::from(args.capacity[i])),
                    extra: Some(serde_json::json!({ "confirmed": false }).to_string()),
                },
                creator_id: self.signer.clone(),
                is_mintable: true,
                price: Some(args.price[i]),
            });
        }

        let event = Event {
            name: args.name,
            description: args.description,
            modality: args.modality,
            capacity: total_capacity,
            date: args.date,
            time: args.time,
            status: args.status,
            index: state.events.len() as u64 + 1,
            banner: args.banner,
            organizer: self.signer.clone(),
            ticket_type: args.ticket_type,
            tickets,
            location: args.location,
        };

        state.events.push(event.clone());
        log::debug!("Local ledger now holds {} events", state.events.len());
        Ok(event)
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<CallFunctionResult>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CallFunctionResult {
    #[serde(default)]
    result: Vec<u8>,
    error: Option<String>,
}

/// Read-only NEAR JSON-RPC access to the ticket contract
#[derive(Debug, Clone)]
pub struct NearRpcReader {
    rpc_url: String,
    account_id: String,
    http: reqwest::Client,
}

impl NearRpcReader {
    pub fn new(rpc_url: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            account_id: account_id.into(),
            http: reqwest::Client::new(),
        }
    }

    fn view_request(&self, method_name: &str, args: &serde_json::Value) -> serde_json::Value {
        let args_base64 = base64::engine::general_purpose::STANDARD.encode(args.to_string());
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": "dontcare",
            "method": "query",
            "params": {
                "request_type": "call_function",
                "finality": "final",
                "account_id": self.account_id,
                "method_name": method_name,
                "args_base64": args_base64,
            }
        })
    }
}

fn decode_view_result<T: serde::de::DeserializeOwned>(
    response: RpcResponse,
) -> Result<T, ContractError> {
    if let Some(error) = response.error {
        return Err(ContractError::Rpc(error.to_string()));
    }
    let call = response
        .result
        .ok_or_else(|| ContractError::Decode("response has no result".to_string()))?;
    if let Some(error) = call.error {
        return Err(ContractError::Rpc(error));
    }
    serde_json::from_slice(&call.result)
        .map_err(|e| ContractError::Decode(format!("Failed to parse view result: {}", e)))
}

impl EventReader for NearRpcReader {
    async fn get_events(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Event>, ContractError> {
        // from_index is a U128 on the contract side, hence a string
        let args = serde_json::json!({
            "from_index": from_index.map(|i| i.to_string()),
            "limit": limit,
        });

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&self.view_request("get_events", &args))
            .send()
            .await
            .map_err(|e| ContractError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ContractError::Rpc(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let body = response
            .json::<RpcResponse>()
            .await
            .map_err(|e| ContractError::Decode(format!("Failed to parse response: {}", e)))?;

        let events: Vec<Event> = decode_view_result(body)?;
        log::debug!("Fetched {} events from {}", events.len(), self.account_id);
        Ok(events)
    }
}

/// Where the home screen reads events from
#[derive(Debug, Clone)]
pub enum EventFeed {
    Local(LocalLedger),
    Rpc(NearRpcReader),
}

impl EventReader for EventFeed {
    async fn get_events(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Event>, ContractError> {
        match self {
            EventFeed::Local(ledger) => ledger.get_events(from_index, limit).await,
            EventFeed::Rpc(reader) => reader.get_events(from_index, limit).await,
        }
    }
}

//! Request and response shapes of the Investigate API.
//!
//! Responses are checked only for the fields that decide success
//! (`results`/`total`, `data.indices`). Everything else is kept as received
//! and exposed through typed accessors.

use crate::error::InvestigateError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Category of identifier being searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Emails,
    Domains,
    Phones,
    Usernames,
    CreditCards,
}

impl Entity {
    pub const ALL: [Entity; 5] = [
        Entity::Emails,
        Entity::Domains,
        Entity::Phones,
        Entity::Usernames,
        Entity::CreditCards,
    ];

    /// Wire name of the entity
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Emails => "emails",
            Entity::Domains => "domains",
            Entity::Phones => "phones",
            Entity::Usernames => "usernames",
            Entity::CreditCards => "credit_cards",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = InvestigateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Entity::ALL
            .into_iter()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| {
                InvestigateError::invalid_request(format!(
                    "Unknown entity '{}'. Valid entities: {}",
                    s,
                    Entity::ALL.map(|e| e.as_str()).join(", ")
                ))
            })
    }
}

/// Named partition of the search store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchIndex {
    LeakedCredentials,
    InstantMessaging,
    /// Any other partition, sent verbatim
    Other(String),
}

impl SearchIndex {
    pub fn as_str(&self) -> &str {
        match self {
            SearchIndex::LeakedCredentials => "leaked_credentials",
            SearchIndex::InstantMessaging => "instant_messaging",
            SearchIndex::Other(name) => name,
        }
    }
}

impl fmt::Display for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchIndex {
    type Err = InvestigateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(InvestigateError::invalid_request("Index name cannot be empty")),
            "leaked_credentials" => Ok(SearchIndex::LeakedCredentials),
            "instant_messaging" => Ok(SearchIndex::InstantMessaging),
            other => Ok(SearchIndex::Other(other.to_string())),
        }
    }
}

/// Optional search filter, either free text or a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    Text(String),
    Number(i64),
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchFilter::Text(text) => f.write_str(text),
            SearchFilter::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for SearchFilter {
    fn from(value: &str) -> Self {
        SearchFilter::Text(value.to_string())
    }
}

impl From<String> for SearchFilter {
    fn from(value: String) -> Self {
        SearchFilter::Text(value)
    }
}

impl From<i64> for SearchFilter {
    fn from(value: i64) -> Self {
        SearchFilter::Number(value)
    }
}

impl FromStr for SearchFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => SearchFilter::Number(n),
            Err(_) => SearchFilter::Text(s.to_string()),
        })
    }
}

/// Parameters of one `/search` call.
///
/// The query is not validated here; callers check it before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub entity: Entity,
    pub index: SearchIndex,
    pub filter: Option<SearchFilter>,
}

impl SearchRequest {
    pub fn new<S: Into<String>>(query: S, entity: Entity, index: SearchIndex) -> Self {
        Self {
            query: query.into(),
            entity,
            index,
            filter: None,
        }
    }

    /// Email lookup in the leaked-credentials index
    pub fn leaked_email<S: Into<String>>(email: S) -> Self {
        Self::new(email, Entity::Emails, SearchIndex::LeakedCredentials)
    }

    #[must_use]
    pub fn with_filter<F: Into<SearchFilter>>(mut self, filter: F) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Parameters of one `/counters` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountersRequest {
    pub query: String,
    pub entity: Entity,
}

impl CountersRequest {
    pub fn new<S: Into<String>>(query: S, entity: Entity) -> Self {
        Self {
            query: query.into(),
            entity,
        }
    }
}

/// Integer view of a JSON number; fractional values are truncated
fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|n| n as i64))
}

/// One leaked-credential exposure, kept exactly as the service sent it.
///
/// The accessors are a typed view over the raw record. Any field may be
/// missing, `null` or of an unexpected type; the accessor then yields `None`.
/// `id` is not guaranteed unique by the service; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreachRecord(Value);

impl BreachRecord {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.text("id")
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    pub fn domain(&self) -> Option<&str> {
        self.text("domain")
    }

    pub fn user_name(&self) -> Option<&str> {
        self.text("userName")
    }

    pub fn password(&self) -> Option<&str> {
        self.text("password")
    }

    pub fn password_type(&self) -> Option<&str> {
        self.text("passwordType")
    }

    pub fn source(&self) -> Option<&str> {
        self.text("source")
    }

    pub fn source_id(&self) -> Option<&str> {
        self.text("source_id")
    }

    pub fn source_type(&self) -> Option<&str> {
        self.text("sourceType")
    }

    pub fn source_type_raw(&self) -> Option<&str> {
        self.text("sourceTypeRaw")
    }

    pub fn service(&self) -> Option<&str> {
        self.text("service")
    }

    pub fn service_raw(&self) -> Option<&str> {
        self.text("serviceRaw")
    }

    /// Epoch timestamp of the original post
    pub fn posted_date(&self) -> Option<i64> {
        self.get("postedDate").and_then(as_integer)
    }

    /// Epoch timestamp of indexing
    pub fn indexed_date(&self) -> Option<i64> {
        self.get("indexed_date").and_then(as_integer)
    }

    pub fn authorized(&self) -> Option<bool> {
        self.get("authorized").and_then(Value::as_bool)
    }

    /// Whatever identifies the exposed account: email, then user name, then domain
    pub fn identity(&self) -> Option<&str> {
        self.email()
            .or_else(|| self.user_name())
            .or_else(|| self.domain())
    }
}

impl From<Value> for BreachRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Licence and quota snapshot returned alongside results, as received
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct License(Value);

impl License {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    fn field(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    fn subscription(&self, field: &str) -> Option<&Value> {
        self.field("subscriptions")
            .and_then(|subs| subs.get(field))
            .filter(|value| !value.is_null())
    }

    pub fn limit(&self) -> Option<i64> {
        self.field("limit").and_then(as_integer)
    }

    pub fn counter(&self) -> Option<i64> {
        self.field("counter").and_then(as_integer)
    }

    pub fn time_frame(&self) -> Option<&str> {
        self.field("time_frame").and_then(Value::as_str)
    }

    pub fn license_type(&self) -> Option<&str> {
        self.field("type").and_then(Value::as_str)
    }

    pub fn next_refresh(&self) -> Option<&str> {
        self.field("nextRefresh").and_then(Value::as_str)
    }

    pub fn unlimited(&self) -> bool {
        self.subscription("unlimited")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn license_level(&self) -> Option<&str> {
        // Misspelled on the wire
        self.subscription("licenesLevel").and_then(Value::as_str)
    }

    /// Searches left in the current time frame, if the licence is metered
    pub fn remaining(&self) -> Option<i64> {
        let limit = self.limit()?;
        if self.unlimited() || limit <= 0 {
            return None;
        }
        Some((limit - self.counter().unwrap_or(0)).max(0))
    }
}

impl From<Value> for License {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Body of a successful `/search` call.
///
/// Only `results` and `total` are checked. Every other top-level field
/// (aggregations, `license`, `isAssetsAvailable`, anything new) is kept
/// verbatim in `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<BreachRecord>,
    pub total: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResponse {
    pub fn license(&self) -> Option<License> {
        license_in(&self.extra)
    }

    /// A histogram such as `password_hash` or `source`; empty when absent
    pub fn aggregation(&self, name: &str) -> &[Value] {
        self.extra
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_assets_available(&self) -> bool {
        self.extra
            .get("isAssetsAvailable")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

fn license_in(fields: &Map<String, Value>) -> Option<License> {
    fields
        .get("license")
        .filter(|value| value.is_object())
        .cloned()
        .map(License::from)
}

/// Hit count of one index, as received
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexCounter(Value);

impl IndexCounter {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn counter(&self) -> Option<u64> {
        let value = self.0.get("counter")?;
        value
            .as_u64()
            .or_else(|| value.as_f64().filter(|n| *n >= 0.0).map(|n| n as u64))
    }
}

impl From<Value> for IndexCounter {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicesCountersData {
    pub indices: Vec<IndexCounter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IndicesCountersData {
    pub fn license(&self) -> Option<License> {
        license_in(&self.extra)
    }
}

/// Body of a successful `/counters` call; only `data.indices` is checked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicesCountersResponse {
    pub data: IndicesCountersData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

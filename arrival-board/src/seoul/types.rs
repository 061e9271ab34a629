//! Realtime arrival API response DTOs.
//!
//! The upstream feed is loosely typed: numeric fields arrive as strings or
//! numbers, text fields may be missing or null, and the envelope has changed
//! key names across API versions. Everything here is lenient; interpretation
//! happens in [`super::convert`].

use serde::Deserialize;
use serde_json::Value;

use super::error::FetchError;

/// `errorMessage.code` meaning success (possibly with no arrivals).
pub const SUCCESS_CODE: &str = "INFO-000";

/// Current key holding the arrival list.
const CURRENT_KEY: &str = "realtimeArrivalList";

/// Key used by older API versions.
const LEGACY_KEY: &str = "realtimeStationArrival";

/// Key of the embedded status/error object.
const ERROR_KEY: &str = "errorMessage";

/// Message shown when an error object carries none.
const DEFAULT_API_MESSAGE: &str = "알 수 없는 오류";

/// A JSON scalar that may be a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl Scalar {
    /// The value rendered as text.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => (*f as i64).to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s.clone(),
            Scalar::Other(v) => v.to_string(),
        }
    }

    /// The value as whole seconds; anything non-numeric is 0.
    pub fn to_seconds(&self) -> i64 {
        match self {
            Scalar::Int(n) => *n,
            Scalar::Float(f) if f.is_finite() => f.trunc() as i64,
            Scalar::Text(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Whether the value is the flag `"1"` or `1`.
    pub fn is_set_flag(&self) -> bool {
        match self {
            Scalar::Int(n) => *n == 1,
            Scalar::Float(f) => *f == 1.0,
            Scalar::Text(s) => s == "1",
            Scalar::Other(_) => false,
        }
    }
}

/// One arrival record as sent by the upstream API.
///
/// Only the fields used for display are kept; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArrival {
    /// Seconds until arrival.
    pub barvl_dt: Option<Scalar>,

    /// Primary arrival message, e.g. "전역 도착" or "3분 후 (대화)".
    pub arvl_msg2: Option<Scalar>,

    /// Secondary message, usually the current station name.
    pub arvl_msg3: Option<Scalar>,

    /// Arrival code: "0" arrived, "1" entering, others in transit.
    pub arvl_cd: Option<Scalar>,

    /// Destination station name.
    pub bstatn_nm: Option<Scalar>,

    /// Line id, e.g. "1003".
    pub subway_id: Option<Scalar>,

    /// Direction code: 상행/하행 or 내선/외선.
    pub updn_line: Option<Scalar>,

    /// Last-train flag.
    pub lstcar_at: Option<Scalar>,
}

impl RawArrival {
    /// Seconds until arrival, 0 when absent or unparseable.
    pub fn seconds(&self) -> i64 {
        self.barvl_dt.as_ref().map_or(0, Scalar::to_seconds)
    }

    /// Whether this is the last train of the day.
    pub fn is_last_train(&self) -> bool {
        self.lstcar_at.as_ref().is_some_and(Scalar::is_set_flag)
    }
}

/// Text of an optional scalar field, empty when absent.
pub fn field_text(field: &Option<Scalar>) -> String {
    field.as_ref().map(Scalar::to_text).unwrap_or_default()
}

/// Which envelope the arrivals came in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedShape {
    /// `{"realtimeArrivalList": [...]}`
    Current,
    /// `{"realtimeStationArrival": [...]}`
    Legacy,
    /// `[...]`
    BareList,
    /// `{"errorMessage": {"code": "INFO-000"}}` with no list
    StatusOnly,
}

/// Successfully parsed feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPayload {
    pub shape: FeedShape,
    pub arrivals: Vec<RawArrival>,
}

/// Classify an upstream document.
///
/// An error object with a non-success code wins over any arrival list.
/// Documents matching no known shape report their top-level keys.
pub fn parse_feed(doc: Value) -> Result<FeedPayload, FetchError> {
    let mut map = match doc {
        Value::Array(items) => {
            return Ok(FeedPayload {
                shape: FeedShape::BareList,
                arrivals: parse_items(items),
            });
        }
        Value::Object(map) => map,
        _ => return Err(FetchError::UnexpectedShape { keys: Vec::new() }),
    };

    let has_status = match map.get(ERROR_KEY) {
        Some(status) => {
            check_status(status)?;
            true
        }
        None => false,
    };

    let keys: Vec<String> = map.keys().cloned().collect();

    for (key, shape) in [(CURRENT_KEY, FeedShape::Current), (LEGACY_KEY, FeedShape::Legacy)] {
        if let Some(list) = map.remove(key) {
            let items = match list {
                Value::Array(items) => items,
                Value::Null => Vec::new(),
                _ => return Err(FetchError::UnexpectedShape { keys }),
            };
            return Ok(FeedPayload {
                shape,
                arrivals: parse_items(items),
            });
        }
    }

    if has_status {
        return Ok(FeedPayload {
            shape: FeedShape::StatusOnly,
            arrivals: Vec::new(),
        });
    }

    Err(FetchError::UnexpectedShape { keys })
}

/// Fail on an `errorMessage` object whose code isn't [`SUCCESS_CODE`].
fn check_status(status: &Value) -> Result<(), FetchError> {
    let code = status.get("code").and_then(Value::as_str).unwrap_or_default();
    if code == SUCCESS_CODE {
        return Ok(());
    }

    let message = status
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_API_MESSAGE);

    Err(FetchError::Api {
        code: code.to_string(),
        message: message.to_string(),
    })
}

fn parse_items(items: Vec<Value>) -> Vec<RawArrival> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if !item.is_object() {
                tracing::warn!(idx, "skipping non-object arrival entry");
                return None;
            }
            match serde_json::from_value(item) {
                Ok(arrival) => Some(arrival),
                Err(e) => {
                    tracing::warn!(idx, error = %e, "skipping malformed arrival entry");
                    None
                }
            }
        })
        .collect()
}

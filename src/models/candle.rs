//! Candle primitives and boundary parsing of raw OHLC records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Volume assumed for records that omit it.
pub const DEFAULT_VOLUME: f64 = 1000.0;

/// A single OHLCV candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Absolute size of the candle body.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full high-to-low range.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Wick above the body.
    pub fn upper_shadow(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// Wick below the body.
    pub fn lower_shadow(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Numeric field that external feeds deliver as a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    fn resolve(&self, field: &str, index: usize) -> Result<f64, ApiError> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                ApiError::Validation(format!(
                    "candle {}: invalid numeric value {:?} for {}",
                    index, s, field
                ))
            })?,
        };

        if !value.is_finite() {
            return Err(ApiError::Validation(format!(
                "candle {}: non-finite value for {}",
                index, field
            )));
        }
        Ok(value)
    }
}

/// Raw candle record as submitted by API clients.
///
/// Timestamps arrive under `time` or `datetime` (`time` wins when both are
/// present); volume is optional and defaults to [`DEFAULT_VOLUME`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandle {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub datetime: Option<String>,
    pub open: LooseNumber,
    pub high: LooseNumber,
    pub low: LooseNumber,
    pub close: LooseNumber,
    #[serde(default)]
    pub volume: Option<LooseNumber>,
}

impl RawCandle {
    fn to_candle(&self, index: usize) -> Result<Candle, ApiError> {
        let raw_ts = self
            .time
            .as_deref()
            .or(self.datetime.as_deref())
            .ok_or_else(|| {
                ApiError::Validation(format!("candle {}: missing time or datetime field", index))
            })?;

        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| {
            ApiError::Validation(format!(
                "candle {}: unrecognized timestamp {:?}",
                index, raw_ts
            ))
        })?;

        let open = self.open.resolve("open", index)?;
        let high = self.high.resolve("high", index)?;
        let low = self.low.resolve("low", index)?;
        let close = self.close.resolve("close", index)?;
        let volume = match &self.volume {
            Some(v) => v.resolve("volume", index)?,
            None => DEFAULT_VOLUME,
        };

        Ok(Candle::new(open, high, low, close, volume, timestamp))
    }
}

/// Build a validated candle series from raw records.
///
/// Sorts ascending by timestamp and rejects duplicate timestamps; any
/// unparsable field rejects the whole request.
pub fn parse_series(records: &[RawCandle]) -> Result<Vec<Candle>, ApiError> {
    if records.is_empty() {
        return Err(ApiError::Validation(
            "ohlc_data must contain at least one candle".to_string(),
        ));
    }

    let mut candles = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        candles.push(record.to_candle(index)?);
    }

    candles.sort_by_key(|c| c.timestamp);
    for pair in candles.windows(2) {
        if pair[0].timestamp == pair[1].timestamp {
            return Err(ApiError::Validation(format!(
                "duplicate candle timestamp: {}",
                pair[0].timestamp
            )));
        }
    }

    Ok(candles)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    // Bare integers are unix epoch seconds
    if let Ok(secs) = raw.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0);
    }

    None
}

/// Snapshot of the latest market state, derived from a series.
#[derive(Debug, Clone, Serialize)]
pub struct MarketInfo {
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_pct: f64,
    pub current_volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl MarketInfo {
    pub fn from_candles(candles: &[Candle]) -> Option<Self> {
        let first = candles.first()?;
        let last = candles.last()?;

        let price_change = last.close - first.close;
        let price_change_pct = if first.close != 0.0 {
            price_change / first.close * 100.0
        } else {
            0.0
        };

        Some(Self {
            current_price: last.close,
            price_change,
            price_change_pct,
            current_volume: last.volume,
            timestamp: last.timestamp,
        })
    }
}

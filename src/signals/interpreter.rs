//! Fixed rule table turning indicator readings into weighted signals.
//!
//! Thresholds and weights are design constants. Readings with no rule row
//! produce a weight-0 neutral signal so the breakdown still lists them.

use crate::indicators::IndicatorKind;
use crate::models::indicators::{IndicatorReading, PricePosition, TrendBias};
use crate::models::pattern::{PatternAggregate, PatternDirection, SignalStrength};
use crate::models::prediction::{Signal, SignalDirection};

/// Source name for the folded pattern signal.
pub const PATTERN_SOURCE: &str = "candlestick_patterns";

/// Interpret one reading against the rule table.
pub fn interpret(kind: IndicatorKind, reading: &IndicatorReading, price: f64) -> Signal {
    let source = kind.name();
    match reading {
        IndicatorReading::Rsi(r) => interpret_rsi(source, r.rsi),
        IndicatorReading::Macd(r) => {
            if r.macd > r.macd_signal {
                Signal::new(
                    source,
                    SignalDirection::Bullish,
                    1.2,
                    format!(
                        "MACD bullish: MACD={:.4}, Signal={:.4}",
                        r.macd, r.macd_signal
                    ),
                )
            } else if r.macd < r.macd_signal {
                Signal::new(
                    source,
                    SignalDirection::Bearish,
                    1.2,
                    format!(
                        "MACD bearish: MACD={:.4}, Signal={:.4}",
                        r.macd, r.macd_signal
                    ),
                )
            } else {
                Signal::neutral(source, "MACD flat against its signal line")
            }
        }
        IndicatorReading::Ema(r) => {
            let headline = r
                .value_for(20)
                .or_else(|| r.values.values().next().copied());
            match headline {
                Some(ema) if price > ema => Signal::new(
                    source,
                    SignalDirection::Bullish,
                    1.0,
                    format!("Price above EMA: {:.2} > {:.2}", price, ema),
                ),
                Some(ema) if price < ema => Signal::new(
                    source,
                    SignalDirection::Bearish,
                    1.0,
                    format!("Price below EMA: {:.2} < {:.2}", price, ema),
                ),
                _ => Signal::neutral(source, "Price sitting on EMA"),
            }
        }
        IndicatorReading::Bollinger(r) => {
            if price <= r.bb_lower {
                Signal::new(
                    source,
                    SignalDirection::Bullish,
                    1.3,
                    format!("Price at lower Bollinger band: {:.2} <= {:.2}", price, r.bb_lower),
                )
            } else if price >= r.bb_upper {
                Signal::new(
                    source,
                    SignalDirection::Bearish,
                    1.3,
                    format!("Price at upper Bollinger band: {:.2} >= {:.2}", price, r.bb_upper),
                )
            } else if price > r.bb_middle {
                Signal::new(
                    source,
                    SignalDirection::Bullish,
                    0.7,
                    format!("Price above Bollinger midline: {:.2} > {:.2}", price, r.bb_middle),
                )
            } else if price < r.bb_middle {
                Signal::new(
                    source,
                    SignalDirection::Bearish,
                    0.7,
                    format!("Price below Bollinger midline: {:.2} < {:.2}", price, r.bb_middle),
                )
            } else {
                Signal::neutral(source, "Price pinned to Bollinger midline")
            }
        }
        IndicatorReading::Stochastic(r) => {
            if r.stoch_k < 20.0 && r.stoch_d < 20.0 {
                Signal::new(
                    source,
                    SignalDirection::Bullish,
                    1.4,
                    format!("Stochastic oversold: K={:.2}, D={:.2}", r.stoch_k, r.stoch_d),
                )
            } else if r.stoch_k > 80.0 && r.stoch_d > 80.0 {
                Signal::new(
                    source,
                    SignalDirection::Bearish,
                    1.4,
                    format!("Stochastic overbought: K={:.2}, D={:.2}", r.stoch_k, r.stoch_d),
                )
            } else if r.stoch_k > r.stoch_d {
                Signal::new(
                    source,
                    SignalDirection::Bullish,
                    0.8,
                    format!("Stochastic K above D: {:.2} > {:.2}", r.stoch_k, r.stoch_d),
                )
            } else if r.stoch_k < r.stoch_d {
                Signal::new(
                    source,
                    SignalDirection::Bearish,
                    0.8,
                    format!("Stochastic K below D: {:.2} < {:.2}", r.stoch_k, r.stoch_d),
                )
            } else {
                Signal::neutral(source, "Stochastic K and D converged")
            }
        }
        IndicatorReading::StochRsi(r) => {
            if r.stoch_rsi_k < 20.0 && r.stoch_rsi_d < 20.0 {
                Signal::new(
                    source,
                    SignalDirection::Bullish,
                    1.3,
                    format!(
                        "Stochastic RSI oversold: K={:.2}, D={:.2}",
                        r.stoch_rsi_k, r.stoch_rsi_d
                    ),
                )
            } else if r.stoch_rsi_k > 80.0 && r.stoch_rsi_d > 80.0 {
                Signal::new(
                    source,
                    SignalDirection::Bearish,
                    1.3,
                    format!(
                        "Stochastic RSI overbought: K={:.2}, D={:.2}",
                        r.stoch_rsi_k, r.stoch_rsi_d
                    ),
                )
            } else {
                Signal::neutral(source, "Stochastic RSI inside its neutral band")
            }
        }
        IndicatorReading::Vwap(r) => match r.price_vs_vwap {
            PricePosition::Above => Signal::new(
                source,
                SignalDirection::Bullish,
                1.1,
                format!("Price above VWAP: {:.2} > {:.2}", price, r.vwap),
            ),
            PricePosition::Below => Signal::new(
                source,
                SignalDirection::Bearish,
                1.1,
                format!("Price below VWAP: {:.2} < {:.2}", price, r.vwap),
            ),
        },
        IndicatorReading::SuperTrend(r) => match r.supertrend_direction {
            TrendBias::Bullish => Signal::new(
                source,
                SignalDirection::Bullish,
                1.5,
                format!(
                    "SuperTrend bullish: price {:.2} above line {:.2}",
                    price, r.supertrend_value
                ),
            ),
            TrendBias::Bearish => Signal::new(
                source,
                SignalDirection::Bearish,
                1.5,
                format!(
                    "SuperTrend bearish: price {:.2} below line {:.2}",
                    price, r.supertrend_value
                ),
            ),
        },
        IndicatorReading::Atr(r) => {
            Signal::neutral(source, format!("ATR {:.4}: volatility only", r.atr))
        }
        _ => Signal::neutral(source, "No directional rule for this indicator"),
    }
}

fn interpret_rsi(source: &str, rsi: f64) -> Signal {
    if rsi < 30.0 {
        Signal::new(
            source,
            SignalDirection::Bullish,
            1.5,
            format!("RSI oversold: {:.2}", rsi),
        )
    } else if rsi > 70.0 {
        Signal::new(
            source,
            SignalDirection::Bearish,
            1.5,
            format!("RSI overbought: {:.2}", rsi),
        )
    } else if rsi < 40.0 {
        Signal::new(
            source,
            SignalDirection::Bullish,
            0.8,
            format!("RSI approaching oversold: {:.2}", rsi),
        )
    } else if rsi > 60.0 {
        Signal::new(
            source,
            SignalDirection::Bearish,
            0.8,
            format!("RSI approaching overbought: {:.2}", rsi),
        )
    } else {
        Signal::neutral(source, format!("RSI neutral: {:.2}", rsi))
    }
}

/// Fold the pattern aggregate into one weighted signal.
///
/// A strong consensus votes with weight 2.0, a moderate or weak directional
/// consensus with 1.0, and a neutral aggregate contributes weight 0 while
/// staying visible in the breakdown.
pub fn pattern_signal(aggregate: &PatternAggregate) -> Signal {
    let direction = match aggregate.overall_signal {
        PatternDirection::Bullish => SignalDirection::Bullish,
        PatternDirection::Bearish => SignalDirection::Bearish,
        PatternDirection::Neutral => SignalDirection::Neutral,
    };

    if direction == SignalDirection::Neutral {
        return Signal::neutral(
            PATTERN_SOURCE,
            format!(
                "No pattern consensus: {} bullish vs {} bearish",
                aggregate.bullish_patterns.len(),
                aggregate.bearish_patterns.len()
            ),
        );
    }

    let weight = match aggregate.strength {
        SignalStrength::Strong => 2.0,
        SignalStrength::Moderate | SignalStrength::Weak => 1.0,
    };
    let strength_label = match aggregate.strength {
        SignalStrength::Strong => "strong",
        SignalStrength::Moderate => "moderate",
        SignalStrength::Weak => "weak",
    };

    Signal::new(
        PATTERN_SOURCE,
        direction,
        weight,
        format!(
            "Candlestick patterns: {} bullish, {} bearish ({} signal)",
            aggregate.bullish_patterns.len(),
            aggregate.bearish_patterns.len(),
            strength_label
        ),
    )
}

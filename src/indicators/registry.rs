//! Closed indicator registry.
//!
//! External names and aliases resolve to [`IndicatorKind`] once at the API
//! boundary; everything past that point dispatches on the enum. Parameter
//! validation and the insufficiency bookkeeping live here so the per-module
//! calculators can stay plain `Option`-returning batch functions.

use crate::indicators::error::IndicatorError;
use crate::indicators::{momentum, structure, trend, volatility, volume};
use crate::models::candle::Candle;
use crate::models::indicators::IndicatorReading;

/// Indicator category, used to group the catalogue listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
    Volume,
    Structure,
}

impl IndicatorCategory {
    pub fn name(self) -> &'static str {
        match self {
            IndicatorCategory::Momentum => "momentum",
            IndicatorCategory::Trend => "trend",
            IndicatorCategory::Volatility => "volatility",
            IndicatorCategory::Volume => "volume",
            IndicatorCategory::Structure => "structure",
        }
    }
}

/// Every indicator the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Rsi,
    Macd,
    Stochastic,
    StochRsi,
    Sma,
    Ema,
    Atr,
    BollingerBands,
    Vwap,
    Obv,
    VolumeMa,
    SuperTrend,
    Fibonacci,
    SupportResistance,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 14] = [
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::Stochastic,
        IndicatorKind::StochRsi,
        IndicatorKind::Sma,
        IndicatorKind::Ema,
        IndicatorKind::Atr,
        IndicatorKind::BollingerBands,
        IndicatorKind::Vwap,
        IndicatorKind::Obv,
        IndicatorKind::VolumeMa,
        IndicatorKind::SuperTrend,
        IndicatorKind::Fibonacci,
        IndicatorKind::SupportResistance,
    ];

    /// Resolve an external name or alias, case-insensitively.
    pub fn resolve(name: &str) -> Result<IndicatorKind, IndicatorError> {
        match name.trim().to_lowercase().as_str() {
            "rsi" => Ok(IndicatorKind::Rsi),
            "macd" => Ok(IndicatorKind::Macd),
            "stoch" | "stochastic" => Ok(IndicatorKind::Stochastic),
            "stochrsi" | "stoch_rsi" | "stochastic_rsi" => Ok(IndicatorKind::StochRsi),
            "sma" => Ok(IndicatorKind::Sma),
            "ema" => Ok(IndicatorKind::Ema),
            "atr" => Ok(IndicatorKind::Atr),
            "bb" | "bbands" | "bollinger" | "bollinger_bands" => Ok(IndicatorKind::BollingerBands),
            "vwap" => Ok(IndicatorKind::Vwap),
            "obv" => Ok(IndicatorKind::Obv),
            "volume_ma" | "vma" => Ok(IndicatorKind::VolumeMa),
            "supertrend" | "super_trend" => Ok(IndicatorKind::SuperTrend),
            "fib" | "fibonacci" => Ok(IndicatorKind::Fibonacci),
            "sr" | "support_resistance" => Ok(IndicatorKind::SupportResistance),
            _ => Err(IndicatorError::Unsupported(name.to_string())),
        }
    }

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::Macd => "macd",
            IndicatorKind::Stochastic => "stochastic",
            IndicatorKind::StochRsi => "stoch_rsi",
            IndicatorKind::Sma => "sma",
            IndicatorKind::Ema => "ema",
            IndicatorKind::Atr => "atr",
            IndicatorKind::BollingerBands => "bollinger_bands",
            IndicatorKind::Vwap => "vwap",
            IndicatorKind::Obv => "obv",
            IndicatorKind::VolumeMa => "volume_ma",
            IndicatorKind::SuperTrend => "supertrend",
            IndicatorKind::Fibonacci => "fibonacci",
            IndicatorKind::SupportResistance => "support_resistance",
        }
    }

    pub fn category(self) -> IndicatorCategory {
        match self {
            IndicatorKind::Rsi
            | IndicatorKind::Macd
            | IndicatorKind::Stochastic
            | IndicatorKind::StochRsi => IndicatorCategory::Momentum,
            IndicatorKind::Sma | IndicatorKind::Ema => IndicatorCategory::Trend,
            IndicatorKind::Atr | IndicatorKind::BollingerBands => IndicatorCategory::Volatility,
            IndicatorKind::Vwap | IndicatorKind::Obv | IndicatorKind::VolumeMa => {
                IndicatorCategory::Volume
            }
            IndicatorKind::SuperTrend
            | IndicatorKind::Fibonacci
            | IndicatorKind::SupportResistance => IndicatorCategory::Structure,
        }
    }

    /// Positional parameters, for the catalogue listing.
    pub fn parameter_spec(self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "period (default 14)",
            IndicatorKind::Macd => "fast, slow, signal (default 12, 26, 9)",
            IndicatorKind::Stochastic => "k_period, d_period, smooth_k (default 14, 3, 3)",
            IndicatorKind::StochRsi => "rsi_period, stoch_period, k (default 14, 14, 3)",
            IndicatorKind::Sma => "period (default 20)",
            IndicatorKind::Ema => "one or more periods (default 20)",
            IndicatorKind::Atr => "period (default 14)",
            IndicatorKind::BollingerBands => "period, std_dev (default 20, 2.0)",
            IndicatorKind::Vwap => "none",
            IndicatorKind::Obv => "none",
            IndicatorKind::VolumeMa => "period (default 20)",
            IndicatorKind::SuperTrend => "period, multiplier (default 10, 3.0)",
            IndicatorKind::Fibonacci => "lookback (default 50)",
            IndicatorKind::SupportResistance => "lookback (default 20)",
        }
    }

    /// Example parameter set for the catalogue listing.
    pub fn example_params(self) -> &'static [f64] {
        match self {
            IndicatorKind::Rsi => &[14.0],
            IndicatorKind::Macd => &[12.0, 26.0, 9.0],
            IndicatorKind::Stochastic => &[14.0, 3.0, 3.0],
            IndicatorKind::StochRsi => &[14.0, 14.0, 3.0],
            IndicatorKind::Sma => &[20.0],
            IndicatorKind::Ema => &[20.0],
            IndicatorKind::Atr => &[14.0],
            IndicatorKind::BollingerBands => &[20.0, 2.0],
            IndicatorKind::Vwap | IndicatorKind::Obv => &[],
            IndicatorKind::VolumeMa => &[20.0],
            IndicatorKind::SuperTrend => &[10.0, 3.0],
            IndicatorKind::Fibonacci => &[50.0],
            IndicatorKind::SupportResistance => &[20.0],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "Relative Strength Index",
            IndicatorKind::Macd => "Moving Average Convergence Divergence",
            IndicatorKind::Stochastic => "Stochastic oscillator",
            IndicatorKind::StochRsi => "Stochastic RSI",
            IndicatorKind::Sma => "Simple Moving Average",
            IndicatorKind::Ema => "Exponential Moving Average",
            IndicatorKind::Atr => "Average True Range",
            IndicatorKind::BollingerBands => "Bollinger Bands",
            IndicatorKind::Vwap => "Volume Weighted Average Price",
            IndicatorKind::Obv => "On-Balance Volume",
            IndicatorKind::VolumeMa => "Volume moving average",
            IndicatorKind::SuperTrend => "SuperTrend trend follower",
            IndicatorKind::Fibonacci => "Fibonacci retracement levels",
            IndicatorKind::SupportResistance => "Pivot-based support and resistance levels",
        }
    }

    /// Compute a reading, validating parameters first.
    pub fn compute(
        self,
        candles: &[Candle],
        params: &[f64],
    ) -> Result<IndicatorReading, IndicatorError> {
        let provided = candles.len();
        match self {
            IndicatorKind::Rsi => {
                expect_at_most(self, params, 1)?;
                let period = period_param(self, params, 0, 14)?;
                momentum::calculate_rsi(candles, period)
                    .map(IndicatorReading::Rsi)
                    .ok_or_else(|| self.insufficient(period as usize + 1, provided))
            }
            IndicatorKind::Macd => {
                expect_at_most(self, params, 3)?;
                let fast = period_param(self, params, 0, 12)?;
                let slow = period_param(self, params, 1, 26)?;
                let signal = period_param(self, params, 2, 9)?;
                if fast >= slow {
                    return Err(IndicatorError::InvalidParameters {
                        indicator: self.name(),
                        reason: format!(
                            "fast period ({}) must be smaller than slow period ({})",
                            fast, slow
                        ),
                    });
                }
                momentum::calculate_macd(candles, fast, slow, signal)
                    .map(IndicatorReading::Macd)
                    .ok_or_else(|| self.insufficient(slow as usize, provided))
            }
            IndicatorKind::Stochastic => {
                expect_at_most(self, params, 3)?;
                let k_period = period_param(self, params, 0, 14)?;
                let d_period = period_param(self, params, 1, 3)?;
                let smooth_k = period_param(self, params, 2, 3)?;
                let required = (k_period + smooth_k + d_period) as usize - 2;
                momentum::calculate_stochastic(candles, k_period, d_period, smooth_k)
                    .map(IndicatorReading::Stochastic)
                    .ok_or_else(|| self.insufficient(required, provided))
            }
            IndicatorKind::StochRsi => {
                expect_at_most(self, params, 3)?;
                let rsi_period = period_param(self, params, 0, 14)?;
                let stoch_period = period_param(self, params, 1, 14)?;
                let k = period_param(self, params, 2, 3)?;
                let required = (rsi_period + stoch_period + k) as usize + 1;
                momentum::calculate_stoch_rsi(candles, rsi_period, stoch_period, k)
                    .map(IndicatorReading::StochRsi)
                    .ok_or_else(|| self.insufficient(required, provided))
            }
            IndicatorKind::Sma => {
                expect_at_most(self, params, 1)?;
                let period = period_param(self, params, 0, 20)?;
                trend::calculate_sma(candles, period)
                    .map(IndicatorReading::Sma)
                    .ok_or_else(|| self.insufficient(period as usize, provided))
            }
            IndicatorKind::Ema => {
                expect_at_most(self, params, 8)?;
                let periods = ema_periods(self, params)?;
                let required = periods.iter().copied().min().unwrap_or(20) as usize;
                trend::calculate_ema(candles, &periods)
                    .map(IndicatorReading::Ema)
                    .ok_or_else(|| self.insufficient(required, provided))
            }
            IndicatorKind::Atr => {
                expect_at_most(self, params, 1)?;
                let period = period_param(self, params, 0, 14)?;
                volatility::calculate_atr(candles, period)
                    .map(IndicatorReading::Atr)
                    .ok_or_else(|| self.insufficient(period as usize + 1, provided))
            }
            IndicatorKind::BollingerBands => {
                expect_at_most(self, params, 2)?;
                let period = period_param(self, params, 0, 20)?;
                let std_dev = factor_param(self, params, 1, 2.0)?;
                volatility::calculate_bollinger_bands(candles, period, std_dev)
                    .map(IndicatorReading::Bollinger)
                    .ok_or_else(|| self.insufficient(period as usize, provided))
            }
            IndicatorKind::Vwap => {
                expect_at_most(self, params, 0)?;
                volume::calculate_vwap(candles)
                    .map(IndicatorReading::Vwap)
                    .ok_or_else(|| self.insufficient(1, provided))
            }
            IndicatorKind::Obv => {
                expect_at_most(self, params, 0)?;
                volume::calculate_obv(candles)
                    .map(IndicatorReading::Obv)
                    .ok_or_else(|| self.insufficient(2, provided))
            }
            IndicatorKind::VolumeMa => {
                expect_at_most(self, params, 1)?;
                let period = period_param(self, params, 0, 20)?;
                volume::calculate_volume_ma(candles, period)
                    .map(IndicatorReading::VolumeMa)
                    .ok_or_else(|| self.insufficient(period as usize, provided))
            }
            IndicatorKind::SuperTrend => {
                expect_at_most(self, params, 2)?;
                let period = period_param(self, params, 0, 10)?;
                let multiplier = factor_param(self, params, 1, 3.0)?;
                structure::calculate_supertrend(candles, period, multiplier)
                    .map(IndicatorReading::SuperTrend)
                    .ok_or_else(|| self.insufficient(period as usize + 1, provided))
            }
            IndicatorKind::Fibonacci => {
                expect_at_most(self, params, 1)?;
                let lookback = period_param(self, params, 0, 50)?;
                structure::calculate_fibonacci(candles, lookback)
                    .map(IndicatorReading::Fibonacci)
                    .ok_or_else(|| self.insufficient(2, provided))
            }
            IndicatorKind::SupportResistance => {
                expect_at_most(self, params, 1)?;
                let lookback = period_param(self, params, 0, 20)?;
                if lookback < 5 {
                    return Err(IndicatorError::InvalidParameters {
                        indicator: self.name(),
                        reason: format!("lookback must be at least 5, got {}", lookback),
                    });
                }
                structure::calculate_support_resistance(candles, lookback)
                    .map(IndicatorReading::SupportResistance)
                    .ok_or_else(|| self.insufficient(lookback as usize, provided))
            }
        }
    }

    fn insufficient(self, required: usize, provided: usize) -> IndicatorError {
        IndicatorError::InsufficientData {
            indicator: self.name(),
            required,
            provided,
        }
    }
}

fn expect_at_most(
    kind: IndicatorKind,
    params: &[f64],
    max: usize,
) -> Result<(), IndicatorError> {
    if params.len() > max {
        return Err(IndicatorError::InvalidParameters {
            indicator: kind.name(),
            reason: format!("expects at most {} parameters, got {}", max, params.len()),
        });
    }
    Ok(())
}

fn period_param(
    kind: IndicatorKind,
    params: &[f64],
    index: usize,
    default: u32,
) -> Result<u32, IndicatorError> {
    let Some(&value) = params.get(index) else {
        return Ok(default);
    };

    if !value.is_finite() || value < 1.0 || value > 10_000.0 || value.fract() != 0.0 {
        return Err(IndicatorError::InvalidParameters {
            indicator: kind.name(),
            reason: format!(
                "parameter {} must be a whole number of periods, got {}",
                index + 1,
                value
            ),
        });
    }
    Ok(value as u32)
}

fn factor_param(
    kind: IndicatorKind,
    params: &[f64],
    index: usize,
    default: f64,
) -> Result<f64, IndicatorError> {
    let Some(&value) = params.get(index) else {
        return Ok(default);
    };

    if !value.is_finite() || value <= 0.0 {
        return Err(IndicatorError::InvalidParameters {
            indicator: kind.name(),
            reason: format!("parameter {} must be a positive factor, got {}", index + 1, value),
        });
    }
    Ok(value)
}

fn ema_periods(kind: IndicatorKind, params: &[f64]) -> Result<Vec<u32>, IndicatorError> {
    if params.is_empty() {
        return Ok(vec![20]);
    }

    let mut periods = Vec::with_capacity(params.len());
    for index in 0..params.len() {
        periods.push(period_param(kind, params, index, 20)?);
    }
    Ok(periods)
}

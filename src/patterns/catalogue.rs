//! The fixed candlestick pattern catalogue.
//!
//! Every pattern the detector knows, with its static directional bias and
//! interpretation text. Detection geometry lives in [`super::detect`].

use crate::models::pattern::PatternDirection;

/// Every candlestick pattern the engine detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Doji,
    DragonflyDoji,
    GravestoneDoji,
    LongLeggedDoji,
    FourPriceDoji,
    SpinningTop,
    Hammer,
    HangingMan,
    InvertedHammer,
    ShootingStar,
    BullishMarubozu,
    BearishMarubozu,
    BullishEngulfing,
    BearishEngulfing,
    BullishHarami,
    BearishHarami,
    PiercingLine,
    DarkCloudCover,
    MorningStar,
    EveningStar,
    ThreeWhiteSoldiers,
    ThreeBlackCrows,
}

impl PatternKind {
    pub const ALL: [PatternKind; 22] = [
        PatternKind::Doji,
        PatternKind::DragonflyDoji,
        PatternKind::GravestoneDoji,
        PatternKind::LongLeggedDoji,
        PatternKind::FourPriceDoji,
        PatternKind::SpinningTop,
        PatternKind::Hammer,
        PatternKind::HangingMan,
        PatternKind::InvertedHammer,
        PatternKind::ShootingStar,
        PatternKind::BullishMarubozu,
        PatternKind::BearishMarubozu,
        PatternKind::BullishEngulfing,
        PatternKind::BearishEngulfing,
        PatternKind::BullishHarami,
        PatternKind::BearishHarami,
        PatternKind::PiercingLine,
        PatternKind::DarkCloudCover,
        PatternKind::MorningStar,
        PatternKind::EveningStar,
        PatternKind::ThreeWhiteSoldiers,
        PatternKind::ThreeBlackCrows,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Doji => "doji",
            PatternKind::DragonflyDoji => "dragonfly_doji",
            PatternKind::GravestoneDoji => "gravestone_doji",
            PatternKind::LongLeggedDoji => "long_legged_doji",
            PatternKind::FourPriceDoji => "four_price_doji",
            PatternKind::SpinningTop => "spinning_top",
            PatternKind::Hammer => "hammer",
            PatternKind::HangingMan => "hanging_man",
            PatternKind::InvertedHammer => "inverted_hammer",
            PatternKind::ShootingStar => "shooting_star",
            PatternKind::BullishMarubozu => "bullish_marubozu",
            PatternKind::BearishMarubozu => "bearish_marubozu",
            PatternKind::BullishEngulfing => "bullish_engulfing",
            PatternKind::BearishEngulfing => "bearish_engulfing",
            PatternKind::BullishHarami => "bullish_harami",
            PatternKind::BearishHarami => "bearish_harami",
            PatternKind::PiercingLine => "piercing_line",
            PatternKind::DarkCloudCover => "dark_cloud_cover",
            PatternKind::MorningStar => "morning_star",
            PatternKind::EveningStar => "evening_star",
            PatternKind::ThreeWhiteSoldiers => "three_white_soldiers",
            PatternKind::ThreeBlackCrows => "three_black_crows",
        }
    }

    /// Static directional bias, used to bucket detections in the aggregate.
    pub fn bias(self) -> PatternDirection {
        match self {
            PatternKind::Hammer
            | PatternKind::InvertedHammer
            | PatternKind::BullishEngulfing
            | PatternKind::BullishHarami
            | PatternKind::MorningStar
            | PatternKind::ThreeWhiteSoldiers
            | PatternKind::PiercingLine
            | PatternKind::BullishMarubozu
            | PatternKind::DragonflyDoji => PatternDirection::Bullish,
            PatternKind::HangingMan
            | PatternKind::ShootingStar
            | PatternKind::BearishEngulfing
            | PatternKind::BearishHarami
            | PatternKind::EveningStar
            | PatternKind::ThreeBlackCrows
            | PatternKind::DarkCloudCover
            | PatternKind::BearishMarubozu
            | PatternKind::GravestoneDoji => PatternDirection::Bearish,
            PatternKind::Doji
            | PatternKind::SpinningTop
            | PatternKind::LongLeggedDoji
            | PatternKind::FourPriceDoji => PatternDirection::Neutral,
        }
    }

    /// Number of candles the pattern spans.
    pub fn window(self) -> usize {
        match self {
            PatternKind::Doji
            | PatternKind::DragonflyDoji
            | PatternKind::GravestoneDoji
            | PatternKind::LongLeggedDoji
            | PatternKind::FourPriceDoji
            | PatternKind::SpinningTop
            | PatternKind::Hammer
            | PatternKind::HangingMan
            | PatternKind::InvertedHammer
            | PatternKind::ShootingStar
            | PatternKind::BullishMarubozu
            | PatternKind::BearishMarubozu => 1,
            PatternKind::BullishEngulfing
            | PatternKind::BearishEngulfing
            | PatternKind::BullishHarami
            | PatternKind::BearishHarami
            | PatternKind::PiercingLine
            | PatternKind::DarkCloudCover => 2,
            PatternKind::MorningStar
            | PatternKind::EveningStar
            | PatternKind::ThreeWhiteSoldiers
            | PatternKind::ThreeBlackCrows => 3,
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            PatternKind::Doji => "Indecision - market uncertainty, potential reversal signal",
            PatternKind::DragonflyDoji => "Bullish reversal - long lower wick, buying support",
            PatternKind::GravestoneDoji => "Bearish reversal - long upper wick, selling pressure",
            PatternKind::LongLeggedDoji => "High indecision - long wicks both sides",
            PatternKind::FourPriceDoji => "Extreme indecision - all prices equal",
            PatternKind::SpinningTop => "Indecision - small body with long wicks",
            PatternKind::Hammer => "Bullish reversal - strong buying pressure after decline",
            PatternKind::HangingMan => "Bearish reversal - selling pressure after advance",
            PatternKind::InvertedHammer => "Bullish reversal - potential buying interest",
            PatternKind::ShootingStar => "Bearish reversal - selling pressure after advance",
            PatternKind::BullishMarubozu => "Strong bullish sentiment - no wicks, strong buying",
            PatternKind::BearishMarubozu => "Strong bearish sentiment - no wicks, strong selling",
            PatternKind::BullishEngulfing => "Strong bullish reversal - buyers overwhelm sellers",
            PatternKind::BearishEngulfing => "Strong bearish reversal - sellers overwhelm buyers",
            PatternKind::BullishHarami => "Bullish reversal - weakening selling pressure",
            PatternKind::BearishHarami => "Bearish reversal - weakening buying pressure",
            PatternKind::PiercingLine => "Bullish reversal - buying pressure emerges",
            PatternKind::DarkCloudCover => "Bearish reversal - selling pressure emerges",
            PatternKind::MorningStar => "Strong bullish reversal - three-candle pattern",
            PatternKind::EveningStar => "Strong bearish reversal - three-candle pattern",
            PatternKind::ThreeWhiteSoldiers => "Strong bullish continuation - sustained buying",
            PatternKind::ThreeBlackCrows => "Strong bearish continuation - sustained selling",
        }
    }
}

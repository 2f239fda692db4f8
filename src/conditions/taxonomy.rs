use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Base stimulus color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Green, Color::Red, Color::Yellow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
        }
    }

    /// Maximally distinct partner color. Applying it twice yields `self`.
    pub const fn opposite(self) -> Color {
        match self {
            Color::Blue => Color::Yellow,
            Color::Yellow => Color::Blue,
            Color::Green => Color::Red,
            Color::Red => Color::Green,
        }
    }
}

/// Perceptual dimension along which distractors vary from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dimension {
    /// Luminance.
    Lum,
    /// Chroma.
    Chr,
    Hue,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Lum, Dimension::Chr, Dimension::Hue];

    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Lum => "LUM",
            Dimension::Chr => "CHR",
            Dimension::Hue => "HUE",
        }
    }
}

/// Signed step away from the base stimulus along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Distance {
    #[serde(rename = "-2")]
    MinusTwo,
    #[serde(rename = "-1")]
    MinusOne,
    #[serde(rename = "+1")]
    PlusOne,
    #[serde(rename = "+2")]
    PlusTwo,
}

impl Distance {
    pub const ALL: [Distance; 4] = [
        Distance::MinusTwo,
        Distance::MinusOne,
        Distance::PlusOne,
        Distance::PlusTwo,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Distance::MinusTwo => "-2",
            Distance::MinusOne => "-1",
            Distance::PlusOne => "+1",
            Distance::PlusTwo => "+2",
        }
    }
}

/// Number of items shown in a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SetSize {
    Eight,
    Sixteen,
    ThirtyTwo,
}

impl SetSize {
    pub const ALL: [SetSize; 3] = [SetSize::Eight, SetSize::Sixteen, SetSize::ThirtyTwo];

    pub const fn count(self) -> u32 {
        match self {
            SetSize::Eight => 8,
            SetSize::Sixteen => 16,
            SetSize::ThirtyTwo => 32,
        }
    }
}

impl From<SetSize> for u32 {
    fn from(size: SetSize) -> Self {
        size.count()
    }
}

impl TryFrom<u32> for SetSize {
    type Error = GenerationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        SetSize::ALL
            .into_iter()
            .find(|size| size.count() == value)
            .ok_or_else(|| GenerationError::unsupported("set size", value.to_string()))
    }
}

macro_rules! closed_set_parsing {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = GenerationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| GenerationError::unsupported($kind, s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_set_parsing!(Color, "color");
closed_set_parsing!(Dimension, "dimension");
closed_set_parsing!(Distance, "distance");

impl fmt::Display for SetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Numeric columns every trading day may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Close,
    Volume,
    Volatility,
    Roe,
    Roce,
    PegRatio,
    Macd,
    Ema12,
    Ema26,
    Ema50,
    ParabolicSar,
    Rsi,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Close,
        Field::Volume,
        Field::Volatility,
        Field::Roe,
        Field::Roce,
        Field::PegRatio,
        Field::Macd,
        Field::Ema12,
        Field::Ema26,
        Field::Ema50,
        Field::ParabolicSar,
        Field::Rsi,
    ];

    /// Column name as it appears in the CSV header.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Close => "close",
            Field::Volume => "volume",
            Field::Volatility => "volatility",
            Field::Roe => "roe",
            Field::Roce => "roce",
            Field::PegRatio => "peg_ratio",
            Field::Macd => "macd",
            Field::Ema12 => "ema_12",
            Field::Ema26 => "ema_26",
            Field::Ema50 => "ema_50",
            Field::ParabolicSar => "parabolic_sar",
            Field::Rsi => "rsi",
        }
    }

    /// Upper-cased label used in tables ("peg_ratio" -> "PEG RATIO").
    pub fn label(&self) -> String {
        self.name().replace('_', " ").to_uppercase()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown field: {}. Must be one of: {}",
                    s,
                    Field::ALL.map(|f| f.name()).join(", ")
                )
            })
    }
}

/// A cell from a column outside the fixed field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

/// One trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub volatility: Option<f64>,
    pub roe: Option<f64>,
    pub roce: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub macd: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub ema_50: Option<f64>,
    pub parabolic_sar: Option<f64>,
    pub rsi: Option<f64>,
    /// Columns outside the fixed set, plus raw tokens of fixed fields that failed to parse.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, CellValue>,
}

impl DataPoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            close: None,
            volume: None,
            volatility: None,
            roe: None,
            roce: None,
            peg_ratio: None,
            macd: None,
            ema_12: None,
            ema_26: None,
            ema_50: None,
            parabolic_sar: None,
            rsi: None,
            extra: BTreeMap::new(),
        }
    }

    /// Raw stored value, NaN included.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Close => self.close,
            Field::Volume => self.volume,
            Field::Volatility => self.volatility,
            Field::Roe => self.roe,
            Field::Roce => self.roce,
            Field::PegRatio => self.peg_ratio,
            Field::Macd => self.macd,
            Field::Ema12 => self.ema_12,
            Field::Ema26 => self.ema_26,
            Field::Ema50 => self.ema_50,
            Field::ParabolicSar => self.parabolic_sar,
            Field::Rsi => self.rsi,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Close => &mut self.close,
            Field::Volume => &mut self.volume,
            Field::Volatility => &mut self.volatility,
            Field::Roe => &mut self.roe,
            Field::Roce => &mut self.roce,
            Field::PegRatio => &mut self.peg_ratio,
            Field::Macd => &mut self.macd,
            Field::Ema12 => &mut self.ema_12,
            Field::Ema26 => &mut self.ema_26,
            Field::Ema50 => &mut self.ema_50,
            Field::ParabolicSar => &mut self.parabolic_sar,
            Field::Rsi => &mut self.rsi,
        };
        *slot = value;
    }

    /// Value usable by statistics: present and not NaN.
    pub fn valid(&self, field: Field) -> Option<f64> {
        self.get(field).filter(|v| !v.is_nan())
    }
}

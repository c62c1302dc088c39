use crate::errors::FixMdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a market data entry (tag 269).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MdEntryType {
    /// Bid level, code `0`
    Bid,
    /// Offer level, code `1`
    Offer,
    /// Trade print, code `2`
    Trade,
    /// Opening price, code `4`
    Open,
    /// Closing price, code `5`
    Close,
    /// Session high, code `7`
    High,
    /// Session low, code `8`
    Low,
    /// Traded volume, code `B`
    Volume,
}

/// Persistence grouping for entry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryCategory {
    /// Bids and offers.
    BookLevel,
    /// Trade prints.
    Trade,
    /// Open, close, high, low and volume fields.
    Ohlcv,
}

impl MdEntryType {
    /// Resolves a wire code; `None` for codes the client does not interpret.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(MdEntryType::Bid),
            "1" => Some(MdEntryType::Offer),
            "2" => Some(MdEntryType::Trade),
            "4" => Some(MdEntryType::Open),
            "5" => Some(MdEntryType::Close),
            "7" => Some(MdEntryType::High),
            "8" => Some(MdEntryType::Low),
            "B" => Some(MdEntryType::Volume),
            _ => None,
        }
    }

    /// The wire code for this entry type.
    pub fn as_code(&self) -> &'static str {
        match self {
            MdEntryType::Bid => "0",
            MdEntryType::Offer => "1",
            MdEntryType::Trade => "2",
            MdEntryType::Open => "4",
            MdEntryType::Close => "5",
            MdEntryType::High => "7",
            MdEntryType::Low => "8",
            MdEntryType::Volume => "B",
        }
    }

    /// Human name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            MdEntryType::Bid => "Bid",
            MdEntryType::Offer => "Offer",
            MdEntryType::Trade => "Trade",
            MdEntryType::Open => "Open",
            MdEntryType::Close => "Close",
            MdEntryType::High => "High",
            MdEntryType::Low => "Low",
            MdEntryType::Volume => "Volume",
        }
    }

    /// Bids and offers carry a book position.
    pub fn is_book_side(&self) -> bool {
        matches!(self, MdEntryType::Bid | MdEntryType::Offer)
    }

    pub fn category(&self) -> EntryCategory {
        match self {
            MdEntryType::Bid | MdEntryType::Offer => EntryCategory::BookLevel,
            MdEntryType::Trade => EntryCategory::Trade,
            _ => EntryCategory::Ohlcv,
        }
    }
}

impl FromStr for MdEntryType {
    type Err = FixMdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MdEntryType::from_code(s).ok_or_else(|| FixMdError::InvalidFieldValue {
            field: "MDEntryType".to_string(),
            value: s.to_string(),
        })
    }
}

impl fmt::Display for MdEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

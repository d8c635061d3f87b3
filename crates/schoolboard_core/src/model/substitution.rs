//! Substitution plan entries.
//!
//! # Responsibility
//! - Model the fixed set of lesson periods.
//! - Model the substitution type as a sum type so type-specific fields can
//!   only exist on the matching variant.
//!
//! # Invariants
//! - `SubstitutionKind::Substitution` always carries a teacher.
//! - `SubstitutionKind::RoomChange` always carries a room.
//! - `SubstitutionKind::Cancelled` carries its reason in the entry `message`.
//!
//! # Wire format
//! The kind is flattened into the entry, so an entry serializes as
//! `{"id", "period", "type": "room-change", "room", "message", "date",
//! "createdAt"}` with absent keys for non-matching variants.

use super::{EpochMillis, RecordId};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static PERIOD_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d)\s*-\s*(\d)(?:\s*stunde)?\s*$").expect("valid period regex")
});

/// Double lesson slot of the school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    /// Lessons 1 and 2.
    First,
    /// Lessons 3 and 4.
    Second,
    /// Lessons 5 and 6.
    Third,
    /// Lessons 7 and 8.
    Fourth,
}

impl Period {
    pub const ALL: [Period; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Canonical label, e.g. `"1-2"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "1-2",
            Self::Second => "3-4",
            Self::Third => "5-6",
            Self::Fourth => "7-8",
        }
    }

    /// Parses canonical and display spellings (`"1-2"`, `"1 - 2 Stunde"`).
    pub fn parse(label: &str) -> Option<Self> {
        let captures = PERIOD_LABEL_RE.captures(label)?;
        match (&captures[1], &captures[2]) {
            ("1", "2") => Some(Self::First),
            ("3", "4") => Some(Self::Second),
            ("5", "6") => Some(Self::Third),
            ("7", "8") => Some(Self::Fourth),
            _ => None,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a period label is not one of the known slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPeriod(pub String);

impl Display for UnknownPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown period `{}`; expected 1-2|3-4|5-6|7-8", self.0)
    }
}

impl Error for UnknownPeriod {}

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownPeriod(value.to_string()))
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Substitution type together with its type-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SubstitutionKind {
    /// Lesson is taught by another teacher.
    Substitution { teacher: String },
    /// Lesson moves to another room.
    RoomChange { room: String },
    /// Lesson does not take place.
    Cancelled,
}

impl SubstitutionKind {
    /// Wire tag of the variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Substitution { .. } => "substitution",
            Self::RoomChange { .. } => "room-change",
            Self::Cancelled => "cancelled",
        }
    }
}

/// One row of the substitution plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionEntry {
    pub id: RecordId,
    pub period: Period,
    #[serde(flatten)]
    pub kind: SubstitutionKind,
    /// Display text; for cancelled entries this is the reason.
    pub message: String,
    pub date: NaiveDate,
    pub created_at: EpochMillis,
}

impl SubstitutionEntry {
    pub fn teacher(&self) -> Option<&str> {
        match &self.kind {
            SubstitutionKind::Substitution { teacher } => Some(teacher.as_str()),
            _ => None,
        }
    }

    pub fn room(&self) -> Option<&str> {
        match &self.kind {
            SubstitutionKind::RoomChange { room } => Some(room.as_str()),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, SubstitutionKind::Cancelled)
    }
}

/// Caller-supplied substitution fields; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubstitution {
    pub period: Period,
    pub kind: SubstitutionKind,
    pub message: String,
    pub date: NaiveDate,
}

impl NewSubstitution {
    pub(crate) fn into_entry(self, id: RecordId, created_at: EpochMillis) -> SubstitutionEntry {
        SubstitutionEntry {
            id,
            period: self.period,
            kind: self.kind,
            message: self.message,
            date: self.date,
            created_at,
        }
    }
}

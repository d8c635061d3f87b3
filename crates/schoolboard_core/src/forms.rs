//! Creation-form validation.
//!
//! # Responsibility
//! - Turn raw form input into well-typed store inputs.
//! - Compose the display message of substitution entries.
//!
//! # Invariants
//! - The store never validates; invalid drafts must be rejected here, before
//!   any store mutator runs.
//! - Every `FormError` carries a user-facing message.

use crate::config::StoreConfig;
use crate::model::{NewAnnouncement, NewSubstitution, Period, SubstitutionKind};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure of a creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingAnnouncementFields,
    MissingPeriodOrKind,
    UnknownPeriod(String),
    UnknownKind(String),
    MissingTeacher,
    MissingRoom,
    MissingReason,
}

impl FormError {
    /// Message shown to the user next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingAnnouncementFields => "Bitte füllen Sie alle Felder aus!",
            Self::MissingPeriodOrKind => "Bitte wählen Sie Stunde und Typ aus!",
            Self::UnknownPeriod(_) => "Bitte wählen Sie eine gültige Stunde aus!",
            Self::UnknownKind(_) => "Bitte wählen Sie einen gültigen Typ aus!",
            Self::MissingTeacher => "Bitte geben Sie den Vertretungslehrer ein!",
            Self::MissingRoom => "Bitte geben Sie den neuen Raum ein!",
            Self::MissingReason => "Bitte geben Sie einen Grund ein!",
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPeriod(value) => write!(f, "unknown period `{value}`"),
            Self::UnknownKind(value) => write!(f, "unknown substitution type `{value}`"),
            other => f.write_str(other.user_message()),
        }
    }
}

impl Error for FormError {}

/// Raw announcement form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementDraft {
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
}

impl AnnouncementDraft {
    pub fn validate(self, config: &StoreConfig) -> Result<NewAnnouncement, FormError> {
        let title = self.title.trim();
        let message = self.message.trim();
        if title.is_empty() || message.is_empty() {
            return Err(FormError::MissingAnnouncementFields);
        }

        Ok(NewAnnouncement {
            title: title.to_string(),
            message: message.to_string(),
            author: config.default_author.clone(),
            date: self.date,
        })
    }
}

/// Raw substitution form input.
///
/// `period` and `kind` hold the selected option labels; unused type-specific
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionDraft {
    pub period: Option<String>,
    /// `substitution`, `room-change` or `cancelled`.
    pub kind: Option<String>,
    pub teacher: String,
    pub room: String,
    pub reason: String,
    pub date: NaiveDate,
}

impl SubstitutionDraft {
    /// Empty draft for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            period: None,
            kind: None,
            teacher: String::new(),
            room: String::new(),
            reason: String::new(),
            date,
        }
    }

    pub fn validate(self) -> Result<NewSubstitution, FormError> {
        let period = non_blank(self.period.as_deref());
        let kind = non_blank(self.kind.as_deref());
        let (Some(period), Some(kind)) = (period, kind) else {
            return Err(FormError::MissingPeriodOrKind);
        };

        let period =
            Period::parse(period).ok_or_else(|| FormError::UnknownPeriod(period.to_string()))?;

        let (kind, message) = match kind {
            "substitution" => {
                let teacher =
                    non_blank(Some(self.teacher.as_str())).ok_or(FormError::MissingTeacher)?;
                (
                    SubstitutionKind::Substitution {
                        teacher: teacher.to_string(),
                    },
                    format!("Wird vertreten von: {teacher}"),
                )
            }
            "room-change" => {
                let room = non_blank(Some(self.room.as_str())).ok_or(FormError::MissingRoom)?;
                (
                    SubstitutionKind::RoomChange {
                        room: room.to_string(),
                    },
                    format!("Raumänderung: {room}"),
                )
            }
            "cancelled" => {
                let reason =
                    non_blank(Some(self.reason.as_str())).ok_or(FormError::MissingReason)?;
                (
                    SubstitutionKind::Cancelled,
                    format!("Fällt aus aufgrund von: {reason}"),
                )
            }
            other => return Err(FormError::UnknownKind(other.to_string())),
        };

        Ok(NewSubstitution {
            period,
            kind,
            message,
            date: self.date,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

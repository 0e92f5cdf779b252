//! User record model.
//!
//! A [`Record`] is one table row: a stable id, the `about` profile and the
//! `details` block. The serialized shape matches the JSON used by the dump
//! mode (`invitedBy`, upper-case status, RFC 3339 date).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status. A record always has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Active,
    Invited,
    Blocked,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Active, Status::Invited, Status::Blocked]
    }

    /// Upper-case label as shown in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Invited => "INVITED",
            Status::Blocked => "BLOCKED",
        }
    }

    /// Next status in display order, wrapping around.
    pub fn next(&self) -> Status {
        match self {
            Status::Active => Status::Invited,
            Status::Invited => Status::Blocked,
            Status::Blocked => Status::Active,
        }
    }

    /// Previous status in display order, wrapping around.
    pub fn prev(&self) -> Status {
        match self {
            Status::Active => Status::Blocked,
            Status::Invited => Status::Active,
            Status::Blocked => Status::Invited,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status label is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown status '{}' (expected ACTIVE, INVITED or BLOCKED)",
            self.0
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Status::Active),
            "INVITED" => Ok(Status::Invited),
            "BLOCKED" => Ok(Status::Blocked),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Profile part of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub status: Status,
    pub email: String,
}

/// Invitation details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub date: DateTime<Utc>,
    pub invited_by: String,
}

/// One user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub about: About,
    pub details: Details,
}

impl Record {
    pub fn status(&self) -> Status {
        self.about.status
    }

    /// Returns a copy of this record with a different status.
    pub fn with_status(&self, status: Status) -> Self {
        let mut record = self.clone();
        record.about.status = status;
        record
    }
}

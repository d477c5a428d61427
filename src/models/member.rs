//! Team member model matching the persisted JSON contract.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Membership status shown in the directory table.
///
/// Persists as the plain strings `"Active"` / `"Inactive"`; a record that
/// never had a status selected persists as `""`. Store reads are lenient
/// (anything unrecognized decodes as [`MemberStatus::Unset`]); the edit
/// boundary is strict and goes through [`MemberStatus::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberStatus {
    Active,
    Inactive,
    #[default]
    Unset,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
            MemberStatus::Unset => "",
        }
    }

    /// Strict parse used at the draft edit boundary. Values outside the
    /// enumerated set are rejected, never stored.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "Active" => Ok(MemberStatus::Active),
            "Inactive" => Ok(MemberStatus::Inactive),
            "" => Ok(MemberStatus::Unset),
            other => Err(AppError::Validation(format!(
                "Invalid status '{}': expected Active, Inactive or empty",
                other
            ))),
        }
    }
}

impl From<String> for MemberStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Active" => MemberStatus::Active,
            "Inactive" => MemberStatus::Inactive,
            _ => MemberStatus::Unset,
        }
    }
}

impl From<MemberStatus> for String {
    fn from(value: MemberStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable fields of a member draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Email,
    Role,
    Status,
    Teams,
}

impl std::str::FromStr for MemberField {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "name" => Ok(MemberField::Name),
            "email" => Ok(MemberField::Email),
            "role" => Ok(MemberField::Role),
            "status" => Ok(MemberField::Status),
            "teams" => Ok(MemberField::Teams),
            other => Err(AppError::Validation(format!("Unknown field '{}'", other))),
        }
    }
}

/// One team member record.
///
/// All fields are total: anything absent in the stored JSON defaults to the
/// empty value, so filtering never observes a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRecord {
    /// Generated stable identifier. Values stored before ids existed may
    /// lack it; one is backfilled during hydrate.
    pub id: String,
    /// Data-URI encoded profile image, or empty.
    pub profile_image: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: MemberStatus,
    pub teams: String,
}

impl MemberRecord {
    /// A blank record with a fresh id, as created by the add-form.
    pub fn blank() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    /// Set a single editable field. Status goes through the strict parse.
    pub fn set_field(&mut self, field: MemberField, value: &str) -> Result<(), AppError> {
        match field {
            MemberField::Name => self.name = value.to_string(),
            MemberField::Email => self.email = value.to_string(),
            MemberField::Role => self.role = value.to_string(),
            MemberField::Status => self.status = MemberStatus::parse(value)?,
            MemberField::Teams => self.teams = value.to_string(),
        }
        Ok(())
    }

    /// Case-insensitive substring match over the five searchable fields.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
            || self.status.as_str().to_lowercase().contains(needle)
            || self.teams.to_lowercase().contains(needle)
    }
}

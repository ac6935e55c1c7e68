use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Health status recorded for an animal when none is given.
pub const DEFAULT_HEALTH_STATUS: &str = "Good";

/// An animal joined with the name of its species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub species_id: i64,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
    pub health_status: String,
    pub species_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            _ => None,
        }
    }
}

impl ToSql for Gender {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Gender {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Self::from_str(s).ok_or_else(|| FromSqlError::Other(format!("unknown gender: {s}").into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnimalInput {
    pub name: String,
    pub species_id: i64,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
    /// Defaults to [`DEFAULT_HEALTH_STATUS`].
    pub health_status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAnimalInput {
    pub name: Option<String>,
    pub species_id: Option<i64>,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
    pub health_status: Option<String>,
}

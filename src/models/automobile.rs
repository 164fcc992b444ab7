use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A single vehicle record, keyed externally by its VIN.
///
/// Absent optional fields are left out of the JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Automobile {
    /// Store-assigned identifier; 0 until the record is persisted.
    #[serde(default)]
    pub id: i64,
    #[sqlx(rename = "model_year")]
    #[validate(range(min = 1886, max = 9999))]
    pub year: i32,
    #[validate(length(min = 1, max = 255))]
    pub make: String,
    #[validate(length(min = 1, max = 255))]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub color: Option<String>,
    #[sqlx(rename = "owner_name")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "purchase_date_format")]
    pub purchase_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 17), custom = "validate_vin")]
    pub vin: String,
}

impl Automobile {
    pub fn new(year: i32, make: &str, model: &str, vin: &str) -> Self {
        Self {
            id: 0,
            year,
            make: make.to_string(),
            model: model.to_string(),
            color: None,
            owner: None,
            purchase_date: None,
            vin: vin.to_string(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

fn validate_vin(vin: &str) -> Result<(), ValidationError> {
    if vin.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("vin_whitespace"));
    }
    Ok(())
}

/// Body of `PATCH /api/autos/{vin}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOwnerRequest {
    #[validate(length(max = 255))]
    pub color: String,
    #[validate(length(max = 255))]
    pub owner: String,
}

/// Envelope for listing responses: `{"automobiles": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutosList {
    pub automobiles: Vec<Automobile>,
}

impl AutosList {
    pub fn new(automobiles: Vec<Automobile>) -> Self {
        Self { automobiles }
    }

    pub fn is_empty(&self) -> bool {
        self.automobiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.automobiles.len()
    }
}

// Purchase dates travel as MM/DD/YYYY.
mod purchase_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveDate::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("Invalid purchase date: {}", s))),
            None => Ok(None),
        }
    }
}

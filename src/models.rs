//! Record models and typed request inputs
//!
//! Records map 1:1 to table rows. Inputs are what the HTTP layer accepts;
//! `validate()` runs before anything reaches the store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize};

// ==================
// Season
// ==================

/// Seasonal availability tag of a flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    #[serde(rename = "All-Season")]
    AllSeason,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::AllSeason,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::AllSeason => "All-Season",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| format!("unknown season '{}'", s))
    }
}

impl ToSql for Season {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Season {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

// ==================
// Records
// ==================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flavor {
    pub id: i64,
    pub name: String,
    pub season: Season,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub allergen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSuggestion {
    pub id: i64,
    pub flavor_name: String,
    pub allergies: String,
    pub submitted_date: DateTime<Utc>,
}

// ==================
// Inputs
// ==================

/// Why an input was rejected before reaching the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput(pub String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFlavor {
    pub name: String,
    pub season: Season,
    #[serde(default = "default_available", deserialize_with = "available_or_default")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// `null` counts as absent.
fn available_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_available))
}

impl NewFlavor {
    pub fn validate(mut self) -> Result<Self, InvalidInput> {
        self.name = required_text("name", self.name)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    #[serde(deserialize_with = "quantity_from_json")]
    pub quantity: f64,
    pub unit: String,
    #[serde(deserialize_with = "flag_from_json")]
    pub allergen: bool,
}

impl NewIngredient {
    pub fn validate(mut self) -> Result<Self, InvalidInput> {
        self.name = required_text("name", self.name)?;
        self.unit = required_text("unit", self.unit)?;
        check_quantity(self.quantity)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuantityUpdate {
    #[serde(deserialize_with = "quantity_from_json")]
    pub quantity: f64,
}

impl QuantityUpdate {
    pub fn validate(self) -> Result<Self, InvalidInput> {
        check_quantity(self.quantity)?;
        Ok(self)
    }
}

/// A customer suggestion as submitted. There is deliberately no date field:
/// any `submitted_date` in the body is dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSuggestion {
    pub flavor_name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub allergies: String,
}

/// `null` counts as absent.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewSuggestion {
    pub fn validate(mut self) -> Result<Self, InvalidInput> {
        self.flavor_name = required_text("flavor_name", self.flavor_name)?;
        Ok(self)
    }
}

fn required_text(field: &str, value: String) -> Result<String, InvalidInput> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn check_quantity(quantity: f64) -> Result<(), InvalidInput> {
    if !quantity.is_finite() {
        return Err(InvalidInput("quantity must be a finite number".to_string()));
    }
    if quantity < 0.0 {
        return Err(InvalidInput(format!(
            "quantity must be >= 0, got {}",
            quantity
        )));
    }
    Ok(())
}

// ==================
// Lenient scalars
// ==================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts `12.5` or `"12.5"`.
fn quantity_from_json<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("quantity '{}' is not a number", s))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrNumber {
    Bool(bool),
    Number(f64),
}

/// Accepts `true`/`false`, or a number where non-zero is true.
fn flag_from_json<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolOrNumber::deserialize(deserializer)? {
        BoolOrNumber::Bool(b) => Ok(b),
        BoolOrNumber::Number(n) => Ok(n != 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_season_wire_names() {
        for season in Season::ALL {
            let value = serde_json::to_value(season).unwrap();
            assert_eq!(value, json!(season.as_str()));
            assert_eq!(season.as_str().parse::<Season>().unwrap(), season);
        }
        assert!("autumn".parse::<Season>().is_err());
    }

    #[test]
    fn test_flavor_available_defaults_true() {
        let input: NewFlavor =
            serde_json::from_value(json!({"name": "Mint Bark", "season": "Summer"})).unwrap();
        assert!(input.available);
        assert_eq!(input.season, Season::Summer);
    }

    #[test]
    fn test_null_optional_fields_take_defaults() {
        let flavor: NewFlavor = serde_json::from_value(
            json!({"name": "Mint Bark", "season": "Summer", "available": null}),
        )
        .unwrap();
        assert!(flavor.available);

        let suggestion: NewSuggestion =
            serde_json::from_value(json!({"flavor_name": "Chili Mango", "allergies": null}))
                .unwrap();
        assert_eq!(suggestion.allergies, "");
    }

    #[test]
    fn test_flavor_unknown_season_rejected() {
        let result: Result<NewFlavor, _> =
            serde_json::from_value(json!({"name": "Mint Bark", "season": "Monsoon"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_flavor_blank_name_rejected() {
        let input: NewFlavor =
            serde_json::from_value(json!({"name": "   ", "season": "Winter"})).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_ingredient_quantity_from_text() {
        let input: NewIngredient = serde_json::from_value(json!({
            "name": "Sugar",
            "quantity": "12.5",
            "unit": "kg",
            "allergen": 0
        }))
        .unwrap();
        assert_eq!(input.quantity, 12.5);
        assert!(!input.allergen);
    }

    #[test]
    fn test_ingredient_negative_quantity_rejected() {
        let input: NewIngredient = serde_json::from_value(json!({
            "name": "Sugar",
            "quantity": -1,
            "unit": "kg",
            "allergen": false
        }))
        .unwrap();
        let err = input.validate().unwrap_err();
        assert!(err.0.contains("quantity"));
    }

    #[test]
    fn test_quantity_text_must_parse() {
        let result: Result<QuantityUpdate, _> =
            serde_json::from_value(json!({"quantity": "lots"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_suggestion_ignores_client_date() {
        let input: NewSuggestion = serde_json::from_value(json!({
            "flavor_name": "Chili Mango",
            "submitted_date": "1999-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(input.allergies, "");
        assert_eq!(input.validate().unwrap().flavor_name, "Chili Mango");
    }

    #[test]
    fn test_flavor_serializes_all_fields() {
        let flavor = Flavor {
            id: 1,
            name: "Apple Blend".to_string(),
            season: Season::AllSeason,
            available: true,
        };
        assert_eq!(
            serde_json::to_value(&flavor).unwrap(),
            json!({"id": 1, "name": "Apple Blend", "season": "All-Season", "available": true})
        );
    }
}

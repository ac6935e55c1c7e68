use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodType {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub storage_requirements: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodTypeInput {
    pub name: String,
    pub unit: String,
    pub storage_requirements: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFoodTypeInput {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub storage_requirements: Option<String>,
}

/// A stock entry joined with the name of its food type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodInventoryItem {
    pub id: i64,
    pub food_type_id: i64,
    pub food_type_name: String,
    pub quantity: f64,
    pub expiration_date: Option<NaiveDate>,
    pub last_updated: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodInventoryInput {
    pub food_type_id: i64,
    pub quantity: f64,
    pub expiration_date: Option<NaiveDate>,
}

/// `last_updated` is not part of the input; every write stamps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFoodInventoryInput {
    pub food_type_id: Option<i64>,
    pub quantity: Option<f64>,
    pub expiration_date: Option<NaiveDate>,
}

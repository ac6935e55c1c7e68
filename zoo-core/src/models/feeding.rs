use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A feeding event joined with the animal, food type and staff names it links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feeding {
    pub id: i64,
    pub animal_id: i64,
    pub animal_name: String,
    pub food_type_id: i64,
    pub food_type_name: String,
    pub staff_id: i64,
    pub staff_name: String,
    pub quantity: f64,
    pub notes: Option<String>,
    pub feeding_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFeedingInput {
    pub animal_id: i64,
    pub food_type_id: i64,
    pub staff_id: i64,
    pub quantity: f64,
    pub notes: Option<String>,
    /// Defaults to the current local time.
    pub feeding_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFeedingInput {
    pub animal_id: Option<i64>,
    pub food_type_id: Option<i64>,
    pub staff_id: Option<i64>,
    pub quantity: Option<f64>,
    pub notes: Option<String>,
    pub feeding_date: Option<NaiveDateTime>,
}

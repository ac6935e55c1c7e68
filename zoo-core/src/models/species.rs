use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: i64,
    pub name: String,
    pub habitat: String,
    pub diet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSpeciesInput {
    pub name: String,
    pub habitat: String,
    pub diet: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSpeciesInput {
    pub name: Option<String>,
    pub habitat: Option<String>,
    pub diet: Option<String>,
}

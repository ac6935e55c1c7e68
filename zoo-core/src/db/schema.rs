/// Tables are listed so that every referenced table is created before the
/// tables that point at it.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS Species (
    speciesID INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    habitat TEXT NOT NULL,
    diet TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Animals (
    animalID INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    speciesID INTEGER NOT NULL REFERENCES Species(speciesID),
    gender TEXT CHECK (gender IS NULL OR gender IN ('Male', 'Female')),
    birthdate TEXT,
    health_status TEXT NOT NULL DEFAULT 'Good'
);

CREATE TABLE IF NOT EXISTS FoodTypes (
    foodTypeID INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    unit TEXT NOT NULL,
    storage_requirements TEXT
);

CREATE TABLE IF NOT EXISTS FoodInventory (
    inventoryID INTEGER PRIMARY KEY,
    foodTypeID INTEGER NOT NULL REFERENCES FoodTypes(foodTypeID),
    quantity REAL NOT NULL CHECK (quantity >= 0),
    expiration_date TEXT,
    last_updated TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Roles (
    roleID INTEGER PRIMARY KEY,
    title TEXT NOT NULL UNIQUE,
    department TEXT NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS Staff (
    staffID INTEGER PRIMARY KEY,
    firstName TEXT NOT NULL,
    lastName TEXT NOT NULL,
    roleID INTEGER NOT NULL REFERENCES Roles(roleID),
    country TEXT NOT NULL,
    hire_date TEXT NOT NULL,
    salary REAL NOT NULL CHECK (salary > 0)
);

CREATE TABLE IF NOT EXISTS Feeding (
    feedingID INTEGER PRIMARY KEY,
    animalID INTEGER NOT NULL REFERENCES Animals(animalID),
    foodTypeID INTEGER NOT NULL REFERENCES FoodTypes(foodTypeID),
    staffID INTEGER NOT NULL REFERENCES Staff(staffID),
    feeding_date TEXT NOT NULL,
    quantity REAL NOT NULL CHECK (quantity > 0),
    notes TEXT
);

CREATE TABLE IF NOT EXISTS AnimalCare (
    careID INTEGER PRIMARY KEY,
    animalID INTEGER NOT NULL REFERENCES Animals(animalID),
    staffID INTEGER NOT NULL REFERENCES Staff(staffID),
    care_date TEXT NOT NULL,
    care_type TEXT NOT NULL,
    notes TEXT
);

CREATE INDEX IF NOT EXISTS idx_animals_species ON Animals(speciesID);
CREATE INDEX IF NOT EXISTS idx_inventory_food_type ON FoodInventory(foodTypeID);
CREATE INDEX IF NOT EXISTS idx_staff_role ON Staff(roleID);
CREATE INDEX IF NOT EXISTS idx_feeding_animal ON Feeding(animalID);
CREATE INDEX IF NOT EXISTS idx_feeding_food_type ON Feeding(foodTypeID);
CREATE INDEX IF NOT EXISTS idx_feeding_staff ON Feeding(staffID);
CREATE INDEX IF NOT EXISTS idx_care_animal ON AnimalCare(animalID);
CREATE INDEX IF NOT EXISTS idx_care_staff ON AnimalCare(staffID);
"#;

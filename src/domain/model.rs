use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Missing and `null` both collapse to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A pet as delivered by the owner API. Equality is structural over name and type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub pet_type: String,
}

impl Pet {
    pub fn new(name: impl Into<String>, pet_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pet_type: pet_type.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pets: Vec<Pet>,
}

impl Owner {
    pub fn new(gender: impl Into<String>, pets: Vec<Pet>) -> Self {
        Self {
            gender: gender.into(),
            pets,
            ..Self::default()
        }
    }
}

/// One gender group of the report: deduplicated pets sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub gender: String,
    pub pets: Vec<Pet>,
}

impl ReportEntry {
    pub fn pet_names(&self) -> Vec<&str> {
        self.pets.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Pet types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetType {
    Cat,
    Dog,
    Fish,
}

impl PetType {
    pub const ALL: [PetType; 3] = [PetType::Cat, PetType::Dog, PetType::Fish];

    pub fn label(&self) -> &'static str {
        match self {
            PetType::Cat => "Cat",
            PetType::Dog => "Dog",
            PetType::Fish => "Fish",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPetType(pub String);

impl fmt::Display for UnknownPetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pet type '{}'", self.0)
    }
}

impl std::error::Error for UnknownPetType {}

impl FromStr for PetType {
    type Err = UnknownPetType;

    // 大小寫敏感，"cat" 不算
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PetType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownPetType(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PetFilter {
    #[default]
    NoFilter,
    ByType(String),
}

impl PetFilter {
    /// Unrecognised or absent tokens mean no filter; they are never an error.
    pub fn from_arg(token: Option<&str>) -> Self {
        match token.map(str::parse::<PetType>) {
            Some(Ok(pet_type)) => PetFilter::ByType(pet_type.label().to_string()),
            _ => PetFilter::NoFilter,
        }
    }

    /// The explicit token wins when it parses, otherwise the configured default is tried.
    pub fn resolve(explicit: Option<&str>, default: Option<&str>) -> Self {
        if let Some(token) = explicit {
            match token.parse::<PetType>() {
                Ok(pet_type) => return PetFilter::ByType(pet_type.label().to_string()),
                Err(e) => tracing::warn!(
                    "⚠️ Ignoring pet type argument: {} (expected one of {})",
                    e,
                    PetType::ALL.map(|t| t.label()).join(", ")
                ),
            }
        }
        PetFilter::from_arg(default)
    }

    pub fn matches(&self, pet: &Pet) -> bool {
        match self {
            PetFilter::NoFilter => true,
            PetFilter::ByType(pet_type) => pet.pet_type == *pet_type,
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetFilter::NoFilter => f.write_str("none"),
            PetFilter::ByType(pet_type) => f.write_str(pet_type),
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m", alias = "male")]
    Male,
    #[serde(rename = "f", alias = "female")]
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record as served by the people endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub sex: Sex,
    pub born: i32,
    #[serde(default)]
    pub died: Option<i32>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
}

impl Person {
    pub fn slug(&self) -> String {
        slug_of(&self.name, self.born)
    }
}

/// "Bill Clinton", 1946 -> "bill-clinton-1946"
pub fn slug_of(name: &str, born: i32) -> String {
    format!("{}-{born}", name.to_lowercase().replace(' ', "-"))
}

pub const DEFAULT_PEOPLE_URL: &str =
    "https://mate-academy.github.io/react_people-table/api/people.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub people_url: String,
}

impl Config {
    /// Set PEOPLE_API_URL at build time (e.g. `PEOPLE_API_URL=... trunk build`)
    /// to point at another endpoint.
    pub fn from_env() -> Self {
        Self::with_override(option_env!("PEOPLE_API_URL"))
    }

    fn with_override(url: Option<&str>) -> Self {
        let people_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_PEOPLE_URL)
            .to_string();
        Self { people_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_override(None)
    }
}

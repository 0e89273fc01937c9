use crate::api::FetchError;
use crate::person::Person;
use crate::resolve::{resolve, ResolvedPerson};

pub const NO_PEOPLE_MESSAGE: &str = "There are no people on the server";

/// What the people page is showing. Exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleState {
    Loading,
    Failed(String),
    Empty,
    Loaded(Vec<ResolvedPerson>),
}

impl PeopleState {
    /// Loading beats error, error beats empty.
    pub fn from_parts(loading: bool, error: Option<&str>, people: Vec<ResolvedPerson>) -> Self {
        if loading {
            return PeopleState::Loading;
        }
        if let Some(message) = error.filter(|m| !m.is_empty()) {
            return PeopleState::Failed(message.to_string());
        }
        if people.is_empty() {
            PeopleState::Empty
        } else {
            PeopleState::Loaded(people)
        }
    }

    pub fn from_fetch(result: &Result<Vec<Person>, FetchError>) -> Self {
        match result {
            Ok(people) => Self::from_parts(false, None, resolve(people)),
            Err(e) => PeopleState::Failed(e.user_message().to_string()),
        }
    }
}

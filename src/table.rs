use std::collections::HashMap;

use crate::person::{Person, Sex};
use crate::resolve::ResolvedPerson;

pub const MISSING_PARENT: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentCell {
    /// Parent found in the data set; text is the stored name.
    Link { name: String, slug: String },
    Text(String),
}

impl ParentCell {
    fn new(stored_name: Option<&str>, resolved: Option<&Person>) -> Self {
        let stored_name = stored_name.filter(|n| !n.is_empty());
        match (stored_name, resolved) {
            (Some(name), Some(parent)) => ParentCell::Link {
                name: name.to_string(),
                slug: parent.slug(),
            },
            (Some(name), None) => ParentCell::Text(name.to_string()),
            (None, _) => ParentCell::Text(MISSING_PARENT.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub key: String,
    pub slug: String,
    pub name: String,
    pub sex: Sex,
    pub born: i32,
    pub died: String,
    pub mother: ParentCell,
    pub father: ParentCell,
    pub selected: bool,
}

impl PersonRow {
    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}

pub fn build_rows(people: &[ResolvedPerson], selected: Option<&str>) -> Vec<PersonRow> {
    let mut used_keys: HashMap<&str, usize> = HashMap::new();

    people
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let seen = used_keys.entry(p.slug.as_str()).or_insert(0);
            let key = if *seen == 0 { p.slug.clone() } else { format!("{}~{i}", p.slug) };
            *seen += 1;

            PersonRow {
                key,
                slug: p.slug.clone(),
                name: p.person.name.clone(),
                sex: p.person.sex,
                born: p.person.born,
                died: p.person.died.map(|y| y.to_string()).unwrap_or_default(),
                mother: ParentCell::new(p.person.mother_name.as_deref(), p.mother.as_ref()),
                father: ParentCell::new(p.person.father_name.as_deref(), p.father.as_ref()),
                selected: selected == Some(p.slug.as_str()),
            }
        })
        .collect()
}

use std::collections::HashMap;

use crate::person::Person;

/// A person with parents looked up by name within the same data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPerson {
    pub person: Person,
    pub slug: String,
    pub mother: Option<Person>,
    pub father: Option<Person>,
}

struct NameIndex<'a> {
    by_name: HashMap<&'a str, &'a Person>,
}

impl<'a> NameIndex<'a> {
    fn build(people: &'a [Person]) -> Self {
        let mut by_name = HashMap::with_capacity(people.len());
        for person in people {
            // first occurrence wins on duplicate names
            by_name.entry(person.name.as_str()).or_insert(person);
        }
        Self { by_name }
    }

    fn find(&self, name: Option<&str>) -> Option<&'a Person> {
        let name = name.filter(|n| !n.is_empty())?;
        self.by_name.get(name).copied()
    }
}

pub fn resolve(people: &[Person]) -> Vec<ResolvedPerson> {
    let index = NameIndex::build(people);

    people
        .iter()
        .map(|person| ResolvedPerson {
            slug: person.slug(),
            mother: index.find(person.mother_name.as_deref()).cloned(),
            father: index.find(person.father_name.as_deref()).cloned(),
            person: person.clone(),
        })
        .collect()
}

/// Slugs carried by more than one record, in order of first repeat.
pub fn duplicate_slugs(people: &[ResolvedPerson]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut dups = Vec::new();
    for p in people {
        let count = seen.entry(p.slug.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            dups.push(p.slug.clone());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Sex;
    use proptest::prelude::*;

    fn person(name: &str, born: i32, mother: Option<&str>, father: Option<&str>) -> Person {
        Person {
            name: name.to_string(),
            sex: Sex::Male,
            born,
            died: None,
            mother_name: mother.map(str::to_string),
            father_name: father.map(str::to_string),
        }
    }

    #[test]
    fn links_mother_by_exact_name() {
        let people = vec![person("A", 1900, Some("B"), None), person("B", 1870, None, None)];

        let resolved = resolve(&people);

        assert_eq!(resolved[0].slug, "a-1900");
        assert_eq!(resolved[0].mother.as_ref(), Some(&people[1]));
        assert_eq!(resolved[0].father, None);
        assert_eq!(resolved[1].mother, None);
        assert_eq!(resolved[1].father, None);
    }

    #[test]
    fn unknown_or_empty_parent_names_stay_unresolved() {
        let people = vec![
            person("", 1800, None, None),
            person("Child", 1900, Some("Nobody"), Some("")),
        ];

        let resolved = resolve(&people);

        assert_eq!(resolved[1].mother, None);
        assert_eq!(resolved[1].father, None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let people = vec![person("Child", 1900, None, Some("pieter")), person("Pieter", 1870, None, None)];
        assert_eq!(resolve(&people)[0].father, None);
    }

    #[test]
    fn first_duplicate_name_wins() {
        let people = vec![
            person("Child", 1900, Some("Mary"), None),
            person("Mary", 1870, None, None),
            person("Mary", 1875, None, None),
        ];

        let resolved = resolve(&people);

        assert_eq!(resolved[0].mother.as_ref().map(|m| m.born), Some(1870));
    }

    #[test]
    fn keeps_input_order() {
        let people = vec![person("Z", 1950, None, None), person("A", 1900, None, None)];
        let slugs: Vec<_> = resolve(&people).into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, ["z-1950", "a-1900"]);
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        assert!(resolve(&[]).is_empty());
    }

    #[test]
    fn reports_colliding_slugs_once() {
        let people = vec![
            person("Jan", 1900, None, None),
            person("Jan", 1900, None, None),
            person("Jan", 1900, None, None),
            person("Piet", 1901, None, None),
        ];

        assert_eq!(duplicate_slugs(&resolve(&people)), ["jan-1900"]);
    }

    fn arb_people() -> impl Strategy<Value = Vec<Person>> {
        let names = prop::sample::select(vec!["Ann", "Bob", "Cy", "Dee", "Eve"]);
        let parent = prop::option::of(prop::sample::select(vec!["Ann", "Bob", "Cy", "Nobody", ""]));
        prop::collection::vec((names, 1800..2000i32, parent.clone(), parent), 0..12).prop_map(|rows| {
            rows.into_iter()
                .map(|(name, born, mother, father)| person(name, born, mother, father))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn resolve_is_deterministic(people in arb_people()) {
            prop_assert_eq!(resolve(&people), resolve(&people));
        }

        #[test]
        fn mother_is_first_person_with_that_name(people in arb_people()) {
            for (p, r) in people.iter().zip(resolve(&people)) {
                let expected = p
                    .mother_name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .and_then(|n| people.iter().find(|q| q.name == n));
                prop_assert_eq!(r.mother.as_ref(), expected);
            }
        }
    }
}

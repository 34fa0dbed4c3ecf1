//! Oldest-person selection.

use crate::core::person::Person;

/// Age used for comparison: the actual age, or 0 when absent.
pub fn effective_age(person: &Person) -> i32 {
    person.age.unwrap_or(0)
}

/// Select the person with the greatest effective age.
///
/// Ties go to the first such person in input order. Returns `None` for an
/// empty roster.
pub fn oldest(roster: &[Person]) -> Option<&Person> {
    let mut best: Option<&Person> = None;
    for candidate in roster {
        // Strict `>` keeps the first of equal ages.
        if best.is_none_or(|current| effective_age(candidate) > effective_age(current)) {
            best = Some(candidate);
        }
    }
    best
}

/// The fixed two-person roster used when no config overrides it.
pub fn default_roster() -> Vec<Person> {
    vec![Person::new("Alice"), Person::with_age("Bob", 29)]
}

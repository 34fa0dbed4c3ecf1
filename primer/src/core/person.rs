use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    /// Absent when unknown; never defaulted to a sentinel.
    #[serde(default)]
    pub age: Option<i32>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: None,
        }
    }

    pub fn with_age(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age: Some(age),
        }
    }
}

/// Renders as `Person(name=<name>, age=<age|null>)`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.age {
            Some(age) => write!(f, "Person(name={}, age={})", self.name, age),
            None => write!(f, "Person(name={}, age=null)", self.name),
        }
    }
}

use std::sync::Arc;

use super::person::{roster, Person};

/// Read-only handle on the people served by the API. Cloning shares the same
/// underlying slice, so every HTTP worker can hold one without locking.
#[derive(Clone, Debug)]
pub struct Directory {
    people: Arc<[Person]>,
}

impl Directory {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: people.into(),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(roster())
    }
}

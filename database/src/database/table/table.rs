use thiserror::Error;

use crate::{
    consts::consts::{PersonId, INITIAL_ID},
    database::options::IdAssignment,
    model::person::{NewPerson, Person},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    // CRUD - CREATE
    #[error("Name and surname are required")]
    Validation,

    #[error("Person already exists")]
    Duplicate { name: String, surname: String },

    // CRUD - DELETE
    #[error("Person with specified id not found")]
    NotFound(PersonId),
}

/// Ordered collection of people plus the id counter.
///
/// Not synchronised on its own, callers go through [`crate::database::database::Database`]
/// which holds the only lock.
pub struct PersonTable {
    people: Vec<Person>,
    next_id: PersonId,
    id_assignment: IdAssignment,
}

impl PersonTable {
    pub fn new(id_assignment: IdAssignment) -> Self {
        Self {
            people: Vec::new(),
            next_id: INITIAL_ID,
            id_assignment,
        }
    }

    // Each add can be broken up into 3 steps
    //  - Verifying validity / constraints (required fields, uniqueness)
    //  - Assigning the id
    //  - Appending
    pub fn add(&mut self, new_person: NewPerson) -> Result<Person, RegistryError> {
        if self.id_assignment == IdAssignment::BeforeValidation {
            self.next_id = self.next_id.increment();
        }

        if !new_person.has_required_fields() {
            return Err(RegistryError::Validation);
        }

        if self.people.iter().any(|p| p.same_name(&new_person)) {
            return Err(RegistryError::Duplicate {
                name: new_person.name,
                surname: new_person.surname,
            });
        }

        if self.id_assignment == IdAssignment::AfterValidation {
            self.next_id = self.next_id.increment();
        }

        let person = Person::from_new(self.next_id, new_person);
        self.people.push(person.clone());

        Ok(person)
    }

    pub fn list(&self) -> Vec<Person> {
        self.people.clone()
    }

    /// Removes the first person with `id`, keeping the order of everyone else
    pub fn delete(&mut self, id: PersonId) -> Result<Person, RegistryError> {
        let index = self
            .people
            .iter()
            .position(|p| p.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        Ok(self.people.remove(index))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Default for PersonTable {
    fn default() -> Self {
        Self::new(IdAssignment::default())
    }
}

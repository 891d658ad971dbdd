use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    consts::consts::PersonId,
    model::person::{NewPerson, Person},
};

use super::{
    options::DatabaseOptions,
    table::table::{PersonTable, RegistryError},
};

/// Process wide registry of people.
///
/// Every operation, reads included, runs under a single exclusive lock for its whole duration
/// so that the uniqueness scan in `add` and the search in `delete` never observe a half updated
/// table. Share it behind an `Arc` (or `actix_web::web::Data`).
pub struct Database {
    person_table: Mutex<PersonTable>,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> Self {
        log::debug!("Creating registry [id assignment: {:?}]", options.id_assignment);

        Self {
            person_table: Mutex::new(PersonTable::new(options.id_assignment)),
        }
    }

    pub fn new_test() -> Self {
        Self::new(DatabaseOptions::default())
    }

    pub fn add(&self, new_person: NewPerson) -> Result<Person, RegistryError> {
        self.table().add(new_person)
    }

    pub fn list(&self) -> Vec<Person> {
        self.table().list()
    }

    pub fn delete(&self, id: PersonId) -> Result<(), RegistryError> {
        self.table().delete(id).map(|_| ())
    }

    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    // A panic while holding the lock cannot leave the table half written (every mutation is a
    //  single push / remove), so a poisoned lock is safe to keep using.
    fn table(&self) -> MutexGuard<'_, PersonTable> {
        self.person_table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(DatabaseOptions::default())
    }
}

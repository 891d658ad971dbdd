use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn to_number(self) -> u64 {
        self.0
    }

    pub fn increment(&self) -> PersonId {
        PersonId(self.0 + 1)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PersonId(s.parse()?))
    }
}

// Values
/// The counter starts here and is incremented before every assignment, so the first id handed out is 1
pub const INITIAL_ID: PersonId = PersonId(0);

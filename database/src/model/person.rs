use std::fmt;

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::consts::consts::PersonId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub developer: String,
}

impl Person {
    pub fn from_new(id: PersonId, new_person: NewPerson) -> Self {
        Person {
            id,
            name: new_person.name,
            surname: new_person.surname,
            developer: new_person.developer,
        }
    }

    pub fn same_name(&self, other: &NewPerson) -> bool {
        self.name == other.name && self.surname == other.surname
    }
}

/// A person as submitted by a client, before the registry has assigned it an id.
///
/// Decoding is lenient: keys match case-insensitively and `null` leaves a field empty.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub developer: String,
}

impl<'de> Deserialize<'de> for NewPerson {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NewPersonVisitor)
    }
}

/// Keys match case-insensitively and the last occurrence wins. A missing or `null` field
/// stays empty, so a missing `name` or `surname` reaches validation instead of failing to
/// decode. Unknown keys (including a client supplied `id`) are skipped.
struct NewPersonVisitor;

impl<'de> Visitor<'de> for NewPersonVisitor {
    type Value = NewPerson;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a person object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<NewPerson, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut new_person = NewPerson::default();

        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("name") {
                &mut new_person.name
            } else if key.eq_ignore_ascii_case("surname") {
                &mut new_person.surname
            } else if key.eq_ignore_ascii_case("developer") {
                &mut new_person.developer
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }

        Ok(new_person)
    }
}

impl NewPerson {
    pub fn new(name: &str, surname: &str) -> Self {
        NewPerson {
            name: name.to_string(),
            surname: surname.to_string(),
            developer: String::new(),
        }
    }

    pub fn with_developer(mut self, developer: &str) -> Self {
        self.developer = developer.to_string();
        self
    }

    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.surname.is_empty()
    }

    pub fn new_test() -> Self {
        NewPerson::new("Ada", "Lovelace")
    }
}

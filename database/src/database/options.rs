/// Controls when the registry hands out an id relative to validating the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdAssignment {
    /// Validate first, only successful adds consume an id
    #[default]
    AfterValidation,
    /// Legacy sequence: every add attempt that reaches the store consumes an id, even one that
    /// is then rejected. Produces gaps in the id sequence.
    BeforeValidation,
}

#[derive(Debug, Clone, Default)]
pub struct DatabaseOptions {
    pub id_assignment: IdAssignment,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    pub fn set_id_assignment(mut self, id_assignment: IdAssignment) -> Self {
        self.id_assignment = id_assignment;
        self
    }
}

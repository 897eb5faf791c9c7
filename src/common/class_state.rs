use crate::common::StudentRecord;

/// Point-in-time copy of a replica's roster. This is what clients list, admins dump, and replicas
/// gossip to each other.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassState {
    pub capacity: u32,
    pub open_enrollments: bool,
    pub enrolled: Vec<StudentRecord>,
    pub discarded: Vec<StudentRecord>,
}

impl ClassState {
    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.enrolled.iter().any(|s| s.id == student_id)
    }

    pub fn is_discarded(&self, student_id: &str) -> bool {
        self.discarded.iter().any(|s| s.id == student_id)
    }
}

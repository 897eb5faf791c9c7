use crate::common::{ClassState, StudentRecord};
use std::collections::BTreeMap;

/// Roster is the mutable enrollment state of one replica.
///
/// A student id is in at most one of `enrolled` and `discarded`. `enrolled.len() <= capacity` is
/// what local writes aim for, but merging divergent replicas may overshoot it.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Roster {
    capacity: u32,
    open_enrollments: bool,
    // Ordered, so snapshots and merges walk students in the same order on every replica.
    enrolled: BTreeMap<String, String>,
    discarded: BTreeMap<String, String>,
}

impl Roster {
    pub(crate) fn new() -> Self {
        Roster::default()
    }

    /// Seed a roster from a snapshot: enroll its students, then cancel its discarded ones. A
    /// discarded id that the snapshot doesn't also list as enrolled is dropped, and one listed in
    /// both ends up discarded.
    pub(crate) fn from_state(state: ClassState) -> Self {
        let mut roster = Roster {
            capacity: state.capacity,
            open_enrollments: state.open_enrollments,
            enrolled: BTreeMap::new(),
            discarded: BTreeMap::new(),
        };
        for student in state.enrolled {
            roster.enroll(student.id, student.name);
        }
        for student in state.discarded.iter() {
            roster.cancel_enrollment(&student.id);
        }

        roster
    }

    pub(crate) fn capacity(&self) -> u32 {
        self.capacity
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open_enrollments
    }

    pub(crate) fn class_size(&self) -> usize {
        self.enrolled.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.class_size() >= self.capacity as usize
    }

    pub(crate) fn is_enrolled(&self, student_id: &str) -> bool {
        self.enrolled.contains_key(student_id)
    }

    pub(crate) fn is_discarded(&self, student_id: &str) -> bool {
        self.discarded.contains_key(student_id)
    }

    /// Capacity only ever grows.
    pub(crate) fn raise_capacity(&mut self, capacity: u32) {
        self.capacity = self.capacity.max(capacity);
    }

    pub(crate) fn open_enrollments(&mut self, capacity: u32) {
        self.raise_capacity(capacity);
        self.open_enrollments = true;
    }

    pub(crate) fn close_enrollments(&mut self) {
        self.open_enrollments = false;
    }

    pub(crate) fn enroll(&mut self, student_id: String, student_name: String) {
        self.discarded.remove(&student_id);
        self.enrolled.insert(student_id, student_name);
    }

    /// Move an enrolled student to the discarded set. Returns false, and changes nothing, if the
    /// student is not enrolled.
    pub(crate) fn cancel_enrollment(&mut self, student_id: &str) -> bool {
        match self.enrolled.remove(student_id) {
            Some(name) => {
                self.discarded.insert(student_id.to_string(), name);
                true
            }
            None => false,
        }
    }

    pub(crate) fn snapshot(&self) -> ClassState {
        ClassState {
            capacity: self.capacity,
            open_enrollments: self.open_enrollments,
            enrolled: Self::records(&self.enrolled),
            discarded: Self::records(&self.discarded),
        }
    }

    fn records(students: &BTreeMap<String, String>) -> Vec<StudentRecord> {
        students
            .iter()
            .map(|(id, name)| StudentRecord::new(id.clone(), name.clone()))
            .collect()
    }

    /// Fold `other` into this roster, treating this roster as the authoritative side.
    ///
    /// 1. Capacity grows to the larger of the two. If `other` is open, we open too.
    /// 2. Each of `other`'s enrolled students is enrolled here while there is room, unless we
    ///    have discarded them. Once full, students unknown to us are "cancelled", which only has
    ///    an effect on a prior enrollment, so in practice they are dropped.
    /// 3. Each of `other`'s discarded students that we don't have enrolled is "cancelled" here,
    ///    with the same caveat. A discard therefore never reaches a replica through this path
    ///    unless that replica enrolled the student itself.
    pub(crate) fn absorb(&mut self, other: &ClassState) {
        if other.open_enrollments {
            self.open_enrollments(other.capacity);
        } else {
            self.raise_capacity(other.capacity);
        }

        for student in other.enrolled.iter() {
            if !self.is_full() {
                if !self.is_discarded(&student.id) {
                    self.enroll(student.id.clone(), student.name.clone());
                }
            } else if !self.is_enrolled(&student.id) {
                self.cancel_enrollment(&student.id);
            }
        }

        for student in other.discarded.iter() {
            if !self.is_enrolled(&student.id) {
                self.cancel_enrollment(&student.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(n: u32) -> StudentRecord {
        StudentRecord::new(format!("aluno{:04}", n), format!("Student {}", n))
    }

    fn state(capacity: u32, open: bool, enrolled: Vec<u32>, discarded: Vec<u32>) -> ClassState {
        ClassState {
            capacity,
            open_enrollments: open,
            enrolled: enrolled.into_iter().map(student).collect(),
            discarded: discarded.into_iter().map(student).collect(),
        }
    }

    fn assert_disjoint(roster: &Roster) {
        for id in roster.enrolled.keys() {
            assert!(!roster.is_discarded(id), "{} is both enrolled and discarded", id);
        }
    }

    #[test]
    fn enroll_and_cancel_keep_sets_disjoint() {
        let mut roster = Roster::new();
        roster.open_enrollments(3);

        roster.enroll("aluno0001".into(), "Ana Silva".into());
        roster.enroll("aluno0002".into(), "Rui Costa".into());
        assert_eq!(roster.class_size(), 2);

        assert!(roster.cancel_enrollment("aluno0001"));
        assert!(roster.is_discarded("aluno0001"));
        assert!(!roster.is_enrolled("aluno0001"));
        assert_disjoint(&roster);

        // Re-enrolling pulls the student back out of the discarded set.
        roster.enroll("aluno0001".into(), "Ana Silva".into());
        assert!(roster.is_enrolled("aluno0001"));
        assert!(!roster.is_discarded("aluno0001"));
        assert_disjoint(&roster);
    }

    #[test]
    fn cancel_unknown_student_is_noop() {
        let mut roster = Roster::new();
        assert!(!roster.cancel_enrollment("aluno9999"));
        assert_eq!(roster, Roster::new());
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut roster = Roster::new();
        roster.open_enrollments(5);
        roster.close_enrollments();
        roster.open_enrollments(2);

        assert_eq!(roster.capacity(), 5);
        assert!(roster.is_open());
    }

    #[test]
    fn full_at_capacity() {
        let mut roster = Roster::new();
        assert!(roster.is_full());

        roster.open_enrollments(1);
        assert!(!roster.is_full());

        roster.enroll("aluno0001".into(), "Ana Silva".into());
        assert!(roster.is_full());
    }

    #[test]
    fn snapshot_is_sorted() {
        let mut roster = Roster::new();
        roster.open_enrollments(4);
        roster.enroll("aluno0003".into(), "Student 3".into());
        roster.enroll("aluno0001".into(), "Student 1".into());
        roster.enroll("aluno0002".into(), "Student 2".into());
        roster.cancel_enrollment("aluno0002");

        assert_eq!(roster.snapshot(), state(4, true, vec![1, 3], vec![2]));
    }

    #[test]
    fn seeding_drops_discards_of_students_never_enrolled() {
        let roster = Roster::from_state(state(4, true, vec![1, 3], vec![2]));

        assert_eq!(roster.snapshot(), state(4, true, vec![1, 3], vec![]));
    }

    #[test]
    fn seeding_with_student_in_both_sets_discards_it() {
        let roster = Roster::from_state(state(4, true, vec![1, 2], vec![2]));

        assert!(roster.is_discarded("aluno0002"));
        assert!(!roster.is_enrolled("aluno0002"));
        assert_eq!(roster.snapshot(), state(4, true, vec![1], vec![2]));
        assert_disjoint(&roster);
    }

    #[test]
    fn absorb_open_remote_opens_and_raises_capacity() {
        let mut roster = Roster::from_state(state(2, false, vec![], vec![]));

        roster.absorb(&state(5, true, vec![], vec![]));

        assert!(roster.is_open());
        assert_eq!(roster.capacity(), 5);
    }

    #[test]
    fn absorb_closed_remote_keeps_open_flag() {
        let mut open = Roster::from_state(state(2, true, vec![], vec![]));
        open.absorb(&state(5, false, vec![], vec![]));
        assert!(open.is_open());
        assert_eq!(open.capacity(), 5);

        let mut closed = Roster::from_state(state(7, false, vec![], vec![]));
        closed.absorb(&state(5, false, vec![], vec![]));
        assert!(!closed.is_open());
        assert_eq!(closed.capacity(), 7);
    }

    #[test]
    fn absorb_enrolls_remote_students_while_there_is_room() {
        let mut roster = Roster::from_state(state(3, true, vec![1], vec![]));

        roster.absorb(&state(3, true, vec![2, 3, 4], vec![]));

        // 4 arrives when the class is already full, and is dropped.
        assert_eq!(roster.snapshot(), state(3, true, vec![1, 2, 3], vec![]));
        assert_disjoint(&roster);
    }

    #[test]
    fn absorb_respects_local_discards() {
        let mut roster = Roster::from_state(state(3, true, vec![1], vec![]));
        roster.cancel_enrollment("aluno0001");

        roster.absorb(&state(3, true, vec![1, 2], vec![]));

        assert!(roster.is_discarded("aluno0001"));
        assert!(!roster.is_enrolled("aluno0001"));
        assert!(roster.is_enrolled("aluno0002"));
        assert_disjoint(&roster);
    }

    #[test]
    fn absorb_remote_discards_only_affect_local_enrollments() {
        // Remote discarded 1 and 2. We have neither enrolled, so nothing changes: the discard
        // doesn't propagate. This mirrors how cancellation works for local writes.
        let mut roster = Roster::from_state(state(3, true, vec![3], vec![]));

        roster.absorb(&state(3, true, vec![], vec![1, 2]));

        assert_eq!(roster.snapshot(), state(3, true, vec![3], vec![]));
    }

    #[test]
    fn absorb_capacity_grows_to_max_of_both_sides() {
        for (local, remote) in [(0, 0), (1, 4), (4, 1), (3, 3)].iter() {
            for remote_open in [true, false].iter() {
                let mut roster = Roster::from_state(state(*local, false, vec![], vec![]));
                roster.absorb(&state(*remote, *remote_open, vec![], vec![]));
                assert!(roster.capacity() >= (*local).max(*remote));
            }
        }
    }
}

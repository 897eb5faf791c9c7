use crate::common::{is_valid_student_id, is_valid_student_name, ClassState, ReplicaAddress, Role};
use crate::replica::clock_table::ClockTable;
use crate::replica::replica_api::{DumpOutput, GossipMessage, MergeOutcome, PropagateStateInput, ReplicaError};
use crate::replica::roster::Roster;
use std::convert::TryFrom;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Replica is the state of one class server: its roster, its clock table and whether it is
/// currently serving clients.
///
/// Every operation that reads or writes the roster for consistency (client writes, merges,
/// snapshots) goes through the single roster mutex, so a merge and a local write never
/// interleave. The mutex is never held across an await point.
pub(crate) struct Replica {
    logger: slog::Logger,
    role: Role,
    active: AtomicBool,
    roster: Mutex<Roster>,
    clock_table: ClockTable,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum MergeAuthority {
    Local,
    Remote,
}

impl Replica {
    pub(crate) fn new(logger: slog::Logger, me: ReplicaAddress, role: Role) -> Self {
        Replica {
            logger,
            role,
            active: AtomicBool::new(true),
            roster: Mutex::new(Roster::new()),
            clock_table: ClockTable::new(me),
        }
    }

    pub(crate) fn address(&self) -> &ReplicaAddress {
        self.clock_table.me()
    }

    pub(crate) fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn clock_table(&self) -> &ClockTable {
        &self.clock_table
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub(crate) fn activate(&self) {
        slog::info!(self.logger, "Replica activated");
        self.active.store(true, Ordering::Release);
    }

    pub(crate) fn deactivate(&self) {
        slog::info!(self.logger, "Replica deactivated");
        self.active.store(false, Ordering::Release);
    }

    fn ensure_active(&self) -> Result<(), ReplicaError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(ReplicaError::InactiveServer)
        }
    }

    fn lock_roster(&self) -> MutexGuard<'_, Roster> {
        self.roster.lock().expect("Replica roster mutex guard poison")
    }

    pub(crate) fn open_enrollments(&self, capacity: i32) -> Result<(), ReplicaError> {
        let capacity = u32::try_from(capacity).map_err(|_| ReplicaError::InvalidArgument("Invalid class capacity"))?;
        self.ensure_active()?;

        let mut roster = self.lock_roster();
        if roster.is_open() {
            return Err(ReplicaError::EnrollmentsAlreadyOpened);
        }
        if roster.class_size() >= capacity as usize {
            return Err(ReplicaError::FullClass);
        }

        roster.open_enrollments(capacity);
        let counter = self.clock_table.increment_own();
        slog::debug!(self.logger, "Opened enrollments with capacity {}. Clock: {}", capacity, counter);

        Ok(())
    }

    pub(crate) fn close_enrollments(&self) -> Result<(), ReplicaError> {
        self.ensure_active()?;

        let mut roster = self.lock_roster();
        if !roster.is_open() {
            return Err(ReplicaError::EnrollmentsAlreadyClosed);
        }

        roster.close_enrollments();
        let counter = self.clock_table.increment_own();
        slog::debug!(self.logger, "Closed enrollments. Clock: {}", counter);

        Ok(())
    }

    pub(crate) fn enroll(&self, student_id: String, student_name: String) -> Result<(), ReplicaError> {
        if !is_valid_student_id(&student_id) {
            return Err(ReplicaError::InvalidArgument("Invalid student ID"));
        }
        if !is_valid_student_name(&student_name) {
            return Err(ReplicaError::InvalidArgument("Invalid student name"));
        }
        self.ensure_active()?;

        let mut roster = self.lock_roster();
        if !roster.is_open() {
            return Err(ReplicaError::EnrollmentsAlreadyClosed);
        }
        if roster.is_enrolled(&student_id) {
            return Err(ReplicaError::StudentAlreadyEnrolled);
        }
        if roster.is_full() {
            return Err(ReplicaError::FullClass);
        }

        slog::debug!(self.logger, "Enrolling {}", student_id);
        roster.enroll(student_id, student_name);
        self.clock_table.increment_own();

        Ok(())
    }

    pub(crate) fn cancel_enrollment(&self, student_id: &str) -> Result<(), ReplicaError> {
        if !is_valid_student_id(student_id) {
            return Err(ReplicaError::InvalidArgument("Invalid student ID"));
        }
        self.ensure_active()?;

        let mut roster = self.lock_roster();
        if !roster.cancel_enrollment(student_id) {
            return Err(ReplicaError::NonExistingStudent);
        }

        slog::debug!(self.logger, "Cancelled enrollment of {}", student_id);
        self.clock_table.increment_own();

        Ok(())
    }

    pub(crate) fn list_class(&self) -> Result<ClassState, ReplicaError> {
        self.ensure_active()?;
        Ok(self.lock_roster().snapshot())
    }

    /// Diagnostic view. Bypasses the activation gate.
    pub(crate) fn dump(&self) -> DumpOutput {
        let class_state = self.lock_roster().snapshot();

        DumpOutput {
            class_state,
            clocks: self.clock_table.snapshot(),
        }
    }

    /// Snapshot and own counter, read together so the counter describes exactly this snapshot.
    pub(crate) fn gossip_message(&self) -> GossipMessage {
        let roster = self.lock_roster();

        GossipMessage {
            class_state: roster.snapshot(),
            sender: self.clock_table.me().clone(),
            sender_role: self.role,
            sender_counter: self.clock_table.own_counter(),
        }
    }

    /// Reconcile a peer's pushed state with ours.
    pub(crate) fn merge_propagated_state(&self, input: PropagateStateInput) -> MergeOutcome {
        if !self.is_active() {
            return MergeOutcome::Inactive;
        }

        let mut roster = self.lock_roster();

        if self.clock_table.is_stale(&input.sender, input.sender_counter) {
            slog::debug!(
                self.logger,
                "Discarding stale state from {} (counter {}, known {})",
                input.sender,
                input.sender_counter,
                self.clock_table.counter(&input.sender),
            );
            return MergeOutcome::Stale;
        }

        let outcome = match self.merge_authority(input.sender_role, &input.sender) {
            MergeAuthority::Local => {
                roster.absorb(&input.class_state);
                MergeOutcome::MergedIntoLocal
            }
            MergeAuthority::Remote => {
                let local_state = roster.snapshot();
                let mut adopted = Roster::from_state(input.class_state);
                adopted.absorb(&local_state);
                *roster = adopted;
                MergeOutcome::AdoptedRemote
            }
        };

        self.clock_table.observe(&input.sender, input.sender_counter);
        let counter = self.clock_table.increment_own();
        slog::debug!(
            self.logger,
            "Merged state from {} ({:?}). Clock: {}",
            input.sender,
            outcome,
            counter
        );

        outcome
    }

    /// Primaries always win. Between two secondaries, the lower port wins.
    fn merge_authority(&self, sender_role: Role, sender: &ReplicaAddress) -> MergeAuthority {
        match (self.role, sender_role) {
            (Role::Primary, _) => MergeAuthority::Local,
            (Role::Secondary, Role::Secondary) if self.address().port() < sender.port() => MergeAuthority::Local,
            (Role::Secondary, _) => MergeAuthority::Remote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::StudentRecord;

    fn logger() -> slog::Logger {
        slog::Logger::root(slog::Discard, slog::o!())
    }

    fn replica(port: u16, role: Role) -> Replica {
        Replica::new(logger(), ReplicaAddress::new("localhost", port), role)
    }

    fn push_from(sender: &Replica) -> PropagateStateInput {
        let message = sender.gossip_message();
        PropagateStateInput {
            class_state: message.class_state,
            sender: message.sender,
            sender_role: message.sender_role,
            sender_counter: message.sender_counter,
        }
    }

    #[test]
    fn enroll_until_full() {
        let r = replica(8080, Role::Primary);
        r.open_enrollments(2).unwrap();

        assert_eq!(r.enroll("aluno0001".into(), "Ana Silva".into()), Ok(()));
        assert_eq!(r.enroll("aluno0002".into(), "Rui Costa".into()), Ok(()));
        assert_eq!(
            r.enroll("aluno0003".into(), "Eve Dias".into()),
            Err(ReplicaError::FullClass)
        );
        assert_eq!(r.clock_table().own_counter(), 3);
    }

    #[test]
    fn enroll_into_closed_class() {
        let r = replica(8080, Role::Primary);
        assert_eq!(
            r.enroll("aluno0001".into(), "Ana Silva".into()),
            Err(ReplicaError::EnrollmentsAlreadyClosed)
        );
        assert_eq!(r.clock_table().own_counter(), 0);
    }

    #[test]
    fn enroll_twice() {
        let r = replica(8080, Role::Primary);
        r.open_enrollments(5).unwrap();
        r.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();

        assert_eq!(
            r.enroll("aluno0001".into(), "Ana Silva".into()),
            Err(ReplicaError::StudentAlreadyEnrolled)
        );
    }

    #[test]
    fn enroll_validates_arguments_before_activation() {
        let r = replica(8080, Role::Primary);
        r.deactivate();

        assert_eq!(
            r.enroll("student1".into(), "Ana Silva".into()),
            Err(ReplicaError::InvalidArgument("Invalid student ID"))
        );
        assert_eq!(
            r.enroll("aluno0001".into(), "Al".into()),
            Err(ReplicaError::InvalidArgument("Invalid student name"))
        );
        assert_eq!(
            r.enroll("aluno0001".into(), "Ana Silva".into()),
            Err(ReplicaError::InactiveServer)
        );
    }

    #[test]
    fn open_enrollments_cases() {
        let r = replica(8080, Role::Primary);

        assert_eq!(
            r.open_enrollments(-1),
            Err(ReplicaError::InvalidArgument("Invalid class capacity"))
        );
        assert_eq!(r.open_enrollments(0), Err(ReplicaError::FullClass));
        assert_eq!(r.open_enrollments(2), Ok(()));
        assert_eq!(r.open_enrollments(3), Err(ReplicaError::EnrollmentsAlreadyOpened));

        r.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();
        r.enroll("aluno0002".into(), "Rui Costa".into()).unwrap();
        r.close_enrollments().unwrap();

        // Reopening needs room beyond the current class size.
        assert_eq!(r.open_enrollments(2), Err(ReplicaError::FullClass));
        assert_eq!(r.open_enrollments(3), Ok(()));
        assert_eq!(r.list_class().unwrap().capacity, 3);
    }

    #[test]
    fn close_enrollments_twice() {
        let r = replica(8080, Role::Primary);
        assert_eq!(r.close_enrollments(), Err(ReplicaError::EnrollmentsAlreadyClosed));

        r.open_enrollments(2).unwrap();
        assert_eq!(r.close_enrollments(), Ok(()));
        assert_eq!(r.close_enrollments(), Err(ReplicaError::EnrollmentsAlreadyClosed));
        assert_eq!(r.clock_table().own_counter(), 2);
    }

    #[test]
    fn cancel_enrollment_cases() {
        let r = replica(8080, Role::Primary);
        r.open_enrollments(2).unwrap();
        r.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();

        assert_eq!(
            r.cancel_enrollment("aluno9999"),
            Err(ReplicaError::NonExistingStudent)
        );
        assert_eq!(
            r.cancel_enrollment("nobody"),
            Err(ReplicaError::InvalidArgument("Invalid student ID"))
        );
        assert_eq!(r.cancel_enrollment("aluno0001"), Ok(()));

        let state = r.list_class().unwrap();
        assert!(state.enrolled.is_empty());
        assert_eq!(state.discarded, vec![StudentRecord::new("aluno0001", "Ana Silva")]);
    }

    #[test]
    fn inactive_replica_rejects_but_still_dumps() {
        let r = replica(8080, Role::Primary);
        r.open_enrollments(2).unwrap();
        r.deactivate();

        assert_eq!(r.list_class(), Err(ReplicaError::InactiveServer));
        assert_eq!(r.open_enrollments(3), Err(ReplicaError::InactiveServer));
        assert_eq!(r.close_enrollments(), Err(ReplicaError::InactiveServer));
        assert_eq!(r.cancel_enrollment("aluno0001"), Err(ReplicaError::InactiveServer));

        let dump = r.dump();
        assert!(dump.class_state.open_enrollments);
        assert_eq!(dump.clocks, vec![(ReplicaAddress::new("localhost", 8080), 1)]);

        r.activate();
        assert!(r.list_class().is_ok());
    }

    #[test]
    fn reads_do_not_advance_clock() {
        let r = replica(8080, Role::Primary);
        r.list_class().unwrap();
        r.dump();
        r.gossip_message();
        assert_eq!(r.clock_table().own_counter(), 0);
    }

    #[test]
    fn primary_keeps_its_state_when_secondary_pushes() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);

        primary.open_enrollments(3).unwrap();
        primary.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();
        let primary_counter = primary.clock_table().own_counter();

        // Secondary makes one unrelated change so its counter is 1.
        secondary.open_enrollments(1).unwrap();
        primary.close_enrollments().unwrap();

        let outcome = primary.merge_propagated_state(push_from(&secondary));

        assert_eq!(outcome, MergeOutcome::MergedIntoLocal);
        let state = primary.list_class().unwrap();
        assert!(state.is_enrolled("aluno0001"));
        // The secondary was open, so the primary reopens.
        assert!(state.open_enrollments);
        assert_eq!(state.capacity, 3);
        assert_eq!(primary.clock_table().counter(secondary.address()), 1);
        assert_eq!(primary.clock_table().own_counter(), primary_counter + 2);
    }

    #[test]
    fn primary_is_authoritative_over_empty_secondary() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);

        // Both replicas start at counter 0. The primary enrolls X.
        {
            let mut roster = primary.lock_roster();
            roster.open_enrollments(2);
            roster.enroll("aluno0001".into(), "Ana Silva".into());
        }
        assert_eq!(primary.clock_table().increment_own(), 1);

        let outcome = primary.merge_propagated_state(PropagateStateInput {
            class_state: secondary.dump().class_state,
            sender: secondary.address().clone(),
            sender_role: Role::Secondary,
            sender_counter: 1,
        });

        assert_eq!(outcome, MergeOutcome::MergedIntoLocal);
        assert!(primary.list_class().unwrap().is_enrolled("aluno0001"));
        assert_eq!(primary.clock_table().counter(secondary.address()), 1);
        assert_eq!(primary.clock_table().own_counter(), 2);
    }

    #[test]
    fn secondary_adopts_primary_state_and_keeps_its_own_students() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);

        primary.open_enrollments(3).unwrap();
        primary.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();

        // Secondary has been open with a larger capacity and has its own student.
        secondary.open_enrollments(5).unwrap();
        secondary.enroll("aluno0002".into(), "Rui Costa".into()).unwrap();
        secondary.close_enrollments().unwrap();

        let outcome = secondary.merge_propagated_state(push_from(&primary));

        assert_eq!(outcome, MergeOutcome::AdoptedRemote);
        let state = secondary.list_class().unwrap();
        assert!(state.is_enrolled("aluno0001"));
        assert!(state.is_enrolled("aluno0002"));
        // Primary's open flag wins, capacity grows to the larger of the two.
        assert!(state.open_enrollments);
        assert_eq!(state.capacity, 5);
        assert_eq!(secondary.clock_table().counter(primary.address()), 2);
        assert_eq!(secondary.clock_table().own_counter(), 4);
    }

    #[test]
    fn remote_discard_does_not_reach_replica_that_never_enrolled() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);

        primary.open_enrollments(3).unwrap();
        primary.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();
        primary.cancel_enrollment("aluno0001").unwrap();

        assert_eq!(secondary.merge_propagated_state(push_from(&primary)), MergeOutcome::AdoptedRemote);

        let state = secondary.list_class().unwrap();
        assert!(!state.is_enrolled("aluno0001"));
        assert!(!state.is_discarded("aluno0001"));
    }

    #[test]
    fn remote_discard_does_not_cancel_local_enrollment_when_adopting() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);

        primary.open_enrollments(3).unwrap();
        secondary.merge_propagated_state(push_from(&primary));
        secondary.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();

        // The primary enrolls and cancels the same student on its own.
        primary.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();
        primary.cancel_enrollment("aluno0001").unwrap();

        assert_eq!(secondary.merge_propagated_state(push_from(&primary)), MergeOutcome::AdoptedRemote);

        // The secondary's own enrollment is folded back in.
        let state = secondary.list_class().unwrap();
        assert!(state.is_enrolled("aluno0001"));
        assert!(!state.is_discarded("aluno0001"));
    }

    #[test]
    fn secondary_tie_break_by_port() {
        let low = replica(8081, Role::Secondary);
        let high = replica(8082, Role::Secondary);

        low.open_enrollments(2).unwrap();
        low.close_enrollments().unwrap();
        high.open_enrollments(4).unwrap();

        // The lower port is authoritative: it absorbs the higher port's state.
        assert_eq!(low.merge_propagated_state(push_from(&high)), MergeOutcome::MergedIntoLocal);
        // The higher port adopts the lower port's state.
        assert_eq!(high.merge_propagated_state(push_from(&low)), MergeOutcome::AdoptedRemote);

        assert_eq!(low.list_class().unwrap(), high.list_class().unwrap());
    }

    #[test]
    fn stale_push_changes_nothing() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);

        primary.open_enrollments(3).unwrap();
        let push = push_from(&primary);
        assert_eq!(
            secondary.merge_propagated_state(PropagateStateInput {
                class_state: push.class_state.clone(),
                sender: push.sender.clone(),
                sender_role: push.sender_role,
                sender_counter: push.sender_counter,
            }),
            MergeOutcome::AdoptedRemote
        );

        // Change the secondary locally, then replay the same push.
        secondary.enroll("aluno0001".into(), "Ana Silva".into()).unwrap();
        let state_before = secondary.dump();

        assert_eq!(secondary.merge_propagated_state(push), MergeOutcome::Stale);

        let state_after = secondary.dump();
        assert_eq!(state_before.class_state, state_after.class_state);
        assert_eq!(state_before.clocks, state_after.clocks);
    }

    #[test]
    fn counter_zero_push_is_stale() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);

        assert_eq!(secondary.merge_propagated_state(push_from(&primary)), MergeOutcome::Stale);
        assert_eq!(secondary.clock_table().own_counter(), 0);
    }

    #[test]
    fn inactive_replica_ignores_pushes() {
        let primary = replica(8080, Role::Primary);
        let secondary = replica(8081, Role::Secondary);
        primary.open_enrollments(3).unwrap();
        secondary.deactivate();

        assert_eq!(secondary.merge_propagated_state(push_from(&primary)), MergeOutcome::Inactive);
        assert_eq!(secondary.clock_table().own_counter(), 0);
        assert_eq!(secondary.clock_table().counter(primary.address()), 0);
        assert!(!secondary.dump().class_state.open_enrollments);
    }
}

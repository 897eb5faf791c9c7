use crate::common::Role;

const PRIMARY_STEP: f64 = 0.25;
const SECONDARY_STEP: f64 = 0.15;

/// Which replicas an operation may run on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Target {
    PrimaryOnly,
    Either,
}

/// One of the two cached replica slots of a router.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    Primary,
    Secondary,
}

impl Slot {
    pub(crate) fn other(self) -> Slot {
        match self {
            Slot::Primary => Slot::Secondary,
            Slot::Secondary => Slot::Primary,
        }
    }

    pub(crate) fn role(self) -> Role {
        match self {
            Slot::Primary => Role::Primary,
            Slot::Secondary => Role::Secondary,
        }
    }
}

/// Probability of sending an either-replica operation to the Primary slot. Every operation
/// that needs the Primary nudges it up, every operation that may go anywhere nudges it down, so
/// clients that mostly write keep hitting the Primary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SelectionWeight {
    weight: f64,
}

impl SelectionWeight {
    pub(crate) fn new(initial: f64) -> Self {
        SelectionWeight {
            weight: initial.max(0.0).min(1.0),
        }
    }

    pub(crate) fn value(&self) -> f64 {
        self.weight
    }

    pub(crate) fn lean_primary(&mut self) {
        self.weight = (self.weight + PRIMARY_STEP).min(1.0);
    }

    pub(crate) fn lean_secondary(&mut self) {
        self.weight = (self.weight - SECONDARY_STEP).max(0.0);
    }
}

/// Pick a slot for an either-replica operation. `draw` is uniform in `[0, 1)`; below the weight
/// means Primary. An unavailable choice falls back to the other slot.
pub(crate) fn pick_slot(
    draw: f64,
    weight: SelectionWeight,
    primary_available: bool,
    secondary_available: bool,
) -> Option<Slot> {
    let preferred = if draw < weight.value() {
        Slot::Primary
    } else {
        Slot::Secondary
    };

    let available = |slot: Slot| match slot {
        Slot::Primary => primary_available,
        Slot::Secondary => secondary_available,
    };

    if available(preferred) {
        Some(preferred)
    } else if available(preferred.other()) {
        Some(preferred.other())
    } else {
        None
    }
}

mod periodic_timer;
mod time;

pub(crate) use periodic_timer::PeriodicTimerHandle;
pub(crate) use periodic_timer::TickTarget;

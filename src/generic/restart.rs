/*!
Restart schedules.

A schedule is told of each conflict, and answers whether a restart is due.
Schedules count conflicts since the last restart themselves, so a schedule is the only state needed to decide on a restart.

```rust
# use marten_sat::generic::restart::{LubySchedule, RestartSchedule};
let mut schedule = LubySchedule::new(2);

// Restarts after 2, 2, 4, 2, 2, 4, 8, … conflicts.
let restarts = (0..12).filter(|_| schedule.conflict()).count();
assert_eq!(restarts, 5);
```
*/

use crate::{
    config::RestartPolicy,
    generic::luby::{Luby, LubyRepresentation},
};

/// A schedule for restarts, measured in conflicts.
pub trait RestartSchedule {
    /// Notes a conflict, and returns whether a restart is due.
    ///
    /// If true, the count towards the next restart begins again from zero.
    fn conflict(&mut self) -> bool;
}

/// The schedule for a restart policy.
pub fn schedule_for(policy: &RestartPolicy) -> Box<dyn RestartSchedule> {
    match policy {
        RestartPolicy::Off => Box::new(NeverSchedule),
        RestartPolicy::Geometric { base, factor } => {
            Box::new(GeometricSchedule::new(*base, *factor))
        }
        RestartPolicy::Luby { unit } => Box::new(LubySchedule::new(*unit)),
    }
}

/// Never restart.
pub struct NeverSchedule;

impl RestartSchedule for NeverSchedule {
    fn conflict(&mut self) -> bool {
        false
    }
}

/// Restart after `base` conflicts, with the interval growing by `factor` after each restart.
pub struct GeometricSchedule {
    interval: f64,
    factor: f64,
    count: u64,
}

impl GeometricSchedule {
    pub fn new(base: u32, factor: f64) -> Self {
        GeometricSchedule {
            interval: base.max(1) as f64,
            factor: factor.max(1.0),
            count: 0,
        }
    }
}

impl RestartSchedule for GeometricSchedule {
    fn conflict(&mut self) -> bool {
        self.count += 1;
        if self.count as f64 >= self.interval {
            self.count = 0;
            self.interval *= self.factor;
            true
        } else {
            false
        }
    }
}

/// Restart after `unit` times the next element of the Luby sequence conflicts.
pub struct LubySchedule {
    unit: LubyRepresentation,
    luby: Luby,
    interval: LubyRepresentation,
    count: LubyRepresentation,
}

impl LubySchedule {
    pub fn new(unit: LubyRepresentation) -> Self {
        let mut schedule = LubySchedule {
            unit: unit.max(1),
            luby: Luby::default(),
            interval: 0,
            count: 0,
        };
        schedule.advance();
        schedule
    }

    fn advance(&mut self) {
        self.interval = match self.luby.next() {
            Some(element) => element.saturating_mul(self.unit),
            None => LubyRepresentation::MAX,
        };
    }
}

impl RestartSchedule for LubySchedule {
    fn conflict(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        if self.count >= self.interval {
            self.count = 0;
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restart_points(schedule: &mut dyn RestartSchedule, conflicts: usize) -> Vec<usize> {
        (1..=conflicts).filter(|_| schedule.conflict()).collect()
    }

    #[test]
    fn never() {
        assert!(restart_points(&mut NeverSchedule, 1000).is_empty());
    }

    #[test]
    fn geometric() {
        let mut schedule = GeometricSchedule::new(10, 2.0);
        assert_eq!(restart_points(&mut schedule, 80), vec![10, 30, 70]);
    }

    #[test]
    fn luby() {
        let mut schedule = LubySchedule::new(3);
        assert_eq!(restart_points(&mut schedule, 30), vec![3, 6, 12, 15, 18, 24]);
    }

    #[test]
    fn from_policy() {
        let mut schedule = schedule_for(&RestartPolicy::Luby { unit: 1 });
        assert!(schedule.conflict());
        let mut schedule = schedule_for(&RestartPolicy::Off);
        assert!(!schedule.conflict());
    }
}

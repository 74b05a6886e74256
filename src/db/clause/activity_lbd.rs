use crate::config::{Activity, LBD};

/// The activity and lbd of a learned clause.
///
/// Ordered by activity *reversed*, so the least active clause is the maximum on a max heap.
/// The lbd is noted to protect clauses within the lbd bound from removal.
#[derive(Debug, Default)]
pub struct ActivityLBD {
    pub activity: Activity,
    pub lbd: LBD,
}

impl PartialOrd for ActivityLBD {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.activity.partial_cmp(&self.activity)
    }
}

impl PartialEq for ActivityLBD {
    fn eq(&self, other: &Self) -> bool {
        self.activity.eq(&other.activity)
    }
}

use std::collections::HashSet;

use log::debug;

use crate::sync::action::ActionKey;

/// Keys of actions that have been sent and not yet completed.
#[derive(Debug, Default)]
pub struct InFlight {
    keys: HashSet<ActionKey>,
}

impl InFlight {
    /// Marks `key` as outstanding. `false` if it already was.
    pub fn try_acquire(&mut self, key: ActionKey) -> bool {
        self.keys.insert(key)
    }

    /// Clears `key`. Releasing a key that was never acquired is a no-op.
    pub fn release(&mut self, key: &ActionKey) {
        if !self.keys.remove(key) {
            debug!("released {:?} without a matching acquire", key);
        }
    }

    pub fn contains(&self, key: &ActionKey) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::action::{ActionKind, Target};

    fn delete_student(id: i64) -> ActionKey {
        ActionKey {
            kind: ActionKind::DeleteStudent,
            target: Target::Record(id),
        }
    }

    #[test]
    fn same_key_is_held_until_released() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.try_acquire(delete_student(1)));
        assert!(!in_flight.try_acquire(delete_student(1)));
        assert!(in_flight.try_acquire(delete_student(2)));

        in_flight.release(&delete_student(1));
        assert!(!in_flight.contains(&delete_student(1)));
        assert!(in_flight.try_acquire(delete_student(1)));
    }

    #[test]
    fn releasing_unknown_key_changes_nothing() {
        let mut in_flight = InFlight::default();
        in_flight.try_acquire(delete_student(1));

        in_flight.release(&delete_student(7));

        assert!(in_flight.contains(&delete_student(1)));
        assert!(!in_flight.is_empty());
    }
}

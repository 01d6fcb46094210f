use log::{debug, warn};

use crate::store::Store;
use crate::sync::action::{Action, ActionKey, Collection};
use crate::sync::execute::{Completion, Reload};
use crate::sync::guard::InFlight;
use crate::sync::notice::Notice;

/// Outcome of [`Controller::begin`].
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Registered as in flight; hand it to [`execute`](crate::sync::execute).
    Ready(Action),
    /// The user declined the confirmation prompt.
    Declined,
    /// An action with the same key is still outstanding.
    Busy(ActionKey),
}

/// Owns the store and the set of outstanding actions.
///
/// Constructed once at start-up. The store is only written by
/// [`Controller::complete`], which runs on the UI thread.
#[derive(Debug, Default)]
pub struct Controller {
    store: Store,
    in_flight: InFlight,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn is_in_flight(&self, key: &ActionKey) -> bool {
        self.in_flight.contains(key)
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Gates an action before any request is made.
    ///
    /// Duplicates of an outstanding action are rejected first, without
    /// prompting. Destructive actions then go through `confirm`; a declined
    /// prompt leaves everything untouched.
    pub fn begin(&mut self, action: Action, confirm: impl FnOnce(&str) -> bool) -> Dispatch {
        let key = action.key();
        if self.in_flight.contains(&key) {
            debug!("{:?} already in flight", key);
            return Dispatch::Busy(key);
        }
        if let Some(prompt) = action.confirmation() {
            if !confirm(prompt) {
                debug!("{:?} declined", key);
                return Dispatch::Declined;
            }
        }
        self.in_flight.try_acquire(key);
        Dispatch::Ready(action)
    }

    /// Releases the action's key and folds its results into the store.
    ///
    /// Each successful reload replaces its mirror wholesale; a failed one
    /// leaves the previous contents in place. Returns the notices to show,
    /// in order.
    pub fn complete(&mut self, completion: Completion) -> Vec<Notice> {
        let Completion {
            key,
            mutation,
            reloads,
        } = completion;
        self.in_flight.release(&key);

        let mut notices = Vec::new();
        if let Err(err) = mutation {
            notices.push(key.kind.failure_notice(&err));
            return notices;
        }
        if let Some(message) = key.kind.success_message() {
            notices.push(Notice::success(message));
        }

        for reload in reloads {
            match reload {
                Reload::Students(Ok(students)) => self.store.replace_students(students),
                Reload::Courses(Ok(courses)) => self.store.replace_courses(courses),
                Reload::Students(Err(err)) => {
                    warn!("students reload failed: {}", err);
                    notices.push(Collection::Students.failure_notice(&err));
                }
                Reload::Courses(Err(err)) => {
                    warn!("courses reload failed: {}", err);
                    notices.push(Collection::Courses.failure_notice(&err));
                }
            }
        }
        notices
    }
}

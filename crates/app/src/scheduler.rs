//! Deferred UI tasks with cancellation.
//!
//! The scheduler never sleeps. It records what should happen and when, and
//! hands newly scheduled tasks to a driver through [`Scheduler::take_armed`].
//! The browser driver sleeps for each armed delay and calls
//! [`Scheduler::fire`]; tests move the virtual clock with
//! [`Scheduler::advance`] instead. A cancelled task is simply gone, so a
//! late timer firing for it does nothing.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task, used to cancel or fire it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(u64);

/// A task that still needs a real timer behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Armed {
    pub token: TaskToken,
    pub delay: Duration,
}

#[derive(Debug)]
struct Pending<T> {
    due: Duration,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_token: u64,
    pending: BTreeMap<TaskToken, Pending<T>>,
    armed: Vec<Armed>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_token: 0,
            pending: BTreeMap::new(),
            armed: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskToken {
        let token = TaskToken(self.next_token);
        self.next_token += 1;
        self.pending.insert(
            token,
            Pending {
                due: self.now + delay,
                task,
            },
        );
        self.armed.push(Armed { token, delay });
        token
    }

    /// Drop a pending task. Returns it if it had not run yet.
    pub fn cancel(&mut self, token: TaskToken) -> Option<T> {
        self.pending.remove(&token).map(|p| p.task)
    }

    /// Take a task whose real timer has elapsed. `None` if it was cancelled
    /// or already ran. The clock moves up to the task's due time.
    pub fn fire(&mut self, token: TaskToken) -> Option<T> {
        let pending = self.pending.remove(&token)?;
        self.now = self.now.max(pending.due);
        Some(pending.task)
    }

    /// Move the virtual clock forward and take every task that is now due,
    /// earliest first. Tasks due at the same instant come out in the order
    /// they were scheduled.
    #[cfg(test)]
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, TaskToken)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.due <= now)
            .map(|(token, p)| (p.due, *token))
            .collect();
        due.sort_unstable();

        due.into_iter()
            .filter_map(|(_, token)| self.pending.remove(&token))
            .map(|p| p.task)
            .collect()
    }

    /// Tasks scheduled since the last call, for the driver to put timers on.
    pub fn take_armed(&mut self) -> Vec<Armed> {
        std::mem::take(&mut self.armed)
    }

    #[cfg(test)]
    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.pending.contains_key(&token)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Virtual time, moved by [`Scheduler::advance`] and [`Scheduler::fire`].
    #[cfg(test)]
    pub fn now(&self) -> Duration {
        self.now
    }
}

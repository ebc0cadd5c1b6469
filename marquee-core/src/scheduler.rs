//! Timer continuation for page transitions.
//!
//! The slider never sleeps itself. It asks a [`Scheduler`] to hand a
//! [`TransitionToken`] back after a delay, and the host feeds fired tokens
//! into [`Slider::on_timer`](crate::Slider::on_timer). Tokens identify both
//! the slider instance and the transition, so a late or cancelled timer can
//! be recognised and dropped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique slider instance id.
pub(crate) fn next_instance_id() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

/// Handle for one scheduled transition completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionToken {
    instance: u64,
    sequence: u64,
}

impl TransitionToken {
    pub(crate) fn new(instance: u64, sequence: u64) -> Self {
        Self { instance, sequence }
    }

    /// Slider instance that issued the token.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Per-slider transition counter.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Cancellable delayed delivery of transition tokens.
pub trait Scheduler {
    /// Deliver `token` once `delay` has elapsed.
    fn schedule_after(&mut self, delay: Duration, token: TransitionToken);

    /// Forget `token` if it has not fired yet. Unknown tokens are ignored.
    fn cancel(&mut self, token: TransitionToken);
}

/// Deterministic virtual clock. Nothing fires until [`advance`] is called.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_order: u64,
    pending: Vec<Scheduled>,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    deadline: Duration,
    order: u64,
    token: TransitionToken,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers scheduled and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every token now due, earliest
    /// deadline first. Ties keep scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<TransitionToken> {
        self.now += by;
        let now = self.now;

        let (mut due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|scheduled| scheduled.deadline <= now);
        self.pending = rest;

        due.sort_by_key(|scheduled| (scheduled.deadline, scheduled.order));
        due.into_iter().map(|scheduled| scheduled.token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration, token: TransitionToken) {
        let order = self.next_order;
        self.next_order += 1;
        self.pending.push(Scheduled {
            deadline: self.now + delay,
            order,
            token,
        });
    }

    fn cancel(&mut self, token: TransitionToken) {
        self.pending.retain(|scheduled| scheduled.token != token);
    }
}

/// Runs each timer as a `tokio::time::sleep` task and forwards fired tokens
/// over an unbounded channel.
#[derive(Debug)]
pub struct TokioScheduler {
    handle: Handle,
    fired: mpsc::UnboundedSender<TransitionToken>,
    tasks: HashMap<TransitionToken, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Returns the scheduler and the receiver the host should drain into
    /// `Slider::on_timer`.
    pub fn new(handle: Handle) -> (Self, mpsc::UnboundedReceiver<TransitionToken>) {
        let (fired, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            handle,
            fired,
            tasks: HashMap::new(),
        };
        (scheduler, receiver)
    }

    /// Scheduler bound to the runtime of the calling task.
    ///
    /// Panics when called outside a tokio runtime, like `Handle::current`.
    pub fn current() -> (Self, mpsc::UnboundedReceiver<TransitionToken>) {
        Self::new(Handle::current())
    }

    /// Timer tasks that are still sleeping.
    pub fn in_flight(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&mut self, delay: Duration, token: TransitionToken) {
        self.tasks.retain(|_, task| !task.is_finished());

        let fired = self.fired.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if fired.send(token).is_err() {
                trace!(?token, "timer fired after receiver closed");
            }
        });
        if let Some(previous) = self.tasks.insert(token, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, token: TransitionToken) {
        if let Some(task) = self.tasks.remove(&token) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(sequence: u64) -> TransitionToken {
        TransitionToken::new(0, sequence)
    }

    #[test]
    fn manual_clock_fires_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_after(Duration::from_millis(300), token(1));
        scheduler.schedule_after(Duration::from_millis(100), token(2));
        scheduler.schedule_after(Duration::from_millis(100), token(3));

        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(
            scheduler.advance(Duration::from_millis(1)),
            vec![token(2), token(3)]
        );
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(
            scheduler.advance(Duration::from_millis(500)),
            vec![token(1)]
        );
        assert_eq!(scheduler.now(), Duration::from_millis(600));
    }

    #[test]
    fn manual_cancel_drops_token() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_after(Duration::from_millis(10), token(1));
        scheduler.cancel(token(1));
        scheduler.cancel(token(9));
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn instance_ids_are_unique() {
        let a = next_instance_id();
        let b = next_instance_id();
        assert_ne!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_forwards_fired_tokens() {
        let (mut scheduler, mut fired) = TokioScheduler::current();
        scheduler.schedule_after(Duration::from_millis(700), token(1));
        assert_eq!(scheduler.in_flight(), 1);

        assert_eq!(fired.recv().await, Some(token(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_cancel_aborts_sleeping_task() {
        let (mut scheduler, mut fired) = TokioScheduler::current();
        scheduler.schedule_after(Duration::from_millis(700), token(1));
        scheduler.schedule_after(Duration::from_millis(900), token(2));
        scheduler.cancel(token(1));

        assert_eq!(fired.recv().await, Some(token(2)));
        assert!(fired.try_recv().is_err());
    }
}

//! Typing Driver
//!
//! Runs a [`TypingLoop`] on the tokio runtime. The driver owns exactly one
//! task, and that task owns the machine and the only pending timer. Every
//! transition re-arms the timer once; a control message (retarget, new
//! timings, stop) drops the pending sleep before anything else happens.
//!
//! Snapshots are published on a `watch` channel so any number of renderers
//! can read the latest prefix without touching the machine.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use super::{TypingLoop, TypingSnapshot, TypingTimings};

/// Control messages for the driver task
#[derive(Debug)]
enum Control {
    Retarget(String),
    Timings(TypingTimings),
}

/// Owns the timer that advances a typing loop
///
/// Dropping the driver aborts its task; once the task is gone no further
/// snapshots are published.
pub struct TypingDriver {
    snapshots: watch::Receiver<TypingSnapshot>,
    control: mpsc::UnboundedSender<Control>,
    task: Option<JoinHandle<()>>,
}

impl TypingDriver {
    /// Mount a loop and start its timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(target: impl AsRef<str>, timings: TypingTimings) -> Self {
        let machine = TypingLoop::new(target, timings);
        let (snap_tx, snap_rx) = watch::channel(machine.snapshot());
        let (control_tx, control_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run(machine, snap_tx, control_rx));

        Self {
            snapshots: snap_rx,
            control: control_tx,
            task: Some(task),
        }
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> TypingSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every published change
    pub fn subscribe(&self) -> watch::Receiver<TypingSnapshot> {
        self.snapshots.clone()
    }

    /// Replace the target text; the pending timer is cancelled and the loop
    /// restarts from `Waiting`
    pub fn retarget(&self, target: impl Into<String>) {
        let _ = self.control.send(Control::Retarget(target.into()));
    }

    /// Replace the timings; the pending timer is re-armed with the new values
    pub fn set_timings(&self, timings: TypingTimings) {
        let _ = self.control.send(Control::Timings(timings));
    }

    /// Whether the driver task is still running
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Unmount: cancel the pending timer and wait for the task to go away
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
        tracing::debug!("Typing driver stopped");
    }
}

impl Drop for TypingDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Driver task: one pending timer at a time
async fn run(
    mut machine: TypingLoop,
    snapshots: watch::Sender<TypingSnapshot>,
    mut control: mpsc::UnboundedReceiver<Control>,
) {
    tracing::debug!(target_text = %machine.target(), "Typing driver started");

    loop {
        if machine.settle() {
            publish(&snapshots, &machine);
        }

        let step = machine.next_step();
        let deadline = Instant::now() + step.delay;

        tokio::select! {
            biased;

            msg = control.recv() => match msg {
                Some(Control::Retarget(text)) => {
                    machine.retarget(text);
                    publish(&snapshots, &machine);
                }
                Some(Control::Timings(timings)) => {
                    machine.set_timings(timings);
                }
                // Driver handle dropped
                None => break,
            },

            () = sleep_until(deadline) => {
                machine.apply(step.action);
                publish(&snapshots, &machine);
            }
        }

        if snapshots.is_closed() {
            break;
        }
    }

    tracing::debug!("Typing driver task exiting");
}

fn publish(snapshots: &watch::Sender<TypingSnapshot>, machine: &TypingLoop) {
    snapshots.send_replace(machine.snapshot());
}

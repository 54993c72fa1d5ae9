#![allow(dead_code)]

//! Timer driver for [`TypingReveal`].
//!
//! Each ticker owns exactly one tokio task, and that task has at most one
//! pending `sleep` at a time: arm, fire, append one character, re-arm. Once
//! the text is fully revealed no timer is armed again. Cancelling (or
//! dropping) the ticker stops the task, and no snapshot published after the
//! cancel returns can ever be observed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use super::reveal::{RevealPhase, TypingReveal};

/// What a subscriber sees at any instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealSnapshot {
    pub revealed: String,
    pub position: usize,
    pub phase: RevealPhase,
}

impl RevealSnapshot {
    fn of(reveal: &TypingReveal) -> Self {
        Self {
            revealed: reveal.revealed().to_string(),
            position: reveal.position(),
            phase: reveal.phase(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == RevealPhase::Done
    }
}

#[derive(Debug)]
enum Command {
    SetSpeed(Duration),
    SetText(String),
}

pub struct TypingTicker {
    snapshots: watch::Receiver<RevealSnapshot>,
    commands: mpsc::UnboundedSender<Command>,
    /// Cleared under the lock on cancel; the task publishes only while it is set.
    live: Arc<Mutex<bool>>,
    timers: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl TypingTicker {
    /// Starts revealing `text`, one character every `speed`.
    /// Must be called from within a tokio runtime.
    pub fn spawn(text: &str, speed: Duration) -> Self {
        let reveal = TypingReveal::new(text);
        let (tx, snapshots) = watch::channel(RevealSnapshot::of(&reveal));
        let (commands, command_rx) = mpsc::unbounded_channel();
        let live = Arc::new(Mutex::new(true));
        let timers = Arc::new(AtomicUsize::new(0));

        debug!(chars = reveal.len(), speed_ms = speed.as_millis() as u64, "typing ticker started");

        let task = tokio::spawn(run(
            reveal,
            speed,
            tx,
            command_rx,
            Arc::clone(&live),
            Arc::clone(&timers),
        ));

        Self {
            snapshots,
            commands,
            live,
            timers,
            task,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<RevealSnapshot> {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Re-arms the pending timer with the new delay, keeping progress.
    pub fn set_speed(&self, speed: Duration) {
        if self.commands.send(Command::SetSpeed(speed)).is_err() {
            debug!("set_speed on a stopped typing ticker ignored");
        }
    }

    /// Switches to a new text and starts over from an empty prefix.
    pub fn set_text(&self, text: &str) {
        if self.commands.send(Command::SetText(text.to_string())).is_err() {
            debug!("set_text on a stopped typing ticker ignored");
        }
    }

    /// Stops the ticker. Idempotent.
    pub fn cancel(&self) {
        let mut live = self.live.lock().unwrap_or_else(|e| e.into_inner());
        if *live {
            *live = false;
            self.task.abort();
            debug!("typing ticker cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        !*self.live.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of one-shot timers armed so far.
    pub fn timers_scheduled(&self) -> usize {
        self.timers.load(Ordering::SeqCst)
    }
}

impl Drop for TypingTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run(
    mut reveal: TypingReveal,
    mut speed: Duration,
    tx: watch::Sender<RevealSnapshot>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    live: Arc<Mutex<bool>>,
    timers: Arc<AtomicUsize>,
) {
    loop {
        if reveal.is_done() {
            // Terminal: nothing armed. Only a new text can restart the reveal.
            match commands.recv().await {
                Some(cmd) => apply(cmd, &mut reveal, &mut speed, &tx, &live),
                None => return,
            }
            continue;
        }

        timers.fetch_add(1, Ordering::SeqCst);
        tokio::select! {
            _ = tokio::time::sleep(speed) => {
                let live = live.lock().unwrap_or_else(|e| e.into_inner());
                if !*live {
                    return;
                }
                reveal.fire();
                tx.send_replace(RevealSnapshot::of(&reveal));
                if reveal.is_done() {
                    debug!(chars = reveal.len(), "typing ticker finished");
                }
            }
            cmd = commands.recv() => match cmd {
                Some(cmd) => apply(cmd, &mut reveal, &mut speed, &tx, &live),
                None => return,
            },
        }
    }
}

fn apply(
    cmd: Command,
    reveal: &mut TypingReveal,
    speed: &mut Duration,
    tx: &watch::Sender<RevealSnapshot>,
    live: &Mutex<bool>,
) {
    match cmd {
        Command::SetSpeed(new_speed) => *speed = new_speed,
        Command::SetText(text) => {
            let live = live.lock().unwrap_or_else(|e| e.into_inner());
            if !*live {
                return;
            }
            reveal.set_text(&text);
            tx.send_replace(RevealSnapshot::of(reveal));
        }
    }
}

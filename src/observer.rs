use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use crate::snapshot::{Progress, Snapshot, TrainingOutcome};

/// Blocks until `Progress::Finished` arrives or all senders are gone. The
/// outcome is `None` in the latter case.
pub fn collect_progress(rx: &Receiver<Progress>) -> (Vec<Snapshot>, Option<TrainingOutcome>) {
    let mut snapshots = Vec::new();

    while let Ok(progress) = rx.recv() {
        match progress {
            Progress::Epoch(snapshot) => snapshots.push(snapshot),
            Progress::Finished(outcome) => return (snapshots, Some(outcome)),
        }
    }

    (snapshots, None)
}

/// Runs `on_snapshot` for every epoch on a dedicated thread. The thread ends
/// with the terminal marker and yields the outcome.
pub fn spawn_observer<F>(
    rx: Receiver<Progress>,
    mut on_snapshot: F,
) -> JoinHandle<Option<TrainingOutcome>>
where
    F: FnMut(&Snapshot) + Send + 'static,
{
    thread::spawn(move || {
        while let Ok(progress) = rx.recv() {
            match progress {
                Progress::Epoch(snapshot) => on_snapshot(&snapshot),
                Progress::Finished(outcome) => return Some(outcome),
            }
        }

        None
    })
}

//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::busy::BusyOperation;
use crate::handler::{BusyTask, UpdateAction};
use crate::message::Message;
use crate::store::ConfigHandle;

pub mod drives;
pub use drives::execute_busy_task;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, config: &ConfigHandle) {
    match action {
        UpdateAction::RunBusy(task) => {
            spawn_busy_task(task, config.clone(), msg_tx);
        }
    }
}

/// Run `task` on the blocking pool and report back with exactly one
/// `BusyFinished` message
pub fn spawn_busy_task(
    task: BusyTask,
    config: ConfigHandle,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()> {
    let operation = task.operation();
    tokio::spawn(async move {
        let result = match tokio::task::spawn_blocking(move || execute_busy_task(&config, task)).await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e.to_string()),
            Err(e) => Err(format!("{} task did not complete: {}", operation, e)),
        };
        report(msg_tx, operation, result).await;
    })
}

/// Forward committed configuration revisions to the UI loop as
/// `ConfigChanged` messages.
///
/// Ends when the configuration or the UI loop goes away.
pub fn spawn_revision_forwarder(
    mut revisions: watch::Receiver<u64>,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while revisions.changed().await.is_ok() {
            let revision = *revisions.borrow_and_update();
            if msg_tx
                .send(Message::ConfigChanged { revision })
                .await
                .is_err()
            {
                break;
            }
        }
        debug!("Revision forwarder stopped");
    })
}

async fn report(msg_tx: mpsc::Sender<Message>, operation: BusyOperation, result: Result<(), String>) {
    if msg_tx
        .send(Message::BusyFinished { operation, result })
        .await
        .is_err()
    {
        warn!("UI loop gone before {} finished", operation);
    }
}

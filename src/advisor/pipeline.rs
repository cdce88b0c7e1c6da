//! Deferred advisor replies
//!
//! The UI hands each query to a worker thread over a channel. The worker
//! waits the configured reply delay, asks the advisor, and sends the
//! normalized reply back as an event. Each query runs as its own task, so
//! overlapping queries are neither cancelled nor ordered.

use super::{query, HealthAdvisor};
use crate::{HealthDeskError, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Commands that can be sent to the advisor pipeline
#[derive(Debug, Clone)]
pub enum AdvisorCommand {
    /// Answer the given query after the reply delay
    Ask {
        prompt: String,
        request_id: Uuid,
    },

    /// Shutdown the pipeline
    Shutdown,
}

/// Events emitted by the advisor pipeline
#[derive(Debug, Clone)]
pub enum AdvisorEvent {
    /// Display text for a finished query
    Reply { reply: String, request_id: Uuid },

    /// The worker itself failed
    Error { error: String },

    /// Pipeline has shut down
    Shutdown,
}

/// Advisor pipeline with channel-based communication
pub struct AdvisorPipeline {
    advisor: Arc<dyn HealthAdvisor>,
    reply_delay: Duration,
    command_tx: Sender<AdvisorCommand>,
    command_rx: Receiver<AdvisorCommand>,
    event_tx: Sender<AdvisorEvent>,
    event_rx: Receiver<AdvisorEvent>,
}

impl AdvisorPipeline {
    pub fn new(advisor: Arc<dyn HealthAdvisor>, reply_delay: Duration) -> Self {
        let (command_tx, command_rx) = bounded(100);
        let (event_tx, event_rx) = bounded(100);

        Self {
            advisor,
            reply_delay,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get a sender for commands
    pub fn command_sender(&self) -> Sender<AdvisorCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events
    pub fn event_receiver(&self) -> Receiver<AdvisorEvent> {
        self.event_rx.clone()
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Start the pipeline worker thread
    ///
    /// The thread owns a tokio runtime and stops on `Shutdown` or when every
    /// command sender has been dropped.
    pub fn start_worker(self) -> Result<()> {
        let AdvisorPipeline {
            advisor,
            reply_delay,
            command_rx,
            event_tx,
            ..
        } = self;

        std::thread::Builder::new()
            .name("advisor-worker".to_string())
            .spawn(move || {
                info!("Advisor worker starting");

                let runtime = match Runtime::new() {
                    Ok(rt) => rt,
                    Err(e) => {
                        error!("Failed to create tokio runtime: {}", e);
                        let _ = event_tx.send(AdvisorEvent::Error {
                            error: format!("Runtime creation failed: {}", e),
                        });
                        let _ = event_tx.send(AdvisorEvent::Shutdown);
                        return;
                    }
                };

                loop {
                    match command_rx.recv() {
                        Ok(AdvisorCommand::Ask { prompt, request_id }) => {
                            debug!("Scheduling reply for request {}", request_id);

                            let advisor = Arc::clone(&advisor);
                            let event_tx = event_tx.clone();

                            runtime.spawn(async move {
                                tokio::time::sleep(reply_delay).await;
                                let reply = query(advisor.as_ref(), &prompt).await;
                                if event_tx
                                    .send(AdvisorEvent::Reply { reply, request_id })
                                    .is_err()
                                {
                                    debug!("Reply for {} dropped, UI is gone", request_id);
                                }
                            });
                        }

                        Ok(AdvisorCommand::Shutdown) => {
                            info!("Advisor worker shutting down");
                            let _ = event_tx.send(AdvisorEvent::Shutdown);
                            break;
                        }

                        Err(_) => {
                            debug!("Command channel closed");
                            break;
                        }
                    }
                }

                info!("Advisor worker stopped");
            })
            .map_err(|e| HealthDeskError::ChannelError(format!("cannot spawn worker: {e}")))?;

        Ok(())
    }
}

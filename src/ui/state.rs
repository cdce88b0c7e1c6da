//! Application state management
//!
//! This module provides the page stack and the conversation flow for the
//! HealthDesk UI.

use crate::advisor::{AdvisorCommand, AdvisorEvent, AdvisorPipeline};
use crate::records::{ConversationLog, LogEntry};
use crate::HealthDeskError;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One page of the page stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Ai,
    Reports,
    Appointments,
    Settings,
}

impl Page {
    /// Pages in navigation bar order
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Ai,
        Page::Reports,
        Page::Appointments,
        Page::Settings,
    ];

    /// Navigation button label
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Ai => "AI Health Predictor",
            Page::Reports => "Reports",
            Page::Appointments => "Appointments",
            Page::Settings => "Settings",
        }
    }
}

/// Central application state
pub struct AppState {
    /// The one visible page
    pub current_page: Page,

    /// Current query input
    pub input_text: String,

    /// Conversation shown on the reports page
    pub log: ConversationLog,

    /// Queries submitted but not yet answered
    pub pending_replies: usize,

    /// Channel to send advisor commands
    pub advisor_command_tx: Option<Sender<AdvisorCommand>>,

    /// Channel to receive advisor events
    pub advisor_event_rx: Option<Receiver<AdvisorEvent>>,

    /// Last worker error
    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_page: Page::Dashboard,
            input_text: String::new(),
            log: ConversationLog::new(),
            pending_replies: 0,
            advisor_command_tx: None,
            advisor_event_rx: None,
            last_error: None,
        }
    }

    /// Wire the advisor pipeline channels into this state
    pub fn connect_advisor(&mut self, pipeline: &AdvisorPipeline) {
        self.advisor_command_tx = Some(pipeline.command_sender());
        self.advisor_event_rx = Some(pipeline.event_receiver());
    }

    /// Make `page` the visible page
    pub fn select_page(&mut self, page: Page) {
        if self.current_page != page {
            debug!("Switching page {:?} -> {:?}", self.current_page, page);
        }
        self.current_page = page;
    }

    /// Log the current input and hand it to the advisor.
    ///
    /// Blank input is ignored.
    pub fn submit_query(&mut self) {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.log.append(LogEntry::user(text.clone()));
        self.input_text.clear();

        let Some(tx) = &self.advisor_command_tx else {
            warn!("No advisor connected, query will not be answered");
            return;
        };

        let request_id = Uuid::new_v4();
        match tx.send(AdvisorCommand::Ask {
            prompt: text,
            request_id,
        }) {
            Ok(()) => {
                self.pending_replies += 1;
                debug!("Submitted query {}", request_id);
            }
            Err(e) => {
                warn!("Advisor worker unavailable: {}", e);
                let error = HealthDeskError::ChannelError(e.to_string());
                self.last_error = Some(error.user_message());
            }
        }
    }

    /// Process incoming events from the advisor worker
    pub fn poll_events(&mut self) {
        let Some(rx) = &self.advisor_event_rx else {
            return;
        };

        while let Ok(event) = rx.try_recv() {
            match event {
                AdvisorEvent::Reply { reply, request_id } => {
                    debug!("Reply received for {}", request_id);
                    self.log.append(LogEntry::ai(reply));
                    self.log.append(LogEntry::separator());
                    self.pending_replies = self.pending_replies.saturating_sub(1);
                }
                AdvisorEvent::Error { error } => {
                    warn!("Advisor error: {}", error);
                    self.last_error = Some(error);
                    self.pending_replies = 0;
                }
                AdvisorEvent::Shutdown => {
                    info!("Advisor pipeline shutdown");
                    self.pending_replies = 0;
                }
            }
        }
    }

    /// Whether any reply is still outstanding
    pub fn is_waiting(&self) -> bool {
        self.pending_replies > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn wired_state() -> (AppState, Receiver<AdvisorCommand>, Sender<AdvisorEvent>) {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let mut state = AppState::new();
        state.advisor_command_tx = Some(cmd_tx);
        state.advisor_event_rx = Some(evt_rx);
        (state, cmd_rx, evt_tx)
    }

    #[test]
    fn test_starts_on_dashboard() {
        assert_eq!(AppState::new().current_page, Page::Dashboard);
    }

    #[test]
    fn test_select_page() {
        let mut state = AppState::new();
        for page in Page::ALL {
            state.select_page(page);
            assert_eq!(state.current_page, page);
        }
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let (mut state, cmd_rx, _evt_tx) = wired_state();
        state.input_text = "   \t".to_string();
        state.submit_query();

        assert!(state.log.is_empty());
        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(state.pending_replies, 0);
    }

    #[test]
    fn test_submit_logs_user_line_and_sends() {
        let (mut state, cmd_rx, _evt_tx) = wired_state();
        state.input_text = "  What is flu?  ".to_string();
        state.submit_query();

        assert_eq!(state.log.lines(), vec!["User: What is flu?"]);
        assert!(state.input_text.is_empty());
        assert!(state.is_waiting());
        match cmd_rx.try_recv().unwrap() {
            AdvisorCommand::Ask { prompt, .. } => assert_eq!(prompt, "What is flu?"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_reply_appends_ai_line_and_separator() {
        let (mut state, _cmd_rx, evt_tx) = wired_state();
        state.input_text = "What is flu?".to_string();
        state.submit_query();

        evt_tx
            .send(AdvisorEvent::Reply {
                reply: "Error: timeout".to_string(),
                request_id: Uuid::new_v4(),
            })
            .unwrap();
        state.poll_events();

        assert_eq!(
            state.log.lines(),
            vec![
                "User: What is flu?".to_string(),
                "AI: Error: timeout".to_string(),
                "\n----------------------\n".to_string(),
            ]
        );
        assert!(!state.is_waiting());
    }

    #[test]
    fn test_worker_error_clears_pending() {
        let (mut state, _cmd_rx, evt_tx) = wired_state();
        for text in ["first", "second"] {
            state.input_text = text.to_string();
            state.submit_query();
        }
        assert_eq!(state.pending_replies, 2);

        evt_tx
            .send(AdvisorEvent::Error {
                error: "Failed to create runtime: no threads".to_string(),
            })
            .unwrap();
        state.poll_events();

        assert!(!state.is_waiting());
        assert_eq!(
            state.last_error.as_deref(),
            Some("Failed to create runtime: no threads")
        );
        assert_eq!(state.log.len(), 2);
    }

    #[test]
    fn test_shutdown_clears_pending() {
        let (mut state, _cmd_rx, evt_tx) = wired_state();
        state.input_text = "hello".to_string();
        state.submit_query();
        assert!(state.is_waiting());

        evt_tx.send(AdvisorEvent::Shutdown).unwrap();
        state.poll_events();

        assert!(!state.is_waiting());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_closed_worker_sets_error() {
        let (mut state, cmd_rx, _evt_tx) = wired_state();
        drop(cmd_rx);
        state.input_text = "hello".to_string();
        state.submit_query();

        assert_eq!(state.log.len(), 1);
        assert_eq!(state.pending_replies, 0);
        assert_eq!(
            state.last_error.as_deref(),
            Some("Internal communication error. Please restart the application.")
        );
    }

    #[test]
    fn test_submit_without_advisor_still_logs() {
        let mut state = AppState::new();
        state.input_text = "hello".to_string();
        state.submit_query();
        assert_eq!(state.log.len(), 1);
        assert_eq!(state.pending_replies, 0);
    }
}

use crate::api::{ApiError, RephraseReply};
use crate::models::{SubmissionId, TitleResult, Toast};

use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

pub const GENERIC_FAILURE: &str = "Failed to rephrase title. Please try again.";

#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub exit_pending: bool,
    pub show_help: bool,
    pub input_buffer: String,
    pub is_loading: bool,
    pub result: Option<TitleResult>,
    pub toasts: Vec<Toast>,
    pub toast_duration: Duration,
    in_flight: Option<SubmissionId>,
}

impl App {
    pub const fn new(toast_duration: Duration) -> Self {
        Self {
            should_quit: false,
            exit_pending: false,
            show_help: false,
            input_buffer: String::new(),
            is_loading: false,
            result: None,
            toasts: Vec::new(),
            toast_duration,
            in_flight: None,
        }
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// The trimmed headline, or `None` if there is nothing to send.
    pub fn submittable_title(&self) -> Option<String> {
        let title = self.input_buffer.trim();
        (!title.is_empty()).then(|| title.to_string())
    }

    /// Mark a call as outstanding and drop the previous result.
    ///
    /// Returns `None` while another call is still pending; overlapping
    /// submissions are refused rather than raced.
    pub fn begin_submission(&mut self) -> Option<SubmissionId> {
        if self.is_loading {
            debug!("submission refused, another call is pending");
            return None;
        }

        let id = SubmissionId::new();
        self.is_loading = true;
        self.result = None;
        self.in_flight = Some(id);
        Some(id)
    }

    /// Apply the outcome of submission `id`. Outcomes for anything other than
    /// the in-flight submission are dropped and `false` is returned.
    pub fn settle(
        &mut self,
        id: SubmissionId,
        original: String,
        outcome: Result<RephraseReply, ApiError>,
    ) -> bool {
        if self.in_flight != Some(id) {
            debug!(submission = %id, "ignoring stale settlement");
            return false;
        }

        self.in_flight = None;
        self.is_loading = false;

        match outcome {
            Ok(RephraseReply::Rephrased(rephrased)) => {
                info!(submission = %id, "title rephrased");
                self.result = Some(TitleResult::new(original, rephrased));
            }
            Ok(RephraseReply::Rejected(reason)) => {
                warn!(submission = %id, %reason, "rephrase rejected");
                self.notify(reason);
            }
            Err(err) => {
                error!(submission = %id, error = %err, "rephrase failed");
                self.notify(GENERIC_FAILURE);
            }
        }
        true
    }

    /// Abandon the in-flight call, if any. No notification is raised.
    pub fn cancel_submission(&mut self) -> bool {
        match self.in_flight.take() {
            Some(id) => {
                info!(submission = %id, "submission cancelled");
                self.is_loading = false;
                true
            }
            None => false,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message));
    }

    pub fn prune_toasts(&mut self, now: Instant) {
        let ttl = self.toast_duration;
        self.toasts.retain(|toast| !toast.is_expired(now, ttl));
    }

    pub fn latest_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new() {
        let app = App::default();
        assert!(!app.should_quit);
        assert!(!app.is_loading);
        assert!(app.result.is_none());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::default();
        app.quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_help() {
        let mut app = App::default();
        assert!(!app.show_help);
        app.toggle_help();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);
    }

    #[test]
    fn test_submittable_title() {
        let mut app = App::default();
        assert_eq!(app.submittable_title(), None);
        app.input_buffer = "   ".to_string();
        assert_eq!(app.submittable_title(), None);
        app.input_buffer = "  नई योजना ".to_string();
        assert_eq!(app.submittable_title(), Some("नई योजना".to_string()));
    }

    #[test]
    fn test_begin_submission_clears_result() {
        let mut app = App::default();
        app.result = Some(TitleResult::new("a", "b"));

        assert!(app.begin_submission().is_some());
        assert!(app.is_loading);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_begin_submission_refuses_overlap() {
        let mut app = App::default();
        let first = app.begin_submission();
        assert!(first.is_some());
        assert!(app.begin_submission().is_none());
        assert!(app.is_loading);
    }

    #[test]
    fn test_settle_ignores_stale_id() {
        let mut app = App::default();
        let first = app.begin_submission().unwrap();
        assert!(app.cancel_submission());
        let second = app.begin_submission().unwrap();

        let applied = app.settle(
            first,
            "old".to_string(),
            Ok(RephraseReply::Rephrased("stale".to_string())),
        );
        assert!(!applied);
        assert!(app.is_loading);
        assert!(app.result.is_none());

        assert!(app.settle(
            second,
            "new".to_string(),
            Ok(RephraseReply::Rephrased("fresh".to_string())),
        ));
        assert_eq!(app.result, Some(TitleResult::new("new", "fresh")));
    }

    #[test]
    fn test_cancel_without_pending() {
        let mut app = App::default();
        assert!(!app.cancel_submission());
    }

    #[test]
    fn test_cancel_raises_no_toast() {
        let mut app = App::default();
        app.begin_submission().unwrap();
        assert!(app.cancel_submission());
        assert!(!app.is_loading);
        assert!(app.result.is_none());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_prune_toasts() {
        let mut app = App::new(Duration::from_secs(2));
        app.notify("one");
        let raised = app.toasts[0].raised_at;

        app.prune_toasts(raised + Duration::from_secs(1));
        assert_eq!(app.toasts.len(), 1);

        app.prune_toasts(raised + Duration::from_secs(2));
        assert!(app.toasts.is_empty());
        assert!(app.latest_toast().is_none());
    }
}

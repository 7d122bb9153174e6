//! Submit action: freeze the draft, call the sink once, settle the form

use super::error::SubmitError;
use super::payload::{Receipt, SubmissionPayload};
use super::traits::SubmissionSink;
use crate::state::{Notification, NotificationSurface, RequestForm};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

/// Result of one sink call, sent back to the UI loop
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub result: Result<Receipt, SubmitError>,
}

/// Runs sink calls in the background and applies their outcome to the form.
///
/// The form's in-flight flag is the lock: [`Submitter::submit`] takes it via
/// [`RequestForm::begin_submission`] and only settling an outcome releases it.
pub struct Submitter {
    sink: Arc<dyn SubmissionSink>,
    timeout: Duration,
    outcomes_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    in_flight: Option<(Uuid, JoinHandle<()>)>,
}

impl Submitter {
    pub fn new(sink: Arc<dyn SubmissionSink>, timeout: Duration) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            sink,
            timeout,
            outcomes_tx,
            outcomes_rx,
            in_flight: None,
        }
    }

    pub fn sink_description(&self) -> String {
        self.sink.describe()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a submission of the form's current draft.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, form: &mut RequestForm) -> Result<Uuid, SubmitError> {
        if self.in_flight.is_some() {
            return Err(SubmitError::InProgress);
        }
        let payload = form.begin_submission()?;
        let id = payload.id;
        info!(submission_id = %id, sink = %self.sink.describe(), "Submitting interview request");

        let sink = Arc::clone(&self.sink);
        let tx = self.outcomes_tx.clone();
        let timeout = self.timeout;
        let handle = tokio::spawn(async move {
            let result = deliver(sink.as_ref(), &payload, timeout).await;
            // The receiver lives as long as the submitter
            let _ = tx.send(SubmissionOutcome { id, result });
        });
        self.in_flight = Some((id, handle));
        Ok(id)
    }

    /// Apply a finished submission, if any, without waiting
    pub fn poll(
        &mut self,
        form: &mut RequestForm,
        notifications: &mut dyn NotificationSurface,
    ) -> Option<Result<Receipt, SubmitError>> {
        let outcome = match self.outcomes_rx.try_recv() {
            Ok(outcome) => outcome,
            Err(_) => {
                // A task that ended without reporting must still release the lock
                let (id, handle) = self.in_flight.as_ref()?;
                if !handle.is_finished() {
                    return None;
                }
                let id = *id;
                self.outcomes_rx
                    .try_recv()
                    .unwrap_or(SubmissionOutcome {
                        id,
                        result: Err(SubmitError::Interrupted),
                    })
            }
        };
        Some(self.settle(outcome, form, notifications))
    }

    /// Wait for the in-flight submission and apply it
    pub async fn settle_next(
        &mut self,
        form: &mut RequestForm,
        notifications: &mut dyn NotificationSurface,
    ) -> Option<Result<Receipt, SubmitError>> {
        let (id, handle) = self.in_flight.as_mut()?;
        let id = *id;
        // The task sends before it ends, so a joined task has either reported or died
        let _ = handle.await;
        let outcome = self.outcomes_rx.try_recv().unwrap_or(SubmissionOutcome {
            id,
            result: Err(SubmitError::Interrupted),
        });
        Some(self.settle(outcome, form, notifications))
    }

    fn settle(
        &mut self,
        outcome: SubmissionOutcome,
        form: &mut RequestForm,
        notifications: &mut dyn NotificationSurface,
    ) -> Result<Receipt, SubmitError> {
        self.in_flight = None;
        match &outcome.result {
            Ok(receipt) => {
                info!(
                    submission_id = %outcome.id,
                    location = ?receipt.location,
                    "Interview request accepted"
                );
                form.finish_submission(true);
                notifications.notify(
                    Notification::success("Application sent").with_detail("We will contact you soon!"),
                );
            }
            Err(e) => {
                warn!(submission_id = %outcome.id, "Interview request failed: {e}");
                form.finish_submission(false);
                let detail = if e.is_retryable() {
                    format!("{e}. Please try again")
                } else {
                    e.to_string()
                };
                notifications.notify(Notification::error("Sending failed").with_detail(detail));
            }
        }
        outcome.result
    }
}

/// One sink call bounded by `limit`
async fn deliver(
    sink: &dyn SubmissionSink,
    payload: &SubmissionPayload,
    limit: Duration,
) -> Result<Receipt, SubmitError> {
    match tokio::time::timeout(limit, sink.submit(payload)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(SubmitError::TimedOut(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        AttachmentCandidate, EmploymentType, FormSlot, MockNotificationSurface, Severity,
    };
    use crate::submission::error::SinkError;
    use crate::submission::traits::MockSubmissionSink;
    use async_trait::async_trait;
    use tokio_test::{assert_err, assert_ok};

    fn filled_form() -> RequestForm {
        let mut form = RequestForm::new();
        for (slot, text) in [
            (FormSlot::Name, "Ann Lee"),
            (FormSlot::Phone, "79991234567"),
            (FormSlot::Email, "a@b.com"),
        ] {
            form.focus(slot);
            form.insert_text(text);
        }
        form.set_employment_type(EmploymentType::Remote);
        form
    }

    fn expect_notification(severity: Severity, title: &'static str) -> MockNotificationSurface {
        let mut surface = MockNotificationSurface::new();
        surface
            .expect_notify()
            .withf(move |n| n.severity == severity && n.title == title)
            .times(1)
            .return_const(());
        surface
    }

    fn accepting_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_describe().return_const("mock".to_string());
        sink.expect_submit()
            .times(1)
            .returning(|payload| Ok(Receipt::accepted(payload.id)));
        sink
    }

    /// Sink that never answers within a test's patience
    struct SlowSink;

    #[async_trait]
    impl SubmissionSink for SlowSink {
        fn describe(&self) -> String {
            "slow".to_string()
        }

        async fn submit(&self, payload: &SubmissionPayload) -> Result<Receipt, SinkError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Receipt::accepted(payload.id))
        }
    }

    #[tokio::test]
    async fn test_success_resets_form() {
        let mut submitter = Submitter::new(Arc::new(accepting_sink()), Duration::from_secs(5));
        let mut form = filled_form();
        form.attach(AttachmentCandidate::new("cv.pdf", 10, "application/pdf"))
            .unwrap();
        let mut surface = expect_notification(Severity::Success, "Application sent");

        let id = assert_ok!(submitter.submit(&mut form));
        let receipt = assert_ok!(submitter.settle_next(&mut form, &mut surface).await.unwrap());

        assert_eq!(receipt.submission_id, id);
        assert!(form.draft().is_blank());
        assert!(form.attachment().is_none());
        assert!(!form.is_in_flight());
        assert!(!submitter.is_busy());
    }

    #[tokio::test]
    async fn test_failure_keeps_draft() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_describe().return_const("mock".to_string());
        sink.expect_submit()
            .times(1)
            .returning(|_| Err(SinkError::Rejected("busy".to_string())));
        let mut submitter = Submitter::new(Arc::new(sink), Duration::from_secs(5));
        let mut form = filled_form();
        let before = form.draft().clone();
        let mut surface = expect_notification(Severity::Error, "Sending failed");

        assert_ok!(submitter.submit(&mut form));
        let err = assert_err!(submitter.settle_next(&mut form, &mut surface).await.unwrap());

        assert!(matches!(err, SubmitError::Failed(SinkError::Rejected(_))));
        assert_eq!(form.draft(), &before);
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_double_submit_calls_sink_once() {
        let mut submitter = Submitter::new(Arc::new(accepting_sink()), Duration::from_secs(5));
        let mut form = filled_form();
        let mut surface = expect_notification(Severity::Success, "Application sent");

        assert_ok!(submitter.submit(&mut form));
        let second = submitter.submit(&mut form);
        assert!(matches!(second, Err(SubmitError::InProgress)));

        assert_ok!(submitter.settle_next(&mut form, &mut surface).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_sink() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().times(0);
        let mut submitter = Submitter::new(Arc::new(sink), Duration::from_secs(5));
        let mut form = RequestForm::new();

        let result = submitter.submit(&mut form);
        assert!(matches!(result, Err(SubmitError::NotSubmittable(_))));
        assert!(!submitter.is_busy());
    }

    #[tokio::test]
    async fn test_slow_sink_times_out() {
        let mut submitter = Submitter::new(Arc::new(SlowSink), Duration::from_millis(10));
        let mut form = filled_form();
        let mut surface = expect_notification(Severity::Error, "Sending failed");

        assert_ok!(submitter.submit(&mut form));
        let err = assert_err!(submitter.settle_next(&mut form, &mut surface).await.unwrap());

        assert!(matches!(err, SubmitError::TimedOut(_)));
        assert!(err.is_retryable());
        assert!(!form.draft().is_blank());
        assert!(!form.is_in_flight());
    }

    #[tokio::test]
    async fn test_poll_without_submission_is_none() {
        let mut submitter = Submitter::new(Arc::new(MockSubmissionSink::new()), Duration::from_secs(1));
        let mut form = RequestForm::new();
        let mut surface = MockNotificationSurface::new();
        surface.expect_notify().times(0);

        assert!(submitter.poll(&mut form, &mut surface).is_none());
        assert!(submitter.settle_next(&mut form, &mut surface).await.is_none());
    }

    #[tokio::test]
    async fn test_poll_picks_up_finished_submission() {
        let mut submitter = Submitter::new(Arc::new(accepting_sink()), Duration::from_secs(5));
        let mut form = filled_form();
        let mut surface = expect_notification(Severity::Success, "Application sent");

        assert_ok!(submitter.submit(&mut form));
        let mut settled = None;
        for _ in 0..100 {
            if let Some(result) = submitter.poll(&mut form, &mut surface) {
                settled = Some(result);
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert!(matches!(settled, Some(Ok(_))));
        assert!(form.draft().is_blank());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let mut sink = MockSubmissionSink::new();
        let mut seq = mockall::Sequence::new();
        sink.expect_describe().return_const("mock".to_string());
        sink.expect_submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(SinkError::Rejected("down".to_string())));
        sink.expect_submit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|payload| Ok(Receipt::accepted(payload.id)));
        let mut submitter = Submitter::new(Arc::new(sink), Duration::from_secs(5));
        let mut form = filled_form();

        let mut failed = expect_notification(Severity::Error, "Sending failed");
        assert_ok!(submitter.submit(&mut form));
        assert_err!(submitter.settle_next(&mut form, &mut failed).await.unwrap());

        let mut sent = expect_notification(Severity::Success, "Application sent");
        assert_ok!(submitter.submit(&mut form));
        assert_ok!(submitter.settle_next(&mut form, &mut sent).await.unwrap());
        assert!(form.draft().is_blank());
    }
}

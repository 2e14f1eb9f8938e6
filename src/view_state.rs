//! Ephemeral UI state for the portfolio page.
//!
//! [`ViewStateController`] owns every piece of interactive state on the page: which
//! experience entries are expanded, which tabs are active, how far each skill bar has
//! filled, how much of the bio has been typed out and where the contact form submission
//! is in its lifecycle. It never blocks. Timed behavior is driven from outside through
//! [`ViewStateController::advance`], and submissions are finished through
//! [`ViewStateController::complete_submission`] once a [`SubmissionBackend`] answers.

mod accordion;
mod backend;
mod config;
mod metric;
mod notify;
mod submission;
mod tabs;
mod typing;

pub use accordion::{Accordion, ExpandableItem};
pub use backend::{
    Delivered, NetworkError, SimulatedBackend, SimulatedOutcome, SleepFn, SubmissionBackend,
};
pub use config::{AccordionPolicy, ControllerConfig};
pub use metric::{AnimatedMetric, Metrics};
pub use notify::{Notification, NotificationKind, NotificationSink, NotificationSource};
pub use submission::{
    ContactForm, ContactMessage, FormField, SubmissionFailure, SubmissionState, SubmissionTicket,
    SubmitRejected, ValidationError,
};
pub use tabs::{TabSelection, Tabs};
pub use typing::{TypingState, Typewriter};

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::content::{Content, PROJECT_TAB_GROUP};

/// Read-only projection of the controller for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub expanded: Vec<ExpandableItem>,
    pub tabs: BTreeMap<String, String>,
    pub metrics: BTreeMap<String, f64>,
    pub revealed_text: String,
    pub typing_complete: bool,
    pub submission: SubmissionState,
    pub form: ContactForm,
    pub selected_project: Option<u32>,
}

impl ViewSnapshot {
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.iter().any(|i| i.id == id && i.is_expanded)
    }

    pub fn active_tab(&self, group: &str) -> Option<&str> {
        self.tabs.get(group).map(String::as_str)
    }

    /// Current fill of a bar, rounded for display.
    pub fn metric(&self, key: &str) -> u8 {
        self.metrics
            .get(key)
            .map(|v| v.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(0)
    }
}

pub struct ViewStateController {
    config: ControllerConfig,
    content: Arc<Content>,
    accordion: Accordion,
    tabs: Tabs,
    metrics: Metrics,
    typing: Typewriter,
    form: ContactForm,
    submission: SubmissionState,
    generation: u64,
    selected_project: Option<u32>,
    sink: Box<dyn NotificationSink>,
}

impl ViewStateController {
    pub fn new(
        content: Arc<Content>,
        config: ControllerConfig,
        sink: impl NotificationSink + 'static,
    ) -> Self {
        let accordion = Accordion::new(content.expandable_ids(), config.accordion);
        let tabs = Tabs::new(content.tab_groups());
        let metrics = Metrics::new(content.skills().map(|s| s.metric.clone()));
        Self {
            config,
            content,
            accordion,
            tabs,
            metrics,
            typing: Typewriter::default(),
            form: ContactForm::default(),
            submission: SubmissionState::Idle,
            generation: 0,
            selected_project: None,
            sink: Box::new(sink),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn content(&self) -> &Arc<Content> {
        &self.content
    }

    pub fn toggle_expand(&mut self, id: &str) -> bool {
        let toggled = self.accordion.toggle(id);
        if toggled {
            log::debug!("toggled {id}, expanded={}", self.accordion.is_expanded(id));
        } else {
            log::debug!("ignoring toggle for unknown item {id}");
        }
        toggled
    }

    /// Returns true only when the active tab changed.
    pub fn select_tab(&mut self, group: &str, tab: &str) -> bool {
        let changed = self.tabs.select(group, tab);
        if changed {
            log::debug!("tab group {group} -> {tab}");
        }
        changed
    }

    pub fn start_metric_animation(&mut self, key: &str, target: u8) -> bool {
        self.metrics.start(
            key,
            target,
            Duration::ZERO,
            self.config.metric_duration(),
        )
    }

    /// Fills every skill bar to its declared target after the configured start delay.
    pub fn start_skill_animations(&mut self) {
        let delay = self.config.metric_start_delay();
        let duration = self.config.metric_duration();
        for skill in self.content.skills() {
            self.metrics.start(&skill.metric, skill.target, delay, duration);
        }
    }

    pub fn start_typing(&mut self, text: &str) {
        self.typing.start(text, self.config.typing_interval());
    }

    /// Types out the profile bio.
    pub fn start_bio_typing(&mut self) {
        let bio = self.content.profile.bio.clone();
        self.start_typing(&bio);
    }

    /// Moves every running animation forward by `dt`. Returns true if anything visible changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let metrics = self.metrics.advance(dt);
        let typing = self.typing.advance(dt);
        metrics || typing
    }

    pub fn is_animating(&self) -> bool {
        self.metrics.is_animating() || self.typing.is_typing()
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        if matches!(self.submission, SubmissionState::Failed(_)) {
            self.submission = SubmissionState::Idle;
        }
        self.form.set(field, value);
    }

    /// Submits the form currently held by the controller.
    pub fn submit_current(&mut self) -> Result<SubmissionTicket, SubmitRejected> {
        let form = self.form.clone();
        self.submit(form)
    }

    /// Validates `form` and, if it passes, moves to `Submitting` and hands back a ticket.
    ///
    /// The caller sends `ticket.message` to a [`SubmissionBackend`] and reports the result
    /// through [`Self::complete_submission`].
    pub fn submit(&mut self, form: ContactForm) -> Result<SubmissionTicket, SubmitRejected> {
        if self.submission.is_submitting() {
            log::debug!("rejecting submit, already submitting");
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if self.submission.is_settled() {
            self.submission = SubmissionState::Idle;
        }
        self.form = form;

        let message = match self.form.validate() {
            Ok(message) => message,
            Err(err) => {
                log::debug!("contact form invalid: {err}");
                self.submission = SubmissionState::Failed(err.clone().into());
                self.sink.notify(
                    Notification::error("Please check the form", err.to_string()).from_submission(),
                );
                return Err(SubmitRejected::Invalid(err));
            }
        };

        self.generation += 1;
        self.submission = SubmissionState::Submitting;
        log::debug!("submission {} started", self.generation);
        Ok(SubmissionTicket {
            generation: self.generation,
            message,
        })
    }

    /// Applies a backend result. Results for cancelled or superseded submissions are dropped.
    pub fn complete_submission(
        &mut self,
        ticket: &SubmissionTicket,
        result: Result<Delivered, NetworkError>,
    ) -> bool {
        if !self.submission.is_submitting() || ticket.generation != self.generation {
            log::debug!(
                "dropping stale completion for submission {} (current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        match result {
            Ok(Delivered) => {
                self.submission = SubmissionState::Succeeded;
                self.form = ContactForm::default();
                self.sink.notify(
                    Notification::success(
                        "Message Sent Successfully!",
                        "Thank you for your message. I'll get back to you within 24 hours.",
                    )
                    .from_submission(),
                );
            }
            Err(err) => {
                log::warn!("submission {} failed: {err}", ticket.generation);
                self.sink.notify(
                    Notification::error("Message Not Sent", format!("{err}. Please try again."))
                        .from_submission(),
                );
                self.submission = SubmissionState::Failed(err.into());
            }
        }
        true
    }

    /// Acknowledges a finished submission.
    pub fn dismiss_submission(&mut self) -> bool {
        if !self.submission.is_settled() {
            return false;
        }
        self.submission = SubmissionState::Idle;
        true
    }

    /// Abandons the submission in flight. Its eventual result will be ignored.
    pub fn cancel_submission(&mut self) -> bool {
        if !self.submission.is_submitting() {
            return false;
        }
        log::debug!("submission {} cancelled", self.generation);
        self.generation += 1;
        self.submission = SubmissionState::Idle;
        true
    }

    pub fn open_project(&mut self, id: u32) -> bool {
        if self.content.project(id).is_none() {
            log::debug!("ignoring unknown project {id}");
            return false;
        }
        self.selected_project = Some(id);
        self.tabs.reset(PROJECT_TAB_GROUP);
        true
    }

    pub fn close_project(&mut self) -> bool {
        self.selected_project.take().is_some()
    }

    pub fn request_resume_download(&mut self) {
        log::info!("resume download requested");
        self.sink.notify(Notification::info(
            "Resume download started!",
            format!("Preparing {}'s resume.", self.content.profile.name),
        ));
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let typing = self.typing.state();
        ViewSnapshot {
            expanded: self.accordion.items().to_vec(),
            tabs: self.tabs.active_keys(),
            metrics: self.metrics.current_values(),
            revealed_text: typing.revealed_text().to_string(),
            typing_complete: self.typing.is_complete(),
            submission: self.submission.clone(),
            form: self.form.clone(),
            selected_project: self.selected_project,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::executor::block_on;

    use super::backend::tests::no_sleep;
    use super::*;
    use crate::content::tests::sample_content;
    use crate::content::SKILLS_TAB_GROUP;

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<Notification>>>);

    impl RecordingSink {
        fn taken(&self) -> Vec<Notification> {
            std::mem::take(&mut *self.0.lock().expect("sink lock"))
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) {
            self.0.lock().expect("sink lock").push(notification);
        }
    }

    fn controller() -> (ViewStateController, RecordingSink) {
        let sink = RecordingSink::default();
        let ctrl = ViewStateController::new(
            Arc::new(sample_content()),
            ControllerConfig::default(),
            sink.clone(),
        );
        (ctrl, sink)
    }

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            company: String::new(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn run_until_idle(ctrl: &mut ViewStateController) {
        let tick = ctrl.config().tick();
        let mut frames = 0;
        while ctrl.is_animating() {
            ctrl.advance(tick);
            frames += 1;
            assert!(frames < 100_000, "animations never settled");
        }
    }

    #[test]
    fn test_initial_snapshot() {
        let (ctrl, _) = controller();
        let snap = ctrl.snapshot();
        assert_eq!(snap.expanded.len(), 2);
        assert!(snap.expanded.iter().all(|i| !i.is_expanded));
        assert_eq!(snap.active_tab(SKILLS_TAB_GROUP), Some("cloud"));
        assert_eq!(snap.active_tab(PROJECT_TAB_GROUP), Some("overview"));
        assert_eq!(snap.metric("aws"), 0);
        assert_eq!(snap.submission, SubmissionState::Idle);
        assert!(snap.form.is_empty());
        assert_eq!(snap.selected_project, None);
        assert_eq!(snap.revealed_text, "");
        assert!(!snap.typing_complete);
    }

    #[test]
    fn test_toggle_expand_involution() {
        let (mut ctrl, _) = controller();
        let before = ctrl.snapshot().is_expanded("exp-1");
        assert!(ctrl.toggle_expand("exp-1"));
        assert_ne!(ctrl.snapshot().is_expanded("exp-1"), before);
        assert!(ctrl.toggle_expand("exp-1"));
        assert_eq!(ctrl.snapshot().is_expanded("exp-1"), before);
        assert!(!ctrl.toggle_expand("exp-42"));
    }

    #[test]
    fn test_select_tab_idempotent() {
        let (mut ctrl, _) = controller();
        assert!(ctrl.select_tab("skills", "devops"));
        assert!(ctrl.select_tab("skills", "cloud"));
        assert!(!ctrl.select_tab("skills", "cloud"));
        assert!(!ctrl.select_tab("skills", "mainframes"));
        assert_eq!(ctrl.snapshot().active_tab("skills"), Some("cloud"));
    }

    #[test]
    fn test_metric_animation_reaches_target() {
        let (mut ctrl, _) = controller();
        assert!(ctrl.start_metric_animation("aws", 90));
        let mut last = 0.0;
        while ctrl.is_animating() {
            ctrl.advance(Duration::from_millis(16));
            let now = ctrl.snapshot().metrics["aws"];
            assert!(now >= last);
            last = now;
        }
        assert_eq!(ctrl.snapshot().metrics["aws"], 90.0);
    }

    #[test]
    fn test_skill_animations_fill_all_bars() {
        let (mut ctrl, _) = controller();
        ctrl.start_skill_animations();
        // nothing moves during the start delay
        ctrl.advance(Duration::from_millis(400));
        assert_eq!(ctrl.snapshot().metric("docker"), 0);
        run_until_idle(&mut ctrl);

        let content = sample_content();
        let snap = ctrl.snapshot();
        for skill in content.skills() {
            assert_eq!(snap.metric(&skill.metric), skill.target, "{}", skill.metric);
        }
    }

    #[test]
    fn test_typing_bio() {
        let (mut ctrl, _) = controller();
        ctrl.start_typing("abc");
        assert_eq!(ctrl.snapshot().revealed_text, "");
        run_until_idle(&mut ctrl);
        let snap = ctrl.snapshot();
        assert_eq!(snap.revealed_text, "abc");
        assert!(snap.typing_complete);

        ctrl.start_bio_typing();
        ctrl.advance(ctrl.config().typing_interval() * 2);
        assert_eq!(ctrl.snapshot().revealed_text, "IT");
        run_until_idle(&mut ctrl);
        assert_eq!(ctrl.snapshot().revealed_text, ctrl.content().profile.bio);
    }

    #[test]
    fn test_missing_name_fails_validation() {
        let (mut ctrl, sink) = controller();
        let res = ctrl.submit(form("", "a@b.com", "Hi", "Hello"));
        let Err(SubmitRejected::Invalid(err)) = res else {
            panic!("expected validation failure, got {res:?}");
        };
        assert_eq!(err.missing_fields, vec![FormField::Name]);
        assert_eq!(
            ctrl.submission(),
            &SubmissionState::Failed(SubmissionFailure::Validation(err))
        );

        let notes = sink.taken();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert!(notes[0].is_from_submission());
    }

    #[test]
    fn test_malformed_email_never_submits() {
        let (mut ctrl, _) = controller();
        let res = ctrl.submit(form("A", "not-an-email", "Hi", "Hello"));
        assert!(matches!(res, Err(SubmitRejected::Invalid(ref e)) if e.malformed_email));
        assert!(!ctrl.submission().is_submitting());
    }

    #[test]
    fn test_successful_submission_clears_form() {
        let (mut ctrl, sink) = controller();
        let ticket = ctrl
            .submit(form("A", "a@b.com", "Hi", "Hello"))
            .expect("valid form should be accepted");
        assert_eq!(ctrl.submission(), &SubmissionState::Submitting);
        assert_eq!(ticket.message.name, "A");
        assert!(sink.taken().is_empty());

        let backend = SimulatedBackend::new(
            ctrl.config().submission_latency(),
            SimulatedOutcome::Succeed,
            no_sleep,
        );
        let result = block_on(backend.send(ticket.message.clone()));
        assert!(ctrl.complete_submission(&ticket, result));

        assert_eq!(ctrl.submission(), &SubmissionState::Succeeded);
        let snap = ctrl.snapshot();
        assert_eq!(snap.form, ContactForm::default());
        assert_eq!(snap.form.name, "");

        let notes = sink.taken();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Success);
        assert_eq!(notes[0].title, "Message Sent Successfully!");
        assert!(notes[0].is_from_submission());
    }

    #[test]
    fn test_network_failure_is_retryable() {
        let (mut ctrl, sink) = controller();
        let payload = form("A", "a@b.com", "Hi", "Hello");
        let ticket = ctrl.submit(payload.clone()).expect("accepted");
        let backend = SimulatedBackend::new(Duration::ZERO, SimulatedOutcome::Fail, no_sleep);
        let result = block_on(backend.send(ticket.message.clone()));
        assert!(ctrl.complete_submission(&ticket, result));

        let SubmissionState::Failed(failure) = ctrl.submission() else {
            panic!("expected failure");
        };
        assert!(failure.is_retryable());
        assert_eq!(ctrl.form(), &payload);
        assert_eq!(sink.taken().len(), 1);

        // retry straight from Failed
        let retry = ctrl.submit_current().expect("retry accepted");
        assert!(ctrl.complete_submission(&retry, Ok(Delivered)));
        assert_eq!(ctrl.submission(), &SubmissionState::Succeeded);
    }

    #[test]
    fn test_submit_while_submitting_rejected() {
        let (mut ctrl, sink) = controller();
        let ticket = ctrl.submit(form("A", "a@b.com", "Hi", "Hello")).expect("accepted");
        let again = ctrl.submit(form("B", "b@c.com", "Yo", "Again"));
        assert_eq!(again, Err(SubmitRejected::AlreadySubmitting));
        assert_eq!(ctrl.submission(), &SubmissionState::Submitting);
        assert_eq!(ctrl.form().name, "A");
        assert!(sink.taken().is_empty());

        assert!(ctrl.complete_submission(&ticket, Ok(Delivered)));
    }

    #[test]
    fn test_stale_completion_dropped() {
        let (mut ctrl, sink) = controller();
        let stale = ctrl.submit(form("A", "a@b.com", "Hi", "Hello")).expect("accepted");
        assert!(ctrl.cancel_submission());
        assert_eq!(ctrl.submission(), &SubmissionState::Idle);

        let fresh = ctrl.submit(form("A", "a@b.com", "Hi", "Hello")).expect("accepted");
        assert!(!ctrl.complete_submission(&stale, Ok(Delivered)));
        assert_eq!(ctrl.submission(), &SubmissionState::Submitting);
        assert!(sink.taken().is_empty());

        assert!(ctrl.complete_submission(&fresh, Ok(Delivered)));
        // a second completion for the same ticket is ignored too
        assert!(!ctrl.complete_submission(&fresh, Err(NetworkError::Simulated)));
        assert_eq!(ctrl.submission(), &SubmissionState::Succeeded);
        assert_eq!(sink.taken().len(), 1);
    }

    #[test]
    fn test_dismiss_and_edit_reset_to_idle() {
        let (mut ctrl, _) = controller();
        assert!(!ctrl.dismiss_submission());

        let _ = ctrl.submit(form("", "", "", ""));
        assert!(matches!(ctrl.submission(), SubmissionState::Failed(_)));
        ctrl.update_field(FormField::Name, "A".to_string());
        assert_eq!(ctrl.submission(), &SubmissionState::Idle);
        assert_eq!(ctrl.form().name, "A");

        let ticket = ctrl.submit(form("A", "a@b.com", "Hi", "Hello")).expect("accepted");
        assert!(!ctrl.dismiss_submission());
        ctrl.complete_submission(&ticket, Ok(Delivered));
        assert!(ctrl.dismiss_submission());
        assert_eq!(ctrl.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn test_project_dialog_resets_detail_tab() {
        let (mut ctrl, _) = controller();
        assert!(ctrl.open_project(1));
        assert!(ctrl.select_tab(PROJECT_TAB_GROUP, "challenges"));
        assert!(ctrl.close_project());
        assert!(!ctrl.close_project());

        assert!(ctrl.open_project(2));
        let snap = ctrl.snapshot();
        assert_eq!(snap.selected_project, Some(2));
        assert_eq!(snap.active_tab(PROJECT_TAB_GROUP), Some("overview"));

        assert!(!ctrl.open_project(99));
        assert_eq!(ctrl.snapshot().selected_project, Some(2));
    }

    #[test]
    fn test_resume_download_notifies() {
        let (mut ctrl, sink) = controller();
        ctrl.request_resume_download();
        let notes = sink.taken();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Info);
        assert_eq!(notes[0].title, "Resume download started!");
        assert_eq!(notes[0].source, NotificationSource::General);
    }

    #[test]
    fn test_closure_sink() {
        let seen = Arc::new(Mutex::new(0usize));
        let counter = seen.clone();
        let mut ctrl = ViewStateController::new(
            Arc::new(sample_content()),
            ControllerConfig::default(),
            move |_: Notification| *counter.lock().expect("lock") += 1,
        );
        ctrl.request_resume_download();
        assert_eq!(*seen.lock().expect("lock"), 1);
    }
}

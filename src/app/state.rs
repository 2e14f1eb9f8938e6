use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::{channel::oneshot, future::LocalBoxFuture, FutureExt};
use leptos::{prelude::*, task::spawn_local};

use crate::content::Content;
use crate::view_state::{
    ControllerConfig, FormField, Notification, SimulatedBackend, SubmissionBackend, ViewSnapshot,
    ViewStateController,
};

static TOAST_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Handles shared by every section of the page.
///
/// Components read `snapshot` and never touch the controller directly; every mutation goes
/// through [`PageState::dispatch`] so the snapshot is refreshed exactly once per intent.
#[derive(Clone, Copy)]
pub struct PageState {
    controller: StoredValue<Arc<Mutex<ViewStateController>>>,
    backend: StoredValue<Arc<dyn SubmissionBackend>>,
    pub content: StoredValue<Arc<Content>>,
    pub snapshot: RwSignal<ViewSnapshot>,
    pub toast: RwSignal<Option<Toast>>,
    /// Whether any animation still needs frames.
    pub animating: RwSignal<bool>,
    pub frame: Duration,
    last_tick: StoredValue<Option<DateTime<Utc>>>,
}

impl PageState {
    pub fn new(content: Arc<Content>, config: ControllerConfig) -> Self {
        let frame = config.tick();
        let toast = RwSignal::new(None::<Toast>);
        let sink = move |notification: Notification| {
            let id = TOAST_ID.fetch_add(1, Ordering::Relaxed);
            toast.set(Some(Toast { id, notification }));
        };
        let backend: Arc<dyn SubmissionBackend> = Arc::new(SimulatedBackend::new(
            config.submission_latency(),
            config.submission_outcome,
            browser_sleep,
        ));
        let controller = ViewStateController::new(content.clone(), config, sink);
        let snapshot = RwSignal::new(controller.snapshot());
        let animating = RwSignal::new(controller.is_animating());
        Self {
            controller: StoredValue::new(Arc::new(Mutex::new(controller))),
            backend: StoredValue::new(backend),
            content: StoredValue::new(content),
            snapshot,
            toast,
            animating,
            frame,
            last_tick: StoredValue::new(None),
        }
    }

    pub fn provide(self) -> Self {
        provide_context(self);
        self
    }

    pub fn content(&self) -> Arc<Content> {
        self.content.get_value()
    }

    /// Runs `f` against the controller and publishes a fresh snapshot.
    pub fn dispatch<R>(&self, f: impl FnOnce(&mut ViewStateController) -> R) -> R {
        let (res, snap, animating) = self.controller.with_value(|c| {
            let mut c = c.lock().unwrap_or_else(|e| e.into_inner());
            let res = f(&mut c);
            (res, c.snapshot(), c.is_animating())
        });
        self.snapshot.set(snap);
        self.set_animating(animating);
        res
    }

    /// Advances animations by the wall-clock time since the previous frame, publishing only
    /// when something moved. The first frame after a pause counts as one `frame`.
    pub fn tick(&self) {
        let now = Utc::now();
        let dt = self
            .last_tick
            .get_value()
            .and_then(|last| (now - last).to_std().ok())
            .unwrap_or(self.frame);
        self.last_tick.set_value(Some(now));

        let (snap, animating) = self.controller.with_value(|c| {
            let mut c = c.lock().unwrap_or_else(|e| e.into_inner());
            let snap = (c.is_animating() && c.advance(dt)).then(|| c.snapshot());
            (snap, c.is_animating())
        });
        if let Some(snap) = snap {
            self.snapshot.set(snap);
        }
        self.set_animating(animating);
    }

    fn set_animating(&self, animating: bool) {
        if !animating {
            self.last_tick.set_value(None);
        }
        if self.animating.get_untracked() != animating {
            self.animating.set(animating);
        }
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.dispatch(|c| c.update_field(field, value));
    }

    /// Submits the contact form and finishes the submission when the backend answers.
    pub fn submit(&self) {
        // rejections are already reflected in the snapshot and the toast
        let Ok(ticket) = self.dispatch(|c| c.submit_current()) else {
            return;
        };
        let backend = self.backend.get_value();
        let state = *self;
        spawn_local(async move {
            let result = backend.send(ticket.message.clone()).await;
            state.dispatch(|c| c.complete_submission(&ticket, result));
        });
    }

    /// Closes the toast if it is still showing. Closing a submission toast also
    /// acknowledges the finished submission.
    pub fn dismiss_toast(&self, id: u64) {
        let Some(toast) = self
            .toast
            .with_untracked(|t| t.as_ref().filter(|t| t.id == id).cloned())
        else {
            return;
        };
        self.toast.set(None);
        if toast.notification.is_from_submission() {
            self.dispatch(|c| c.dismiss_submission());
        }
    }
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

fn browser_sleep(duration: Duration) -> LocalBoxFuture<'static, ()> {
    let (tx, rx) = oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        duration,
    );
    async move {
        let _ = rx.await;
    }
    .boxed_local()
}

//! Lead capture form handler.
//!
//! Binds the three-field form to the host bridge:
//!
//! ```text
//! Idle ─submit─▶ Validating ─┬─ empty field ──▶ Rejected ─▶ Idle
//!                            ├─ send raised ──▶ Idle (retry)
//!                            └─ sent ─────────▶ Sent (control disabled)
//! ```
//!
//! `Sent` is terminal: further submits are ignored and the view is closed by
//! a deferred one-shot task.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::bridge::{BridgeError, HostBridge};
use crate::config::LeadConfig;
use crate::lead::{LeadField, LeadForm, LeadRecord, ValidationError};
use crate::view::{Clock, LeadFormView, Scheduler, SystemClock};

/// Alert shown when a required field is empty.
pub const VALIDATION_ALERT: &str = "Заполните все поля";

/// Alert shown when the host refused the payload.
pub const RETRY_ALERT: &str = "Не удалось отправить. Попробуйте ещё раз.";

/// Submit control label after a successful send.
pub const SENT_LABEL: &str = "Отправлено ✓";

/// Errors surfaced by [`LeadCaptureHandler::submit`]. None of them are fatal
/// to the page.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transmission error: {0}")]
    Transmission(#[from] BridgeError),

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Lead already sent")]
    AlreadySent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sent,
}

/// Result of a successful submit.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub record: LeadRecord,
    /// `false` when no host bridge was present and the send was skipped.
    pub delivered: bool,
}

/// Form submission handler. Owns explicit references to every page and host
/// resource it touches; nothing is looked up globally.
pub struct LeadCaptureHandler {
    config: LeadConfig,
    bridge: Option<Rc<dyn HostBridge>>,
    view: Rc<dyn LeadFormView>,
    scheduler: Rc<dyn Scheduler>,
    clock: Rc<dyn Clock>,
    state: Cell<SubmitState>,
}

impl LeadCaptureHandler {
    pub fn new(
        config: LeadConfig,
        bridge: Option<Rc<dyn HostBridge>>,
        view: Rc<dyn LeadFormView>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            config,
            bridge,
            view,
            scheduler,
            clock: Rc::new(SystemClock),
            state: Cell::new(SubmitState::Idle),
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &LeadConfig {
        &self.config
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Host setup on page load: expand, signal ready, hide the main button,
    /// and apply the theme background. Does nothing outside the host.
    pub fn initialize(&self) {
        let Some(bridge) = &self.bridge else {
            debug!("No host bridge; skipping host setup");
            return;
        };

        bridge.expand();
        bridge.ready();
        bridge.hide_main_button();

        let color = bridge
            .theme_bg_color()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.config.default_bg_color.clone());
        debug!("Applying background color {color}");
        self.view.set_background_color(&color);
    }

    /// Handle one form submission.
    ///
    /// The caller is responsible for suppressing the browser's default
    /// submit action before calling this.
    pub fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        if self.state.get() == SubmitState::Sent {
            debug!("Ignoring submit: lead already sent");
            return Err(SubmitError::AlreadySent);
        }

        let form = match self.read_form() {
            Ok(form) => form,
            Err(e) => {
                info!("Lead rejected: {e}");
                self.view.alert(VALIDATION_ALERT);
                return Err(e.into());
            }
        };

        let record = form.into_record(&self.config.brand, self.clock.now());

        let delivered = match self.transmit(&record) {
            Ok(delivered) => delivered,
            Err(e) => {
                error!("Failed to send lead: {e}");
                self.view.alert(RETRY_ALERT);
                return Err(e);
            }
        };

        self.acknowledge();
        Ok(SubmitOutcome { record, delivered })
    }

    fn read_form(&self) -> Result<LeadForm, ValidationError> {
        let [company, task, contact] = LeadField::ALL.map(|field| self.view.field_value(field));
        LeadForm::parse(&company, &task, &contact)
    }

    fn transmit(&self, record: &LeadRecord) -> Result<bool, SubmitError> {
        let payload = record.to_json()?;
        match &self.bridge {
            Some(bridge) => {
                bridge.send_data(&payload)?;
                info!("Lead sent for {}", record.company);
                Ok(true)
            }
            None => {
                warn!("No host bridge; lead not transmitted");
                Ok(false)
            }
        }
    }

    fn acknowledge(&self) {
        if let Some(bridge) = &self.bridge
            && !bridge.haptic_impact(self.config.haptic_style)
        {
            debug!("Host has no haptic feedback");
        }

        self.view.mark_sent(SENT_LABEL);
        self.state.set(SubmitState::Sent);

        if let Some(bridge) = &self.bridge {
            let bridge = Rc::clone(bridge);
            self.scheduler
                .schedule_once(self.config.close_delay(), Box::new(move || bridge.close()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Default)]
    struct StubView {
        values: RefCell<Vec<(LeadField, String)>>,
        alerts: RefCell<Vec<String>>,
        background: RefCell<Option<String>>,
        label: RefCell<Option<String>>,
    }

    impl StubView {
        fn with(company: &str, task: &str, contact: &str) -> Rc<Self> {
            let view = Self::default();
            *view.values.borrow_mut() = vec![
                (LeadField::Company, company.into()),
                (LeadField::Task, task.into()),
                (LeadField::Contact, contact.into()),
            ];
            Rc::new(view)
        }
    }

    impl LeadFormView for StubView {
        fn field_value(&self, field: LeadField) -> String {
            self.values
                .borrow()
                .iter()
                .find(|(f, _)| *f == field)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        }

        fn set_background_color(&self, color: &str) {
            *self.background.borrow_mut() = Some(color.to_string());
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn mark_sent(&self, label: &str) {
            *self.label.borrow_mut() = Some(label.to_string());
        }
    }

    #[derive(Default)]
    struct CountingScheduler {
        delays: RefCell<Vec<Duration>>,
    }

    impl Scheduler for CountingScheduler {
        fn schedule_once(&self, delay: Duration, _task: Box<dyn FnOnce()>) {
            self.delays.borrow_mut().push(delay);
        }
    }

    #[test]
    fn initialize_without_bridge_leaves_page_alone() {
        let view = StubView::with("", "", "");
        let handler = LeadCaptureHandler::new(
            LeadConfig::default(),
            None,
            view.clone(),
            Rc::new(CountingScheduler::default()),
        );
        handler.initialize();
        assert!(view.background.borrow().is_none());
    }

    #[test]
    fn submit_without_bridge_marks_sent_but_not_delivered() {
        let view = StubView::with("Acme", "Build app", "+1234");
        let scheduler = Rc::new(CountingScheduler::default());
        let handler =
            LeadCaptureHandler::new(LeadConfig::default(), None, view.clone(), scheduler.clone());

        let outcome = handler.submit().unwrap();
        assert!(!outcome.delivered);
        assert_eq!(handler.state(), SubmitState::Sent);
        assert_eq!(view.label.borrow().as_deref(), Some(SENT_LABEL));
        assert!(scheduler.delays.borrow().is_empty());
    }

    #[test]
    fn validation_failure_alerts_and_stays_idle() {
        let view = StubView::with("", "x", "y");
        let handler = LeadCaptureHandler::new(
            LeadConfig::default(),
            None,
            view.clone(),
            Rc::new(CountingScheduler::default()),
        );

        let err = handler.submit().unwrap_err();
        assert!(matches!(err, SubmitError::Validation(_)));
        assert_eq!(*view.alerts.borrow(), vec![VALIDATION_ALERT.to_string()]);
        assert_eq!(handler.state(), SubmitState::Idle);
        assert!(view.label.borrow().is_none());
    }

    #[test]
    fn second_submit_is_ignored() {
        let view = StubView::with("Acme", "Build app", "+1234");
        let handler = LeadCaptureHandler::new(
            LeadConfig::default(),
            None,
            view.clone(),
            Rc::new(CountingScheduler::default()),
        );

        handler.submit().unwrap();
        let err = handler.submit().unwrap_err();
        assert!(matches!(err, SubmitError::AlreadySent));
        assert!(view.alerts.borrow().is_empty());
    }
}

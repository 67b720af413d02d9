//! Page-side ports: the form view, the one-shot scheduler, and the clock.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::lead::LeadField;

/// The page elements the handler touches, passed in at construction.
pub trait LeadFormView {
    /// Current raw (untrimmed) value of a field.
    fn field_value(&self, field: LeadField) -> String;

    /// Paint the page background.
    fn set_background_color(&self, color: &str);

    /// Show a blocking alert to the user.
    fn alert(&self, message: &str);

    /// Relabel the submit control and disable it.
    fn mark_sent(&self, label: &str);
}

/// Deferred one-shot tasks on the page's event loop. Scheduled tasks cannot
/// be cancelled.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Source of submission timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

//! Terminal stand-ins for the Telegram host and the form page.

use std::cell::RefCell;
use std::io::Write;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use vimly_core::{BridgeError, HostBridge, ImpactStyle, LeadField, LeadFormView, Scheduler};

/// Host bridge that "transmits" by writing the payload to stdout.
pub struct StdoutBridge;

impl HostBridge for StdoutBridge {
    fn expand(&self) {
        debug!("host: expand");
    }

    fn ready(&self) {
        debug!("host: ready");
    }

    fn hide_main_button(&self) {
        debug!("host: hide main button");
    }

    fn theme_bg_color(&self) -> Option<String> {
        None
    }

    fn send_data(&self, data: &str) -> Result<(), BridgeError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{data}")
            .and_then(|_| stdout.flush())
            .map_err(|e| BridgeError(e.to_string()))
    }

    fn haptic_impact(&self, _style: ImpactStyle) -> bool {
        false
    }

    fn close(&self) {
        info!("host: close requested");
    }
}

/// Form filled from command-line arguments. Alerts go to the log.
pub struct ArgsForm {
    company: String,
    task: String,
    contact: String,
}

impl ArgsForm {
    pub fn new(company: String, task: String, contact: String) -> Self {
        Self {
            company,
            task,
            contact,
        }
    }
}

impl LeadFormView for ArgsForm {
    fn field_value(&self, field: LeadField) -> String {
        match field {
            LeadField::Company => self.company.clone(),
            LeadField::Task => self.task.clone(),
            LeadField::Contact => self.contact.clone(),
        }
    }

    fn set_background_color(&self, color: &str) {
        debug!("page: background {color}");
    }

    fn alert(&self, message: &str) {
        warn!("{message}");
    }

    fn mark_sent(&self, label: &str) {
        info!("{label}");
    }
}

/// Collects one-shot tasks and runs them, in delay order, when the command
/// is about to exit.
#[derive(Default)]
pub struct SleepScheduler {
    pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl SleepScheduler {
    pub fn run_pending(&self) {
        let mut tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        tasks.sort_by_key(|(delay, _)| *delay);

        let started = Instant::now();
        for (delay, task) in tasks {
            if let Some(remaining) = delay.checked_sub(started.elapsed()) {
                std::thread::sleep(remaining);
            }
            task();
        }
    }
}

impl Scheduler for SleepScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay, task));
    }
}

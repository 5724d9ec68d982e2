//! Scheduled punch reminders.

use chrono::{DateTime, TimeZone};
use tracing::{debug, warn};

use crate::core::punch::records_on;
use crate::errors::AppResult;
use crate::models::punch::PunchRecord;
use crate::models::punch_kind::PunchKind;
use crate::models::settings::UserSettings;
use crate::ui::messages;
use crate::utils::time::parse_time;

/// Notification surface the reminders are delivered through.
pub trait Notifier {
    fn is_enabled(&self) -> bool;
    fn fire(&self, title: &str, body: &str) -> AppResult<()>;
}

/// Prints reminders to the terminal, with a bell.
pub struct TerminalNotifier {
    enabled: bool,
}

impl TerminalNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for TerminalNotifier {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn fire(&self, title: &str, body: &str) -> AppResult<()> {
        messages::notify(title, body);
        Ok(())
    }
}

/// Kinds whose reminder time has passed today without a matching punch.
pub fn due_reminders<Tz: TimeZone>(
    settings: &UserSettings,
    records: &[PunchRecord],
    now: &DateTime<Tz>,
) -> Vec<PunchKind> {
    let today = records_on(records, now.date_naive(), &now.timezone());
    let clock = now.time();

    PunchKind::ALL
        .into_iter()
        .filter(|kind| {
            let Some(raw) = settings.reminders.get(*kind) else {
                return false;
            };
            let Some(at) = parse_time(raw) else {
                warn!(kind = kind.as_str(), value = raw, "ignoring malformed reminder time");
                return false;
            };
            at <= clock && !today.iter().any(|r| r.kind == *kind)
        })
        .collect()
}

pub struct ReminderLogic;

impl ReminderLogic {
    /// Fires one notification per due reminder. Returns how many were fired.
    pub fn run<N: Notifier, Tz: TimeZone>(
        notifier: &N,
        settings: &UserSettings,
        records: &[PunchRecord],
        now: &DateTime<Tz>,
    ) -> AppResult<usize> {
        if !notifier.is_enabled() {
            debug!("notifications disabled, skipping reminders");
            return Ok(0);
        }

        let due = due_reminders(settings, records, now);
        for kind in &due {
            let at = settings.reminders.get(*kind).unwrap_or_default();
            notifier.fire(
                "Punch reminder",
                &format!("{} was scheduled for {at} and has not been recorded yet.", kind.label()),
            )?;
        }

        Ok(due.len())
    }
}

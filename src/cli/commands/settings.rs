use crate::core::profile::ProfileLogic;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::db::profile_store::ProfileStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::{info, success};
use crate::utils::formatting::parse_workload;
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::Settings {
        print,
        workload,
        employee_name,
        employer,
        role,
        registration,
        remind_entry,
        remind_break_start,
        remind_break_end,
        remind_exit,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;
        let mut settings = store.settings(&profile.id)?;
        let mut changed = false;

        if let Some(w) = workload {
            settings.daily_workload_minutes =
                parse_workload(w).ok_or_else(|| AppError::InvalidWorkload(w.clone()))?;
            changed = true;
        }

        for (slot, value) in [
            (&mut settings.employee_name, employee_name),
            (&mut settings.employer, employer),
            (&mut settings.role, role),
            (&mut settings.registration, registration),
        ] {
            if let Some(v) = value {
                *slot = v.trim().to_string();
                changed = true;
            }
        }

        for (kind, value) in [
            (PunchKind::Entry, remind_entry),
            (PunchKind::BreakStart, remind_break_start),
            (PunchKind::BreakEnd, remind_break_end),
            (PunchKind::Exit, remind_exit),
        ] {
            if let Some(v) = value {
                settings.reminders.set(kind, reminder_value(v)?);
                changed = true;
            }
        }

        if changed {
            store.save_settings(&profile.id, &settings)?;
            ttlog_quiet(&pool.conn, "settings", &profile.id, "Settings updated");
            success(format!("Settings of '{}' updated.", profile.name));
        }

        if *print || !changed {
            info(format!("Settings of profile '{}':", profile.name));
            print!("{}", serde_yaml::to_string(&settings).map_err(|e| AppError::Config(e.to_string()))?);
        }
    }

    Ok(())
}

/// `off` clears the reminder, anything else must be a valid `HH:MM`.
fn reminder_value(raw: &str) -> AppResult<Option<String>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("off") {
        return Ok(None);
    }

    let t = parse_time(raw).ok_or_else(|| AppError::InvalidTime(raw.to_string()))?;
    Ok(Some(t.format("%H:%M").to_string()))
}

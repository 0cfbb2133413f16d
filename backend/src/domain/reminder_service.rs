use chrono::{Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone};
use log::{info, warn};
use shared::{NewReminder, Reminder};
use thiserror::Error;

use super::commands::reminder::{RescheduleReminderCommand, ScheduleReminderCommand};
use super::ordering::{local_to_utc, sort_soonest_first};
use super::repository::Repository;
use crate::storage::{StorageError, StorageResult};

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("invalid reminder date/time: '{date}' '{time}'")]
    InvalidSchedule { date: String, time: String },

    #[error("reminder note is empty")]
    MissingNote,

    #[error("reminder not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service for timed patient reminders
pub struct ReminderService {
    repository: Repository<Reminder>,
}

impl ReminderService {
    pub fn new(repository: Repository<Reminder>) -> Self {
        Self { repository }
    }

    pub fn add_reminder(&mut self, data: NewReminder) -> StorageResult<Reminder> {
        info!(
            "Adding reminder: patient_id={}, date_time={}",
            data.patient_id, data.date_time
        );
        self.repository.add(data)
    }

    /// Replace a reminder by id. Unknown ids are ignored and return false.
    pub fn update_reminder(&mut self, reminder: Reminder) -> StorageResult<bool> {
        info!("Updating reminder: {}", reminder.id);
        self.repository.update(reminder)
    }

    /// All reminders, soonest first. The stored order is left untouched.
    pub fn get_reminders(&self) -> Vec<Reminder> {
        sort_soonest_first(self.repository.all().to_vec())
    }

    /// Reminders in the order they were stored
    pub fn list_reminders(&self) -> &[Reminder] {
        self.repository.all()
    }

    pub fn get_reminder_by_id(&self, id: &str) -> Option<&Reminder> {
        self.repository.get_by_id(id)
    }

    /// Create a reminder from separate local date and time fields. The note is required.
    pub fn schedule_reminder(
        &mut self,
        command: ScheduleReminderCommand,
    ) -> Result<Reminder, ReminderError> {
        let date_time = combine_date_and_time(&command.date, &command.time)?;
        if command.note.trim().is_empty() {
            warn!("Rejecting reminder for patient {} without a note", command.patient_id);
            return Err(ReminderError::MissingNote);
        }
        let reminder = self.add_reminder(NewReminder {
            patient_id: command.patient_id,
            date_time,
            note: command.note,
        })?;
        Ok(reminder)
    }

    /// Move an existing reminder to a new date and time and replace its note.
    /// An empty note is accepted here.
    pub fn reschedule_reminder(
        &mut self,
        command: RescheduleReminderCommand,
    ) -> Result<Reminder, ReminderError> {
        let date_time = combine_date_and_time(&command.date, &command.time)?;

        let mut reminder = self
            .repository
            .get_by_id(&command.reminder_id)
            .cloned()
            .ok_or_else(|| ReminderError::NotFound(command.reminder_id.clone()))?;

        reminder.date_time = date_time;
        reminder.note = command.note;
        self.repository.update(reminder.clone())?;

        Ok(reminder)
    }

    pub fn flush(&self) -> StorageResult<()> {
        self.repository.flush()
    }
}

/// Local "2025-10-25" + "09:00" -> UTC "2025-10-25T12:00:00.000Z" (in UTC-3)
pub fn combine_date_and_time(date: &str, time: &str) -> Result<String, ReminderError> {
    combine_date_and_time_in(date, time, &Local)
}

/// Combine a wall-clock date and time in `zone` into a UTC RFC 3339 timestamp
pub fn combine_date_and_time_in<Tz: TimeZone>(
    date: &str,
    time: &str,
    zone: &Tz,
) -> Result<String, ReminderError> {
    let invalid = || {
        warn!("Rejecting reminder schedule '{}' '{}'", date, time);
        ReminderError::InvalidSchedule {
            date: date.to_string(),
            time: time.to_string(),
        }
    };

    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    let at = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| invalid())?;
    let instant = local_to_utc(&day.and_time(at), zone).ok_or_else(invalid)?;

    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

//! # MedNote Backend
//!
//! The patient record store behind the MedNote clinical notebook: patients,
//! consultations, exams and reminders, held in memory and mirrored to durable
//! per-key JSON slots.
//!
//! The backend is built in layers:
//! ```text
//! Backend (facade handed to every screen)
//!     ↓
//! Domain (services, repositories, derived views)
//!     ↓
//! Storage (slot adapter over a key-value store)
//! ```
//!
//! A [`Backend`] is created once at startup with [`Backend::init`] and passed
//! by reference to whatever needs it. Every mutation updates memory and then
//! rewrites the affected collection; [`Backend::flush`] rewrites them all.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::{Context, Result};
use log::{info, warn};
use shared::{
    Consultation, Exam, NewConsultation, NewExam, NewPatient, NewReminder, Patient, Reminder,
    ReminderEntry, User,
};
use std::sync::Arc;

pub use config::{BackendConfig, StorageKeys};
pub use domain::*;
pub use storage::*;

use domain::intake::PatientIntakeForm;
use domain::reminder::{RescheduleReminderCommand, ScheduleReminderCommand};
use domain::seed::seed_user;

/// Owns every repository and exposes the operations the screens use
pub struct Backend {
    user: User,
    keys: StorageKeys,
    patient_service: PatientService,
    consultation_service: ConsultationService,
    exam_service: ExamService,
    reminder_service: ReminderService,
    intake_service: IntakeService,
    session_service: SessionService,
}

impl Backend {
    /// Open the data directory named in `config` and load every collection
    pub fn init(config: &BackendConfig) -> Result<Self> {
        info!("Setting up storage in {}", config.data_directory.display());
        let connection = JsonConnection::new(&config.data_directory).with_context(|| {
            format!(
                "Failed to open data directory {}",
                config.data_directory.display()
            )
        })?;

        Ok(Self::with_store(
            Arc::new(connection),
            Arc::new(UuidGenerator),
            config,
        ))
    }

    /// Build a backend over an explicit store and id source. Keys never
    /// written start from the bundled data when `seed_on_first_run` is set.
    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        ids: Arc<dyn IdGenerator>,
        config: &BackendConfig,
    ) -> Self {
        let slots = SlotStore::new(store);
        let keys = config.keys();
        let seed = SeedData::first_run(config.seed_on_first_run);

        info!("Loading collections");
        let patients = Repository::load(slots.clone(), &keys.patients, seed.patients, ids.clone());
        let consultations = Repository::load(
            slots.clone(),
            &keys.consultations,
            seed.consultations,
            ids.clone(),
        );
        let exams = Repository::load(slots.clone(), &keys.exams, seed.exams, ids.clone());
        let reminders = Repository::load(slots.clone(), &keys.reminders, seed.reminders, ids);

        Self {
            user: seed_user(),
            patient_service: PatientService::new(patients),
            consultation_service: ConsultationService::new(consultations),
            exam_service: ExamService::new(exams),
            reminder_service: ReminderService::new(reminders),
            intake_service: IntakeService::new(config.intake_mode.clone()),
            session_service: SessionService::load(slots, &keys.session),
            keys,
        }
    }

    /// A backend that keeps nothing beyond the process, seeded with the demo data
    pub fn in_memory() -> Self {
        Self::with_store(
            Arc::new(MemoryStore::new()),
            Arc::new(UuidGenerator),
            &BackendConfig::default(),
        )
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    // Collections

    pub fn patients(&self) -> &[Patient] {
        self.patient_service.list_patients()
    }

    pub fn consultations(&self) -> &[Consultation] {
        self.consultation_service.list_consultations()
    }

    pub fn exams(&self) -> &[Exam] {
        self.exam_service.list_exams()
    }

    /// Reminders in stored order; see [`Backend::get_reminders`] for the sorted view
    pub fn reminders(&self) -> &[Reminder] {
        self.reminder_service.list_reminders()
    }

    // Queries

    pub fn get_patient_by_id(&self, id: &str) -> Option<&Patient> {
        self.patient_service.get_patient_by_id(id)
    }

    pub fn search_patients(&self, term: &str) -> Vec<Patient> {
        self.patient_service.search_patients(term)
    }

    pub fn get_consultations_by_patient_id(&self, patient_id: &str) -> Vec<Consultation> {
        self.consultation_service.get_consultations_by_patient_id(patient_id)
    }

    pub fn get_consultation_by_ids(
        &self,
        patient_id: &str,
        consultation_id: &str,
    ) -> Option<&Consultation> {
        self.consultation_service
            .get_consultation_by_ids(patient_id, consultation_id)
    }

    pub fn get_exams_by_patient_id(&self, patient_id: &str) -> Vec<Exam> {
        self.exam_service.get_exams_by_patient_id(patient_id)
    }

    pub fn get_reminders(&self) -> Vec<Reminder> {
        self.reminder_service.get_reminders()
    }

    /// Reminders soonest first, each with its patient's name when the patient exists
    pub fn reminder_agenda(&self) -> Vec<ReminderEntry> {
        self.get_reminders()
            .into_iter()
            .map(|reminder| {
                let patient_name = self
                    .patient_service
                    .get_patient_by_id(&reminder.patient_id)
                    .map(|p| p.name.clone());
                ReminderEntry {
                    reminder,
                    patient_name,
                }
            })
            .collect()
    }

    // Mutations

    pub fn add_patient(&mut self, data: NewPatient) -> StorageResult<Patient> {
        self.patient_service.add_patient(data)
    }

    pub fn update_patient(&mut self, patient: Patient) -> StorageResult<bool> {
        self.patient_service.update_patient(patient)
    }

    pub fn add_consultation(&mut self, data: NewConsultation) -> StorageResult<Consultation> {
        if self.get_patient_by_id(&data.patient_id).is_none() {
            warn!(
                "Consultation references unknown patient {}; storing anyway",
                data.patient_id
            );
        }
        self.consultation_service.add_consultation(data)
    }

    pub fn add_exam(&mut self, data: NewExam) -> StorageResult<Exam> {
        self.exam_service.add_exam(data)
    }

    pub fn add_reminder(&mut self, data: NewReminder) -> StorageResult<Reminder> {
        self.reminder_service.add_reminder(data)
    }

    pub fn update_reminder(&mut self, reminder: Reminder) -> StorageResult<bool> {
        self.reminder_service.update_reminder(reminder)
    }

    pub fn schedule_reminder(
        &mut self,
        command: ScheduleReminderCommand,
    ) -> Result<Reminder, ReminderError> {
        self.reminder_service.schedule_reminder(command)
    }

    pub fn reschedule_reminder(
        &mut self,
        command: RescheduleReminderCommand,
    ) -> Result<Reminder, ReminderError> {
        self.reminder_service.reschedule_reminder(command)
    }

    // Patient forms

    pub fn intake(&self) -> &IntakeService {
        &self.intake_service
    }

    /// Validate a registration form and add the patient
    pub fn register_patient(&mut self, form: PatientIntakeForm) -> Result<Patient> {
        let data = self
            .intake_service
            .build_new_patient(form)
            .context("Invalid patient registration form")?;
        Ok(self.add_patient(data)?)
    }

    /// Apply an edit form to patient `id`. `Ok(None)` if there is no such patient.
    pub fn edit_patient(&mut self, id: &str, form: PatientIntakeForm) -> Result<Option<Patient>> {
        let Some(existing) = self.get_patient_by_id(id) else {
            return Ok(None);
        };

        let updated = self
            .intake_service
            .build_updated_patient(existing, form)
            .context("Invalid patient edit form")?;
        self.update_patient(updated.clone())?;
        Ok(Some(updated))
    }

    // Session

    pub fn is_authenticated(&self) -> bool {
        self.session_service.is_authenticated()
    }

    pub fn login(&mut self) -> StorageResult<()> {
        self.session_service.login()
    }

    pub fn logout(&mut self) -> StorageResult<()> {
        self.session_service.logout()
    }

    /// Rewrite every collection to storage
    pub fn flush(&self) -> StorageResult<()> {
        self.patient_service.flush()?;
        self.consultation_service.flush()?;
        self.exam_service.flush()?;
        self.reminder_service.flush()?;
        info!("Flushed all collections");
        Ok(())
    }
}

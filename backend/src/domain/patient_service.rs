use log::{debug, info, warn};
use shared::{NewPatient, Patient};

use super::repository::Repository;
use crate::storage::StorageResult;

/// Service for the patient roster
pub struct PatientService {
    repository: Repository<Patient>,
}

impl PatientService {
    pub fn new(repository: Repository<Patient>) -> Self {
        Self { repository }
    }

    /// Register a new patient; the id is assigned here
    pub fn add_patient(&mut self, data: NewPatient) -> StorageResult<Patient> {
        info!("Adding patient: name={}", data.name);
        self.repository.add(data)
    }

    /// Replace a patient record by id. Unknown ids are ignored and return false.
    pub fn update_patient(&mut self, patient: Patient) -> StorageResult<bool> {
        info!("Updating patient: {}", patient.id);
        self.repository.update(patient)
    }

    pub fn get_patient_by_id(&self, id: &str) -> Option<&Patient> {
        let patient = self.repository.get_by_id(id);
        if patient.is_none() {
            warn!("Patient not found: {}", id);
        }
        patient
    }

    /// All patients in registration order
    pub fn list_patients(&self) -> &[Patient] {
        self.repository.all()
    }

    /// Patients whose name contains `term`, ignoring case. An empty term matches everyone.
    pub fn search_patients(&self, term: &str) -> Vec<Patient> {
        let needle = term.trim().to_lowercase();
        let found = self
            .repository
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle));
        debug!("Patient search '{}' matched {}", term, found.len());
        found
    }

    pub fn flush(&self) -> StorageResult<()> {
        self.repository.flush()
    }
}

use log::{debug, info};
use shared::{Consultation, NewConsultation};

use super::ordering::sort_most_recent_first;
use super::repository::Repository;
use crate::storage::StorageResult;

/// Service for clinical notes
pub struct ConsultationService {
    repository: Repository<Consultation>,
}

impl ConsultationService {
    pub fn new(repository: Repository<Consultation>) -> Self {
        Self { repository }
    }

    /// Record a consultation. The patient id is not checked against the roster.
    pub fn add_consultation(&mut self, data: NewConsultation) -> StorageResult<Consultation> {
        info!(
            "Adding consultation: patient_id={}, date_time={}",
            data.patient_id, data.date_time
        );
        self.repository.add(data)
    }

    /// A patient's consultations, most recent first
    pub fn get_consultations_by_patient_id(&self, patient_id: &str) -> Vec<Consultation> {
        debug!("Listing consultations for patient {}", patient_id);
        sort_most_recent_first(self.repository.for_patient(patient_id))
    }

    /// The consultation with `consultation_id`, only if it belongs to `patient_id`
    pub fn get_consultation_by_ids(
        &self,
        patient_id: &str,
        consultation_id: &str,
    ) -> Option<&Consultation> {
        self.repository
            .find(|c| c.patient_id == patient_id && c.id == consultation_id)
    }

    pub fn list_consultations(&self) -> &[Consultation] {
        self.repository.all()
    }

    pub fn flush(&self) -> StorageResult<()> {
        self.repository.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id_generator::UuidGenerator;
    use crate::domain::seed::seed_consultations;
    use crate::storage::test_utils::memory_slots;
    use std::sync::Arc;

    fn service(seed: Vec<Consultation>) -> ConsultationService {
        let repository = Repository::load(
            memory_slots(),
            "mednote_consultations",
            seed,
            Arc::new(UuidGenerator),
        );
        ConsultationService::new(repository)
    }

    fn new_consultation(patient_id: &str, date_time: &str) -> NewConsultation {
        NewConsultation {
            patient_id: patient_id.to_string(),
            location: "Clínica".to_string(),
            date_time: date_time.to_string(),
            subjective: "Dor de cabeça".to_string(),
            objective: "PA 120/80".to_string(),
            assessment: "Cefaleia tensional".to_string(),
            plan: "Analgésico".to_string(),
            observations: None,
            exam_requests: Some("Hemograma".to_string()),
            exam_results: None,
        }
    }

    #[test]
    fn test_consultations_most_recent_first() {
        let mut service = service(Vec::new());
        service.add_consultation(new_consultation("7", "2024-01-01")).unwrap();
        service.add_consultation(new_consultation("7", "2025-06-01")).unwrap();
        service.add_consultation(new_consultation("8", "2026-01-01")).unwrap();
        service.add_consultation(new_consultation("7", "2023-03-01")).unwrap();

        let dates: Vec<String> = service
            .get_consultations_by_patient_id("7")
            .into_iter()
            .map(|c| c.date_time)
            .collect();
        assert_eq!(dates, vec!["2025-06-01", "2024-01-01", "2023-03-01"]);
    }

    #[test]
    fn test_listing_does_not_reorder_storage() {
        let service = service(seed_consultations());
        let before = service.list_consultations().to_vec();

        let _ = service.get_consultations_by_patient_id("1");
        assert_eq!(service.list_consultations(), before.as_slice());
    }

    #[test]
    fn test_get_consultation_by_ids_requires_both_to_match() {
        let service = service(seed_consultations());

        assert_eq!(service.get_consultation_by_ids("1", "c2").unwrap().location, "PSF");
        assert!(service.get_consultation_by_ids("2", "c2").is_none());
        assert!(service.get_consultation_by_ids("1", "c9").is_none());
    }

    #[test]
    fn test_unknown_patient_is_accepted() {
        let mut service = service(Vec::new());
        let added = service
            .add_consultation(new_consultation("no-such-patient", "2025-01-01T10:00:00"))
            .unwrap();

        assert_eq!(
            service.get_consultation_by_ids("no-such-patient", &added.id),
            Some(&added)
        );
    }
}

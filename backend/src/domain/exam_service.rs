use log::info;
use shared::{Exam, NewExam};

use super::repository::Repository;
use crate::storage::StorageResult;

/// Service for lab and imaging exam records
pub struct ExamService {
    repository: Repository<Exam>,
}

impl ExamService {
    pub fn new(repository: Repository<Exam>) -> Self {
        Self { repository }
    }

    pub fn add_exam(&mut self, data: NewExam) -> StorageResult<Exam> {
        info!("Adding exam: patient_id={}, type={}", data.patient_id, data.exam_type);
        self.repository.add(data)
    }

    /// A patient's exams in the order they were recorded
    pub fn get_exams_by_patient_id(&self, patient_id: &str) -> Vec<Exam> {
        self.repository.for_patient(patient_id)
    }

    pub fn list_exams(&self) -> &[Exam] {
        self.repository.all()
    }

    pub fn flush(&self) -> StorageResult<()> {
        self.repository.flush()
    }
}

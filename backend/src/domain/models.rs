//! Record traits implemented for the `shared` entity types.
//!
//! The generic [`Repository`](super::repository::Repository) only needs to know
//! how to read an id; the query helpers additionally read the owning patient
//! and the timestamp.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Consultation, Exam, NewConsultation, NewExam, NewPatient, NewReminder, Patient, Reminder,
};

/// A persisted entity with an immutable string id
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Human-readable entity kind used in log lines
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// A record owned by a patient through its `patientId` foreign key
pub trait PatientScoped: Record {
    fn patient_id(&self) -> &str;
}

/// A record carrying an ISO-8601 `dateTime`
pub trait Scheduled {
    fn date_time(&self) -> &str;
}

/// Creation payload for a record: everything except the id
pub trait NewRecord {
    type Output: Record;

    fn into_record(self, id: String) -> Self::Output;
}

impl Record for Patient {
    const KIND: &'static str = "patient";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Consultation {
    const KIND: &'static str = "consultation";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Exam {
    const KIND: &'static str = "exam";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Reminder {
    const KIND: &'static str = "reminder";

    fn id(&self) -> &str {
        &self.id
    }
}

impl PatientScoped for Consultation {
    fn patient_id(&self) -> &str {
        &self.patient_id
    }
}

impl PatientScoped for Exam {
    fn patient_id(&self) -> &str {
        &self.patient_id
    }
}

impl PatientScoped for Reminder {
    fn patient_id(&self) -> &str {
        &self.patient_id
    }
}

impl Scheduled for Consultation {
    fn date_time(&self) -> &str {
        &self.date_time
    }
}

impl Scheduled for Exam {
    fn date_time(&self) -> &str {
        &self.date_time
    }
}

impl Scheduled for Reminder {
    fn date_time(&self) -> &str {
        &self.date_time
    }
}

impl NewRecord for NewPatient {
    type Output = Patient;

    fn into_record(self, id: String) -> Patient {
        Patient {
            id,
            name: self.name,
            dob: self.dob,
            phone: self.phone,
            email: self.email,
            chronic_diseases: self.chronic_diseases,
            continuous_medication: self.continuous_medication,
        }
    }
}

impl NewRecord for NewConsultation {
    type Output = Consultation;

    fn into_record(self, id: String) -> Consultation {
        Consultation {
            id,
            patient_id: self.patient_id,
            location: self.location,
            date_time: self.date_time,
            subjective: self.subjective,
            objective: self.objective,
            assessment: self.assessment,
            plan: self.plan,
            observations: self.observations,
            exam_requests: self.exam_requests,
            exam_results: self.exam_results,
        }
    }
}

impl NewRecord for NewExam {
    type Output = Exam;

    fn into_record(self, id: String) -> Exam {
        Exam {
            id,
            patient_id: self.patient_id,
            exam_type: self.exam_type,
            description: self.description,
            date_time: self.date_time,
            result: self.result,
            observations: self.observations,
        }
    }
}

impl NewRecord for NewReminder {
    type Output = Reminder;

    fn into_record(self, id: String) -> Reminder {
        Reminder {
            id,
            patient_id: self.patient_id,
            date_time: self.date_time,
            note: self.note,
        }
    }
}

use serde::{Deserialize, Serialize};

/// The clinician using the app. Loaded once from the bundled profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Short initials shown in the avatar (e.g. "AC")
    pub initials: String,
}

/// A patient on the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub chronic_diseases: Vec<String>,
    #[serde(default)]
    pub continuous_medication: Vec<String>,
}

/// Payload for creating a patient; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub chronic_diseases: Vec<String>,
    #[serde(default)]
    pub continuous_medication: Vec<String>,
}

/// A clinical note in SOAP format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: String,
    /// ID of the patient this consultation belongs to
    pub patient_id: String,
    pub location: String,
    /// ISO-8601 timestamp of the consultation
    pub date_time: String,
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_results: Option<String>,
}

/// Payload for creating a consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConsultation {
    pub patient_id: String,
    pub location: String,
    pub date_time: String,
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_results: Option<String>,
}

/// A lab or imaging exam record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub patient_id: String,
    /// Kind of exam (e.g. "Hemograma"), stored as `type`
    #[serde(rename = "type")]
    pub exam_type: String,
    pub description: String,
    pub date_time: String,
    pub result: String,
    pub observations: String,
}

/// Payload for creating an exam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExam {
    pub patient_id: String,
    #[serde(rename = "type")]
    pub exam_type: String,
    pub description: String,
    pub date_time: String,
    pub result: String,
    pub observations: String,
}

/// A timed note attached to a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub patient_id: String,
    pub date_time: String,
    pub note: String,
}

/// Payload for creating a reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub patient_id: String,
    pub date_time: String,
    pub note: String,
}

/// A reminder joined with the name of its patient for the agenda view.
/// `patient_name` is `None` when the referenced patient does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderEntry {
    pub reminder: Reminder,
    pub patient_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_uses_camel_case_keys() {
        let patient = Patient {
            id: "1".to_string(),
            name: "Maria".to_string(),
            dob: "1960-02-15".to_string(),
            phone: "(21) 99999-8888".to_string(),
            email: "maria@email.com".to_string(),
            chronic_diseases: vec!["Diabetes".to_string()],
            continuous_medication: vec!["Metformina".to_string()],
        };

        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["chronicDiseases"][0], "Diabetes");
        assert_eq!(json["continuousMedication"][0], "Metformina");
    }

    #[test]
    fn test_consultation_optional_fields_default_to_none() {
        let json = r#"{
            "id": "c1", "patientId": "1", "location": "PSF",
            "dateTime": "2025-10-15T15:30:00",
            "subjective": "s", "objective": "o", "assessment": "a", "plan": "p"
        }"#;

        let consultation: Consultation = serde_json::from_str(json).unwrap();
        assert_eq!(consultation.patient_id, "1");
        assert!(consultation.observations.is_none());
        assert!(consultation.exam_requests.is_none());
        assert!(consultation.exam_results.is_none());
    }

    #[test]
    fn test_exam_kind_is_stored_as_type() {
        let exam = Exam {
            id: "e1".to_string(),
            patient_id: "1".to_string(),
            exam_type: "Hemograma".to_string(),
            description: "Completo".to_string(),
            date_time: "2025-01-10T08:00:00Z".to_string(),
            result: "Normal".to_string(),
            observations: String::new(),
        };

        let json = serde_json::to_value(&exam).unwrap();
        assert_eq!(json["type"], "Hemograma");
        assert!(json.get("examType").is_none());
    }
}

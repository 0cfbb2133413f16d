//! Patient intake: turning the registration/edit form into a patient record.
//!
//! Exactly one input style is active, chosen in configuration:
//! - `free_text`: diseases and medications are typed, one per line or comma separated
//! - `checklist`: they are ticked from fixed option lists

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use shared::{NewPatient, Patient};
use thiserror::Error;

use super::commands::intake::{ListInput, PatientIntakeForm};

const CHRONIC_DISEASES: &str = "chronic_diseases";
const CONTINUOUS_MEDICATION: &str = "continuous_medication";
const NO_OPTIONS: &[String] = &[];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntakeMode {
    #[default]
    FreeText,
    Checklist {
        chronic_disease_options: Vec<String>,
        medication_options: Vec<String>,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("field {field} was not filled in the configured {expected} style")]
    ModeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("'{option}' is not an available option for {field}")]
    UnknownOption { field: &'static str, option: String },
}

#[derive(Debug, Clone, Default)]
pub struct IntakeService {
    mode: IntakeMode,
}

impl IntakeService {
    pub fn new(mode: IntakeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &IntakeMode {
        &self.mode
    }

    /// Build the creation payload for a new patient. Name, date of birth,
    /// phone and email are all required.
    pub fn build_new_patient(&self, form: PatientIntakeForm) -> Result<NewPatient, IntakeError> {
        let name = required("name", &form.name)?;
        let dob = required("dob", &form.dob)?;
        let phone = required("phone", &form.phone)?;
        let email = required("email", &form.email)?;

        let (chronic_options, medication_options) = self.options();
        let chronic_diseases =
            self.read_list(CHRONIC_DISEASES, form.chronic_diseases, chronic_options)?;
        let continuous_medication =
            self.read_list(CONTINUOUS_MEDICATION, form.continuous_medication, medication_options)?;

        debug!(
            "Intake for '{}': {} diseases, {} medications",
            name,
            chronic_diseases.len(),
            continuous_medication.len()
        );

        Ok(NewPatient {
            name,
            dob,
            phone,
            email,
            chronic_diseases,
            continuous_medication,
        })
    }

    /// Apply an edit form to an existing patient, keeping its id
    pub fn build_updated_patient(
        &self,
        existing: &Patient,
        form: PatientIntakeForm,
    ) -> Result<Patient, IntakeError> {
        let data = self.build_new_patient(form)?;
        Ok(Patient {
            id: existing.id.clone(),
            name: data.name,
            dob: data.dob,
            phone: data.phone,
            email: data.email,
            chronic_diseases: data.chronic_diseases,
            continuous_medication: data.continuous_medication,
        })
    }

    /// Pre-fill the edit form for `patient` in the configured style
    pub fn edit_form(&self, patient: &Patient) -> PatientIntakeForm {
        let to_input = |items: &[String]| match self.mode {
            IntakeMode::FreeText => ListInput::Text(items.join("\n")),
            IntakeMode::Checklist { .. } => ListInput::Selected(items.to_vec()),
        };

        PatientIntakeForm {
            name: patient.name.clone(),
            dob: patient.dob.clone(),
            phone: patient.phone.clone(),
            email: patient.email.clone(),
            chronic_diseases: to_input(&patient.chronic_diseases),
            continuous_medication: to_input(&patient.continuous_medication),
        }
    }

    fn options(&self) -> (&[String], &[String]) {
        match &self.mode {
            IntakeMode::FreeText => (NO_OPTIONS, NO_OPTIONS),
            IntakeMode::Checklist {
                chronic_disease_options,
                medication_options,
            } => (chronic_disease_options.as_slice(), medication_options.as_slice()),
        }
    }

    fn read_list(
        &self,
        field: &'static str,
        input: ListInput,
        options: &[String],
    ) -> Result<Vec<String>, IntakeError> {
        match (&self.mode, input) {
            (IntakeMode::FreeText, ListInput::Text(text)) => Ok(parse_list_text(&text)),
            (IntakeMode::Checklist { .. }, ListInput::Selected(selected)) => {
                let mut chosen: Vec<String> = Vec::with_capacity(selected.len());
                for item in selected {
                    if !options.contains(&item) {
                        warn!("Rejecting unknown {} option '{}'", field, item);
                        return Err(IntakeError::UnknownOption { field, option: item });
                    }
                    if !chosen.contains(&item) {
                        chosen.push(item);
                    }
                }
                Ok(chosen)
            }
            (IntakeMode::FreeText, ListInput::Selected(_)) => Err(IntakeError::ModeMismatch {
                field,
                expected: "free_text",
            }),
            (IntakeMode::Checklist { .. }, ListInput::Text(_)) => Err(IntakeError::ModeMismatch {
                field,
                expected: "checklist",
            }),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, IntakeError> {
    let value = value.trim();
    if value.is_empty() {
        debug!("Intake form is missing {}", field);
        return Err(IntakeError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Split typed list input on newlines and commas, trimming and dropping blanks
pub fn parse_list_text(text: &str) -> Vec<String> {
    text.split(|c: char| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(chronic: ListInput, medication: ListInput) -> PatientIntakeForm {
        PatientIntakeForm {
            name: "  Ana Souza ".to_string(),
            dob: "1985-04-12".to_string(),
            phone: "(71) 98888-7777".to_string(),
            email: "ana@email.com".to_string(),
            chronic_diseases: chronic,
            continuous_medication: medication,
        }
    }

    fn checklist() -> IntakeService {
        IntakeService::new(IntakeMode::Checklist {
            chronic_disease_options: vec!["HAS".to_string(), "DM2".to_string()],
            medication_options: vec!["Losartana".to_string(), "Metformina".to_string()],
        })
    }

    #[test]
    fn test_parse_list_text() {
        assert_eq!(
            parse_list_text("HAS, DM2\n\n  Asma ,\r\n,"),
            vec!["HAS", "DM2", "Asma"]
        );
        assert!(parse_list_text("  ,\n ").is_empty());
    }

    #[test]
    fn test_free_text_intake() {
        let service = IntakeService::default();
        let patient = service
            .build_new_patient(form(
                ListInput::Text("HAS\nDM2".to_string()),
                ListInput::Text("Losartana, Metformina".to_string()),
            ))
            .unwrap();

        assert_eq!(patient.name, "Ana Souza");
        assert_eq!(patient.chronic_diseases, vec!["HAS", "DM2"]);
        assert_eq!(patient.continuous_medication, vec!["Losartana", "Metformina"]);
    }

    #[test]
    fn test_name_is_required() {
        let mut empty = form(ListInput::default(), ListInput::default());
        empty.name = "   ".to_string();

        assert_eq!(
            IntakeService::default().build_new_patient(empty),
            Err(IntakeError::MissingField("name"))
        );
    }

    #[test]
    fn test_contact_fields_are_required() {
        let service = IntakeService::default();
        let blank = |edit: fn(&mut PatientIntakeForm)| {
            let mut form = form(ListInput::default(), ListInput::default());
            edit(&mut form);
            service.build_new_patient(form)
        };

        assert_eq!(blank(|f| f.dob.clear()), Err(IntakeError::MissingField("dob")));
        assert_eq!(
            blank(|f| f.phone = "  ".to_string()),
            Err(IntakeError::MissingField("phone"))
        );
        assert_eq!(blank(|f| f.email.clear()), Err(IntakeError::MissingField("email")));
        assert!(blank(|_| {}).is_ok());
    }

    #[test]
    fn test_checklist_intake_dedupes_selection() {
        let patient = checklist()
            .build_new_patient(form(
                ListInput::Selected(vec!["DM2".to_string(), "HAS".to_string(), "DM2".to_string()]),
                ListInput::Selected(Vec::new()),
            ))
            .unwrap();

        assert_eq!(patient.chronic_diseases, vec!["DM2", "HAS"]);
        assert!(patient.continuous_medication.is_empty());
    }

    #[test]
    fn test_checklist_rejects_unknown_option() {
        let result = checklist().build_new_patient(form(
            ListInput::Selected(vec!["Gota".to_string()]),
            ListInput::Selected(Vec::new()),
        ));

        assert_eq!(
            result,
            Err(IntakeError::UnknownOption {
                field: "chronic_diseases",
                option: "Gota".to_string(),
            })
        );
    }

    #[test]
    fn test_mixed_styles_are_rejected() {
        let result = IntakeService::default().build_new_patient(form(
            ListInput::Text(String::new()),
            ListInput::Selected(vec!["Losartana".to_string()]),
        ));
        assert!(matches!(result, Err(IntakeError::ModeMismatch { field: "continuous_medication", .. })));

        let result = checklist().build_new_patient(form(
            ListInput::Text("HAS".to_string()),
            ListInput::Selected(Vec::new()),
        ));
        assert!(matches!(result, Err(IntakeError::ModeMismatch { expected: "checklist", .. })));
    }

    #[test]
    fn test_edit_form_round_trips_through_update() {
        let existing = Patient {
            id: "p-1".to_string(),
            name: "Ana Souza".to_string(),
            dob: "1985-04-12".to_string(),
            phone: "(71) 98888-7777".to_string(),
            email: "ana@email.com".to_string(),
            chronic_diseases: vec!["HAS".to_string(), "DM2".to_string()],
            continuous_medication: vec!["Losartana".to_string()],
        };
        let service = IntakeService::default();

        let mut edit = service.edit_form(&existing);
        assert_eq!(edit.chronic_diseases, ListInput::Text("HAS\nDM2".to_string()));

        edit.phone = "(71) 90000-0000".to_string();
        let updated = service.build_updated_patient(&existing, edit).unwrap();

        assert_eq!(updated.id, "p-1");
        assert_eq!(updated.phone, "(71) 90000-0000");
        assert_eq!(updated.chronic_diseases, existing.chronic_diseases);
    }

    #[test]
    fn test_intake_mode_from_yaml() {
        let mode: IntakeMode = serde_yaml::from_str(
            "kind: checklist\nchronic_disease_options: [HAS]\nmedication_options: [Insulina]\n",
        )
        .unwrap();
        assert_eq!(
            mode,
            IntakeMode::Checklist {
                chronic_disease_options: vec!["HAS".to_string()],
                medication_options: vec!["Insulina".to_string()],
            }
        );

        let mode: IntakeMode = serde_yaml::from_str("kind: free_text\n").unwrap();
        assert_eq!(mode, IntakeMode::FreeText);
    }
}

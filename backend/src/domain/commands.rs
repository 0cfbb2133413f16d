//! Domain-level command types
//!
//! These structs describe form submissions as the views collect them. The
//! services turn them into the record payloads defined in the `shared` crate.

pub mod intake {
    /// How a list field (chronic diseases, continuous medication) was filled in
    #[derive(Debug, Clone, PartialEq)]
    pub enum ListInput {
        /// Free text, one item per line or comma separated
        Text(String),
        /// Items ticked from a fixed set of options
        Selected(Vec<String>),
    }

    impl Default for ListInput {
        fn default() -> Self {
            ListInput::Text(String::new())
        }
    }

    /// Input for registering or editing a patient.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct PatientIntakeForm {
        pub name: String,
        pub dob: String,
        pub phone: String,
        pub email: String,
        pub chronic_diseases: ListInput,
        pub continuous_medication: ListInput,
    }
}

pub mod reminder {
    /// Input for creating a reminder from separate date and time fields.
    #[derive(Debug, Clone)]
    pub struct ScheduleReminderCommand {
        pub patient_id: String,
        /// YYYY-MM-DD
        pub date: String,
        /// HH:MM (24h)
        pub time: String,
        pub note: String,
    }

    /// Input for editing an existing reminder's date, time and note.
    #[derive(Debug, Clone)]
    pub struct RescheduleReminderCommand {
        pub reminder_id: String,
        pub date: String,
        pub time: String,
        pub note: String,
    }
}

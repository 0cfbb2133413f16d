//! # Domain Module
//!
//! The record store proper: one repository per entity kind, the services that
//! wrap them, and the derived views the screens read.
//!
//! ## Module Organization
//!
//! - **repository**: generic ordered collection mirrored to one storage slot
//! - **ordering**: timestamp parsing and chronological sorts for the views
//! - **patient_service / consultation_service / exam_service / reminder_service**:
//!   create, update and query operations per entity kind
//! - **intake_service**: patient registration form handling
//! - **session_service**: the cosmetic login switch
//! - **seed**: bootstrap data for a fresh installation
//!
//! ## Rules
//!
//! - Ids are assigned on creation and never change
//! - Updates replace a whole record by id; an unknown id is a silent no-op
//! - Nothing is ever deleted
//! - Child records are not checked against the patient roster

pub mod commands;
pub mod consultation_service;
pub mod exam_service;
pub mod id_generator;
pub mod intake_service;
pub mod models;
pub mod ordering;
pub mod patient_service;
pub mod reminder_service;
pub mod repository;
pub mod seed;
pub mod session_service;

pub use commands::*;
pub use consultation_service::ConsultationService;
pub use exam_service::ExamService;
pub use id_generator::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use intake_service::{IntakeError, IntakeMode, IntakeService};
pub use patient_service::PatientService;
pub use reminder_service::{ReminderError, ReminderService};
pub use repository::Repository;
pub use seed::SeedData;
pub use session_service::SessionService;

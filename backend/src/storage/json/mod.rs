//! # JSON Storage Module
//!
//! File-backed persistence for the record collections.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── mednote_patients.json
//! ├── mednote_consultations.json
//! ├── mednote_exams.json
//! ├── mednote_reminders.json
//! └── mednote%3AisAuthenticated.json
//! ```
//!
//! Each collection file is a plain JSON array of full records, rewritten in
//! full (temp file + rename) on every change.

pub mod connection;
pub mod slot_store;

pub use connection::JsonConnection;
pub use slot_store::SlotStore;

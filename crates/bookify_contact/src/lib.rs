// --- File: crates/bookify_contact/src/lib.rs ---
pub mod form;
pub mod submission;

pub use form::{validate, ContactForm, ContactRules, ValidationError};
pub use submission::{Banner, BannerKind, ContactSubmission, SubmissionError};

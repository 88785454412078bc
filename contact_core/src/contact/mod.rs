//! Contact submission domain: models, field rules and spam screening.

pub mod models;
pub mod rules;
pub mod spam;
pub mod validator;

pub use models::{
    ClientMeta, ContactForm, ContactResponse, RejectReason, SanitizedSubmission, SubmissionRecord,
};
pub use spam::SpamFilter;
pub use validator::ContactValidator;

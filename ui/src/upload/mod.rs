//! Upload form: draft state, field constraints, validation, submission.

pub mod constraints;
pub mod draft;
pub mod validation;

mod view;
pub use view::UploadForm;

pub use constraints::FieldId;
pub use draft::UploadDraft;
pub use validation::FieldError;

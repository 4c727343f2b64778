// Contact: form validation, mailto link building, and the modal the form lives in.

pub mod form;
pub mod handlers;
pub mod modal;

pub use form::ContactError;

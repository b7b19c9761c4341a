pub mod contact;
pub mod form;
pub mod validation;

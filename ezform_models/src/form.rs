use crate::{
    contact::{FieldName, FormFields, SubmissionStatus},
    validation::FieldErrors,
};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const STATUS_SUCCESS_TEXT: &str = "Form Submitted";
pub const STATUS_ERROR_TEXT: &str = "Error submitting form";

/// Everything a contact form instance remembers between submission attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    /// Set while a submission is waiting for the endpoint. The submit
    /// affordance is disabled for as long as this is `true`.
    pub in_flight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub status_line: Option<StatusLine>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub status: SubmissionStatus,
    pub text: &'static str,
}

impl FormState {
    /// Projects the state onto what should be displayed. The result depends on
    /// nothing but `self`.
    pub fn view(&self) -> FormView {
        let fields = FieldName::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                value: self.fields.get(field).into(),
                error: self.errors.get(field).map(|err| err.message),
            })
            .collect();

        let status_line = match self.status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some(STATUS_SUCCESS_TEXT),
            SubmissionStatus::Error => Some(STATUS_ERROR_TEXT),
        }
        .map(|text| StatusLine {
            status: self.status,
            text,
        });

        FormView {
            fields,
            status_line,
            submit_label: if self.in_flight {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_enabled: !self.in_flight,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validation::validate;

    #[test]
    fn initial_view() {
        let view = FormState::default().view();

        assert_eq!(view.fields.len(), 4);
        assert!(view.fields.iter().all(|f| f.value.is_empty() && f.error.is_none()));
        assert_eq!(view.status_line, None);
        assert_eq!(view.submit_label, "Send Message");
        assert!(view.submit_enabled);
    }

    #[test]
    fn in_flight_disables_submit() {
        let state = FormState {
            in_flight: true,
            ..Default::default()
        };

        let view = state.view();

        assert_eq!(view.submit_label, "Sending...");
        assert!(!view.submit_enabled);
    }

    #[test]
    fn errors_are_shown_next_to_their_fields() {
        let fields = FormFields {
            name: "Jane".into(),
            email: "bad".into(),
            phone: "9876543210".into(),
            message: "".into(),
        };
        let state = FormState {
            errors: validate(&fields).unwrap_err(),
            fields,
            ..Default::default()
        };

        let view = state.view();

        let errors = view
            .fields
            .iter()
            .map(|f| (f.field, f.value.as_str(), f.error))
            .collect::<Vec<_>>();
        assert_eq!(
            errors,
            [
                (FieldName::Name, "Jane", None),
                (FieldName::Email, "bad", Some("Invalid email address")),
                (FieldName::Phone, "9876543210", None),
                (FieldName::Message, "", Some("Message is required")),
            ]
        );
    }

    #[test]
    fn status_lines() {
        for (status, expected) in [
            (SubmissionStatus::Idle, None),
            (SubmissionStatus::Success, Some("Form Submitted")),
            (SubmissionStatus::Error, Some("Error submitting form")),
        ] {
            let state = FormState {
                status,
                ..Default::default()
            };
            assert_eq!(state.view().status_line.map(|s| s.text), expected);
        }
    }

    #[test]
    fn view_is_deterministic() {
        let state = FormState {
            fields: FormFields::submitted(),
            status: SubmissionStatus::Success,
            ..Default::default()
        };

        assert_eq!(state.view(), state.view());
    }
}

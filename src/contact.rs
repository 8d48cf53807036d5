//! Contact form state. Delivery is simulated: nothing leaves the page.

use std::fmt;

use thiserror::Error;

pub const SUBMIT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("message could not be delivered")]
    Delivery,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    message: ContactMessage,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.message.set(field, value);
    }

    /// Marks the form as sending and hands back what to deliver.
    /// `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_sending() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(self.message.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Sent;
                self.message = ContactMessage::default();
            }
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                self.status = SubmitStatus::Failed;
            }
        }
    }
}

/// Stand-in for a real backend. Succeeds for any message with every field filled in.
pub fn deliver(message: &ContactMessage) -> Result<(), SubmitError> {
    if let Some(field) = message.missing_fields().into_iter().next() {
        return Err(SubmitError::MissingField(field));
    }
    log::info!(
        "simulated delivery of {:?} from {}",
        message.subject,
        message.email
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Subject, "Hello");
        form.set_field(ContactField::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_missing_fields() {
        let mut message = ContactMessage::default();
        assert_eq!(message.missing_fields(), ContactField::ALL.to_vec());
        message.set(ContactField::Name, "Ada");
        message.set(ContactField::Subject, "   ");
        assert_eq!(
            message.missing_fields(),
            vec![
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message
            ]
        );
        assert_eq!(
            deliver(&message),
            Err(SubmitError::MissingField(ContactField::Email))
        );
        assert_eq!(
            SubmitError::MissingField(ContactField::Email).to_string(),
            "Email is required"
        );
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let mut form = filled();
        assert_eq!(form.status(), SubmitStatus::Idle);

        let message = form.begin_submit().unwrap();
        assert!(form.is_sending());
        assert_eq!(message.email, "ada@example.com");

        form.finish_submit(deliver(&message));
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(form.message(), &ContactMessage::default());
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err(SubmitError::Delivery));
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.message().get(ContactField::Name), "Ada");
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        form.finish_submit(Ok(()));
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(ContactField::Email.input_type(), "email");
        assert_eq!(ContactField::Message.id(), "message");
        assert_eq!(ContactField::Subject.to_string(), "Subject");
    }
}

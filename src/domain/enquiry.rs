use crate::domain::validation::{is_valid_email, FieldErrors};

/// Raw contact form submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A contact form submission that passed validation, trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<NewEnquiry, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.min_chars("name", &self.name, 2, "Name must be at least 2 characters.");
        if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address.");
        }
        errors.min_chars("subject", &self.subject, 3, "Subject must be at least 3 characters.");
        errors.min_chars("message", &self.message, 10, "Message must be at least 10 characters.");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEnquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

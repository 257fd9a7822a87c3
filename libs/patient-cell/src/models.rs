use serde::{Deserialize, Serialize};

/// The single remembered patient of this client. Appointments embed a copy
/// of this record at booking time; later edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl PatientProfile {
    /// A profile is complete when name, email and phone are all non-blank.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(ProfileError::Incomplete { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    #[error("Patient profile is incomplete: missing {field}")]
    Incomplete { field: &'static str },

    #[error("No patient profile saved")]
    NotSaved,
}

//! Community residents.

use super::choices::define_choice;
use super::email::EmailAddress;
use super::validation::{EntityValidationError, choice_or_default, required_present, required_text};

define_choice! {
    /// Access role held by a resident.
    pub enum ResidentRole {
        Resident => "resident",
        Admin => "admin",
    }
    default = Resident;
}

/// Untrusted input for [`Resident::new`].
#[derive(Debug, Clone, Default)]
pub struct ResidentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub apartment: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub share_contact: Option<bool>,
}

/// A person living in the community. The email is the login key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resident {
    name: String,
    email: EmailAddress,
    apartment: String,
    phone: Option<String>,
    role: ResidentRole,
    share_contact: bool,
}

impl Resident {
    /// Validate a draft into a resident.
    ///
    /// `apartment` must be present but may be empty.
    pub fn new(draft: ResidentDraft) -> Result<Self, EntityValidationError> {
        Ok(Self {
            name: required_text(draft.name, "name")?,
            email: EmailAddress::required(draft.email, "email")?,
            apartment: required_present(draft.apartment, "apartment")?,
            phone: draft.phone,
            role: choice_or_default(draft.role, "role")?,
            share_contact: draft.share_contact.unwrap_or(false),
        })
    }

    /// Resident created on first login.
    ///
    /// The name falls back to the part of the email before `@` and the
    /// apartment to an empty string.
    pub fn from_login(
        email: EmailAddress,
        name: Option<String>,
        apartment: Option<String>,
    ) -> Self {
        let name = name
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| email.local_part().to_owned());
        Self {
            name,
            email,
            apartment: apartment.unwrap_or_default(),
            phone: None,
            role: ResidentRole::Resident,
            share_contact: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn apartment(&self) -> &str {
        &self.apartment
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn role(&self) -> ResidentRole {
        self.role
    }

    /// Whether the resident agreed to show contact details to neighbours.
    pub fn share_contact(&self) -> bool {
        self.share_contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> ResidentDraft {
        ResidentDraft {
            name: Some("Priya".to_owned()),
            email: Some("priya@example.com".to_owned()),
            apartment: Some("B-204".to_owned()),
            ..ResidentDraft::default()
        }
    }

    #[rstest]
    fn applies_defaults(draft: ResidentDraft) {
        let resident = Resident::new(draft).expect("valid resident");
        assert_eq!(resident.role(), ResidentRole::Resident);
        assert!(!resident.share_contact());
        assert!(resident.phone().is_none());
    }

    #[rstest]
    fn empty_apartment_is_allowed(mut draft: ResidentDraft) {
        draft.apartment = Some(String::new());
        let resident = Resident::new(draft).expect("valid resident");
        assert_eq!(resident.apartment(), "");
    }

    #[rstest]
    fn rejects_unknown_role(mut draft: ResidentDraft) {
        draft.role = Some("superuser".to_owned());
        let err = Resident::new(draft).expect_err("unknown role");
        assert_eq!(err.field(), "role");
        assert_eq!(err.allowed(), Some(&["resident", "admin"][..]));
    }

    #[rstest]
    fn rejects_malformed_email(mut draft: ResidentDraft) {
        draft.email = Some("priya".to_owned());
        let err = Resident::new(draft).expect_err("bad email");
        assert_eq!(err.code(), "invalid_email");
    }

    #[rstest]
    #[case(None, "a")]
    #[case(Some("  ".to_owned()), "a")]
    #[case(Some("Asha".to_owned()), "Asha")]
    fn login_name_falls_back_to_local_part(
        #[case] name: Option<String>,
        #[case] expected: &str,
    ) {
        let email = EmailAddress::parse("a@x.com", "email").expect("valid");
        let resident = Resident::from_login(email, name, None);
        assert_eq!(resident.name(), expected);
        assert_eq!(resident.apartment(), "");
        assert_eq!(resident.role(), ResidentRole::Resident);
        assert!(!resident.share_contact());
    }
}

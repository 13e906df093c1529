//! Complaints, optionally anonymous.

use super::choices::define_choice;
use super::validation::{EntityValidationError, choice_or_default, required_text};

define_choice! {
    /// Handling state of a complaint.
    pub enum ComplaintStatus {
        Open => "open",
        Acknowledged => "acknowledged",
        Responded => "responded",
        Closed => "closed",
    }
    default = Open;
}

/// Untrusted input for [`Complaint::new`].
#[derive(Debug, Clone, Default)]
pub struct ComplaintDraft {
    pub message: Option<String>,
    pub anonymous: Option<bool>,
    pub user_email: Option<String>,
    pub status: Option<String>,
    pub response: Option<String>,
}

/// A complaint lodged with the committee.
///
/// ## Invariants
/// - An anonymous complaint never carries a `user_email`.
/// - `user_email` is free text; a flat number is as good as an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    message: String,
    anonymous: bool,
    user_email: Option<String>,
    status: ComplaintStatus,
    response: Option<String>,
}

impl Complaint {
    /// Validate a draft. Any contact on an anonymous draft is discarded.
    pub fn new(draft: ComplaintDraft) -> Result<Self, EntityValidationError> {
        let anonymous = draft.anonymous.unwrap_or(false);
        let user_email = draft
            .user_email
            .filter(|contact| !anonymous && !contact.trim().is_empty());
        Ok(Self {
            message: required_text(draft.message, "message")?,
            anonymous,
            user_email,
            status: choice_or_default(draft.status, "status")?,
            response: draft.response,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn status(&self) -> ComplaintStatus {
        self.status
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(anonymous: Option<bool>, email: &str) -> ComplaintDraft {
        ComplaintDraft {
            message: Some("Noise after 11pm".to_owned()),
            anonymous,
            user_email: Some(email.to_owned()),
            ..ComplaintDraft::default()
        }
    }

    #[rstest]
    fn anonymous_complaint_drops_email() {
        let complaint = Complaint::new(draft(Some(true), "a@x.com")).expect("valid");
        assert!(complaint.anonymous());
        assert!(complaint.user_email().is_none());
    }

    #[rstest]
    fn anonymous_complaint_drops_free_text_contact() {
        let complaint = Complaint::new(draft(Some(true), "not-an-email")).expect("valid");
        assert!(complaint.user_email().is_none());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(false))]
    fn named_complaint_keeps_email(#[case] anonymous: Option<bool>) {
        let complaint = Complaint::new(draft(anonymous, "a@x.com")).expect("valid");
        assert_eq!(complaint.user_email(), Some("a@x.com"));
        assert_eq!(complaint.status(), ComplaintStatus::Open);
    }

    #[rstest]
    #[case("flat-302")]
    #[case("Tower B, 4th floor")]
    fn named_complaint_keeps_any_contact_text(#[case] contact: &str) {
        let complaint = Complaint::new(draft(Some(false), contact)).expect("valid");
        assert_eq!(complaint.user_email(), Some(contact));
    }

    #[rstest]
    fn blank_contact_is_dropped() {
        let complaint = Complaint::new(draft(None, "  ")).expect("valid");
        assert!(complaint.user_email().is_none());
    }
}

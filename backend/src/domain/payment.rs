//! Payment records.

use super::choices::define_choice;
use super::email::EmailAddress;
use super::validation::{EntityValidationError, choice_or_default, required_text};

define_choice! {
    /// Settlement state of a payment.
    pub enum PaymentStatus {
        Pending => "pending",
        Success => "success",
        Failed => "failed",
    }
    default = Pending;
}

/// Untrusted input for [`Payment::new`].
#[derive(Debug, Clone, Default)]
pub struct PaymentDraft {
    pub user_email: Option<String>,
    pub amount: Option<f64>,
    pub purpose: Option<String>,
    pub month: Option<String>,
    pub status: Option<String>,
    pub receipt_no: Option<String>,
    pub remarks: Option<String>,
}

/// A dues or fee payment made by a resident.
///
/// The amount carries no sign or range constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    user_email: EmailAddress,
    amount: f64,
    purpose: String,
    month: Option<String>,
    status: PaymentStatus,
    receipt_no: Option<String>,
    remarks: Option<String>,
}

impl Payment {
    pub fn new(draft: PaymentDraft) -> Result<Self, EntityValidationError> {
        Ok(Self {
            user_email: EmailAddress::required(draft.user_email, "user_email")?,
            amount: draft
                .amount
                .ok_or(EntityValidationError::MissingField { field: "amount" })?,
            purpose: required_text(draft.purpose, "purpose")?,
            month: draft.month,
            status: choice_or_default(draft.status, "status")?,
            receipt_no: draft.receipt_no,
            remarks: draft.remarks,
        })
    }

    pub fn user_email(&self) -> &EmailAddress {
        &self.user_email
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Billing month, conventionally `YYYY-MM`.
    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn receipt_no(&self) -> Option<&str> {
        self.receipt_no.as_deref()
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(amount: Option<f64>) -> PaymentDraft {
        PaymentDraft {
            user_email: Some("a@x.com".to_owned()),
            amount,
            purpose: Some("maintenance".to_owned()),
            month: Some("2025-11".to_owned()),
            ..PaymentDraft::default()
        }
    }

    #[rstest]
    #[case(1500.0)]
    #[case(0.0)]
    #[case(-20.5)]
    fn accepts_any_amount(#[case] amount: f64) {
        let payment = Payment::new(draft(Some(amount))).expect("valid payment");
        assert!((payment.amount() - amount).abs() < f64::EPSILON);
        assert_eq!(payment.status(), PaymentStatus::Pending);
        assert_eq!(payment.month(), Some("2025-11"));
    }

    #[rstest]
    fn requires_amount() {
        let err = Payment::new(draft(None)).expect_err("missing amount");
        assert_eq!(err.field(), "amount");
    }

    #[rstest]
    fn rejects_unknown_status() {
        let mut input = draft(Some(10.0));
        input.status = Some("refunded".to_owned());
        let err = Payment::new(input).expect_err("bad status");
        assert_eq!(err.allowed(), Some(&["pending", "success", "failed"][..]));
    }
}

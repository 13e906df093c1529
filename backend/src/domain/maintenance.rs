//! Maintenance tickets raised by residents.

use super::choices::define_choice;
use super::validation::{EntityValidationError, choice_or_default, required_text};

define_choice! {
    /// Ticket lifecycle state. Only this field changes after creation.
    pub enum MaintenanceStatus {
        Open => "open",
        InProgress => "in_progress",
        Resolved => "resolved",
        Closed => "closed",
    }
    default = Open;
}

define_choice! {
    /// Urgency assigned by the requester.
    pub enum MaintenancePriority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
    default = Medium;
}

const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("plumbing", &["leak", "pipe", "tap", "drain", "water", "plumb"]),
    (
        "electrical",
        &["light", "power", "electric", "switch", "socket", "wiring", "fuse"],
    ),
    ("security", &["lock", "gate", "cctv", "guard", "security", "theft"]),
    ("cleaning", &["clean", "garbage", "trash", "dust", "sweep", "pest"]),
];

/// Category used when no keyword matches.
pub const GENERAL_CATEGORY: &str = "general";

/// Guess a ticket category from free text.
///
/// Matching is case-insensitive and the first category in
/// plumbing, electrical, security, cleaning order with a hit wins.
///
/// # Examples
/// ```
/// use society_backend::domain::infer_maintenance_category;
///
/// assert_eq!(infer_maintenance_category("Kitchen tap", "It drips"), "plumbing");
/// assert_eq!(infer_maintenance_category("Lift", "Stuck on 3"), "general");
/// ```
pub fn infer_maintenance_category(title: &str, description: &str) -> &'static str {
    let haystack = format!("{title} {description}").to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map_or(GENERAL_CATEGORY, |(category, _)| category)
}

/// Untrusted input for [`MaintenanceRequest::new`].
#[derive(Debug, Clone, Default)]
pub struct MaintenanceDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requested_by: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub apartment: Option<String>,
    pub images: Option<Vec<String>>,
}

/// A maintenance ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceRequest {
    title: String,
    description: String,
    requested_by: String,
    category: String,
    status: MaintenanceStatus,
    priority: MaintenancePriority,
    assigned_to: Option<String>,
    apartment: Option<String>,
    images: Vec<String>,
}

impl MaintenanceRequest {
    /// Validate a draft, inferring the category when none is given.
    pub fn new(draft: MaintenanceDraft) -> Result<Self, EntityValidationError> {
        let title = required_text(draft.title, "title")?;
        let description = required_text(draft.description, "description")?;
        let requested_by = required_text(draft.requested_by, "requested_by")?;
        let category = match draft.category.as_deref().map(str::trim) {
            Some(given) if !given.is_empty() => given.to_owned(),
            _ => infer_maintenance_category(&title, &description).to_owned(),
        };
        Ok(Self {
            status: choice_or_default(draft.status, "status")?,
            priority: choice_or_default(draft.priority, "priority")?,
            title,
            description,
            requested_by,
            category,
            assigned_to: draft.assigned_to,
            apartment: draft.apartment,
            images: draft.images.unwrap_or_default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn requested_by(&self) -> &str {
        &self.requested_by
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> MaintenanceStatus {
        self.status
    }

    pub fn priority(&self) -> MaintenancePriority {
        self.priority
    }

    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    pub fn apartment(&self) -> Option<&str> {
        self.apartment.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Replace the lifecycle state.
    pub fn set_status(&mut self, status: MaintenanceStatus) {
        self.status = status;
    }
}

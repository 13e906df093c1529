//! Community notices.

use super::validation::{EntityValidationError, required_text};

/// Language recorded when none is supplied.
pub const DEFAULT_NOTICE_LANGUAGE: &str = "en";

/// Untrusted input for [`Notice::new`].
#[derive(Debug, Clone, Default)]
pub struct NoticeDraft {
    pub title: Option<String>,
    pub body: Option<String>,
    pub posted_by: Option<String>,
    pub tags: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
    pub pinned: Option<bool>,
    pub language: Option<String>,
}

/// A notice posted to the community board.
///
/// Tags form a set: duplicates are dropped and first-seen order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    title: String,
    body: String,
    posted_by: String,
    tags: Vec<String>,
    attachments: Vec<String>,
    pinned: bool,
    language: String,
}

impl Notice {
    pub fn new(draft: NoticeDraft) -> Result<Self, EntityValidationError> {
        let mut tags: Vec<String> = Vec::new();
        for tag in draft.tags.unwrap_or_default() {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        let language = draft
            .language
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NOTICE_LANGUAGE.to_owned());
        Ok(Self {
            title: required_text(draft.title, "title")?,
            body: required_text(draft.body, "body")?,
            posted_by: required_text(draft.posted_by, "posted_by")?,
            tags,
            attachments: draft.attachments.unwrap_or_default(),
            pinned: draft.pinned.unwrap_or(false),
            language,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn posted_by(&self) -> &str {
        &self.posted_by
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the notice carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft() -> NoticeDraft {
        NoticeDraft {
            title: Some("Water cut".to_owned()),
            body: Some("Tank cleaning on Sunday".to_owned()),
            posted_by: Some("office@x.com".to_owned()),
            ..NoticeDraft::default()
        }
    }

    #[rstest]
    fn applies_defaults() {
        let notice = Notice::new(draft()).expect("valid notice");
        assert!(!notice.pinned());
        assert_eq!(notice.language(), "en");
        assert!(notice.tags().is_empty());
    }

    #[rstest]
    fn tags_are_deduplicated_in_order() {
        let mut input = draft();
        input.tags = Some(vec![
            "water".to_owned(),
            "urgent".to_owned(),
            "water".to_owned(),
        ]);
        let notice = Notice::new(input).expect("valid notice");
        assert_eq!(notice.tags(), ["water", "urgent"]);
        assert!(notice.has_tag("urgent"));
        assert!(!notice.has_tag("events"));
    }

    #[rstest]
    fn requires_body() {
        let mut input = draft();
        input.body = None;
        let err = Notice::new(input).expect_err("missing body");
        assert_eq!(err.field(), "body");
    }
}

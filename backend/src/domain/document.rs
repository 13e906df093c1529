//! Shared community documents.

use super::validation::{EntityValidationError, required_text};

/// Untrusted input for [`Document::new`].
#[derive(Debug, Clone, Default)]
pub struct DocumentDraft {
    pub title: Option<String>,
    pub url: Option<String>,
    pub uploaded_by: Option<String>,
    pub category: Option<String>,
}

/// A link to a document such as bylaws or meeting minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    url: String,
    uploaded_by: String,
    category: Option<String>,
}

impl Document {
    pub fn new(draft: DocumentDraft) -> Result<Self, EntityValidationError> {
        Ok(Self {
            title: required_text(draft.title, "title")?,
            url: required_text(draft.url, "url")?,
            uploaded_by: required_text(draft.uploaded_by, "uploaded_by")?,
            category: draft.category,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn uploaded_by(&self) -> &str {
        &self.uploaded_by
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("title")]
    #[case("url")]
    #[case("uploaded_by")]
    fn each_required_field_is_checked(#[case] missing: &str) {
        let mut draft = DocumentDraft {
            title: Some("Bylaws".to_owned()),
            url: Some("https://x.com/bylaws.pdf".to_owned()),
            uploaded_by: Some("office@x.com".to_owned()),
            category: None,
        };
        match missing {
            "title" => draft.title = None,
            "url" => draft.url = None,
            _ => draft.uploaded_by = None,
        }
        let err = Document::new(draft).expect_err("missing field");
        assert_eq!(err.field(), missing);
    }
}

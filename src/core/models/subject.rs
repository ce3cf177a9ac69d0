//! Subject entry model

use serde::{Deserialize, Deserializer, Serialize};

/// Grade pre-selected for a freshly added subject row
pub const DEFAULT_GRADE: &str = "HD";

/// One subject row as entered by the user
///
/// Fields are kept as raw text; validation happens at calculation time so
/// that half-filled rows survive a save/load cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    /// Course code (e.g., "FIT1045")
    #[serde(default, deserialize_with = "text_or_empty")]
    pub code: String,
    /// Course name
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    /// Letter grade; null or blank falls back to [`DEFAULT_GRADE`]
    #[serde(default = "default_grade", deserialize_with = "grade_or_default")]
    pub grade: String,
    /// Credit weight as entered
    #[serde(default, deserialize_with = "credits_as_text")]
    pub credits: String,
}

fn default_grade() -> String {
    DEFAULT_GRADE.to_string()
}

/// Treat a stored `null` like a missing field
pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn grade_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|grade| !grade.is_empty())
        .unwrap_or_else(default_grade))
}

/// Accept credits stored either as text or as a bare JSON number
fn credits_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Credits {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Credits::deserialize(deserializer)? {
        Credits::Text(text) => text,
        Credits::Number(n) => n.to_string(),
        Credits::Missing(()) => String::new(),
    })
}

impl SubjectEntry {
    /// Create a subject entry from its four fields
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        grade: impl Into<String>,
        credits: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            grade: grade.into(),
            credits: credits.into(),
        }
    }

    /// A blank row with the default grade selected
    #[must_use]
    pub fn blank() -> Self {
        Self::new("", "", DEFAULT_GRADE, "")
    }

    /// Whether code, name and credits are all filled in (ignoring whitespace)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.code.trim().is_empty()
            && !self.name.trim().is_empty()
            && !self.credits.trim().is_empty()
    }

    /// Parsed credit weight, if it is a finite positive number
    #[must_use]
    pub fn parsed_credits(&self) -> Option<f64> {
        self.credits
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite() && *c > 0.0)
    }
}

impl Default for SubjectEntry {
    fn default() -> Self {
        Self::blank()
    }
}

/// Partial update for a subject row; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectPatch {
    /// New course code
    pub code: Option<String>,
    /// New course name
    pub name: Option<String>,
    /// New grade
    pub grade: Option<String>,
    /// New credits
    pub credits: Option<String>,
}

impl SubjectPatch {
    /// Whether the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none() && self.grade.is_none() && self.credits.is_none()
    }

    /// Apply the patch to an entry
    pub fn apply(self, entry: &mut SubjectEntry) {
        if let Some(code) = self.code {
            entry.code = code;
        }
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(grade) = self.grade {
            entry.grade = grade;
        }
        if let Some(credits) = self.credits {
            entry.credits = credits;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_row_is_incomplete() {
        let row = SubjectEntry::blank();
        assert_eq!(row.grade, "HD");
        assert!(!row.is_complete());
    }

    #[test]
    fn test_whitespace_fields_are_incomplete() {
        let row = SubjectEntry::new("FIT1045", "   ", "HD", "6");
        assert!(!row.is_complete());
        let row = SubjectEntry::new("FIT1045", "Algorithms", "HD", " ");
        assert!(!row.is_complete());
    }

    #[test]
    fn test_parsed_credits() {
        assert_eq!(SubjectEntry::new("a", "b", "HD", " 6 ").parsed_credits(), Some(6.0));
        assert_eq!(SubjectEntry::new("a", "b", "HD", "2.5").parsed_credits(), Some(2.5));
        assert_eq!(SubjectEntry::new("a", "b", "HD", "-3").parsed_credits(), None);
        assert_eq!(SubjectEntry::new("a", "b", "HD", "0").parsed_credits(), None);
        assert_eq!(SubjectEntry::new("a", "b", "HD", "abc").parsed_credits(), None);
        assert_eq!(SubjectEntry::new("a", "b", "HD", "inf").parsed_credits(), None);
        assert_eq!(SubjectEntry::new("a", "b", "HD", "NaN").parsed_credits(), None);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let row: SubjectEntry = serde_json::from_str(r#"{"code":"X1"}"#).unwrap();
        assert_eq!(row, SubjectEntry::new("X1", "", "HD", ""));
    }

    #[test]
    fn test_deserialize_numeric_and_null_credits() {
        let row: SubjectEntry =
            serde_json::from_str(r#"{"code":"X1","name":"N","grade":"C","credits":12}"#).unwrap();
        assert_eq!(row.credits, "12");
        let row: SubjectEntry =
            serde_json::from_str(r#"{"code":"X1","name":"N","grade":"C","credits":null}"#)
                .unwrap();
        assert_eq!(row.credits, "");
    }

    #[test]
    fn test_deserialize_null_text_fields() {
        let row: SubjectEntry = serde_json::from_str(
            r#"{"code":null,"name":"Algorithms","grade":null,"credits":"6"}"#,
        )
        .unwrap();
        assert_eq!(row, SubjectEntry::new("", "Algorithms", "HD", "6"));

        let row: SubjectEntry =
            serde_json::from_str(r#"{"code":"X1","name":null,"grade":"","credits":"6"}"#).unwrap();
        assert_eq!(row, SubjectEntry::new("X1", "", "HD", "6"));
    }

    #[test]
    fn test_patch_applies_selected_fields() {
        let mut row = SubjectEntry::new("X1", "Old", "HD", "6");
        let patch = SubjectPatch {
            name: Some("New".to_string()),
            credits: Some("12".to_string()),
            ..SubjectPatch::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut row);
        assert_eq!(row, SubjectEntry::new("X1", "New", "HD", "12"));
    }
}

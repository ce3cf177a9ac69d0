//! Grade book model: the editable set of semesters and the selected grading system
//!
//! Semesters are addressed by their 1-based position. Labels are derived from
//! position, so removing a semester renumbers every semester after it.

use super::subject::{text_or_empty, SubjectEntry, SubjectPatch};
use crate::core::error::EditError;
use serde::{Deserialize, Deserializer, Serialize};

/// Everything the user has entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBook {
    /// Selected grading system identifier
    #[serde(default, deserialize_with = "text_or_empty")]
    pub system: String,
    /// Semesters in order, each an ordered list of subject rows
    #[serde(default, deserialize_with = "semesters_or_empty")]
    pub semesters: Vec<Vec<SubjectEntry>>,
}

fn semesters_or_empty<'de, D>(deserializer: D) -> Result<Vec<Vec<SubjectEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Vec<SubjectEntry>>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GradeBook {
    /// Fresh grade book: one semester holding one blank subject row
    #[must_use]
    pub fn new(system: impl Into<String>) -> Self {
        let mut book = Self {
            system: system.into(),
            semesters: Vec::new(),
        };
        book.add_semester();
        book
    }

    /// Number of semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Subject rows of a semester
    ///
    /// # Errors
    /// Returns an error if the semester does not exist.
    pub fn semester(&self, number: usize) -> Result<&[SubjectEntry], EditError> {
        let idx = self.semester_index(number)?;
        Ok(&self.semesters[idx])
    }

    /// Append a semester with one blank row and return its number
    pub fn add_semester(&mut self) -> usize {
        self.semesters.push(vec![SubjectEntry::blank()]);
        self.semesters.len()
    }

    /// Remove a semester; later semesters shift down by one
    ///
    /// # Errors
    /// Returns an error if the semester does not exist.
    pub fn remove_semester(&mut self, number: usize) -> Result<Vec<SubjectEntry>, EditError> {
        let idx = self.semester_index(number)?;
        Ok(self.semesters.remove(idx))
    }

    /// Append a subject row to a semester and return its row number
    ///
    /// # Errors
    /// Returns an error if the semester does not exist.
    pub fn add_subject(&mut self, semester: usize, entry: SubjectEntry) -> Result<usize, EditError> {
        let idx = self.semester_index(semester)?;
        let rows = &mut self.semesters[idx];
        rows.push(entry);
        Ok(rows.len())
    }

    /// Remove a subject row
    ///
    /// # Errors
    /// Returns an error if the semester or row does not exist.
    pub fn remove_subject(&mut self, semester: usize, row: usize) -> Result<SubjectEntry, EditError> {
        let (s, r) = self.row_index(semester, row)?;
        Ok(self.semesters[s].remove(r))
    }

    /// Update selected fields of a subject row
    ///
    /// # Errors
    /// Returns an error if the semester or row does not exist.
    pub fn update_subject(
        &mut self,
        semester: usize,
        row: usize,
        patch: SubjectPatch,
    ) -> Result<&SubjectEntry, EditError> {
        let (s, r) = self.row_index(semester, row)?;
        let entry = &mut self.semesters[s][r];
        patch.apply(entry);
        Ok(entry)
    }

    /// Select a grading system
    pub fn set_system(&mut self, system: impl Into<String>) {
        self.system = system.into();
    }

    /// Sequential labels, "Semester 1" through "Semester N"
    #[must_use]
    pub fn semester_labels(&self) -> Vec<String> {
        (1..=self.semesters.len())
            .map(|n| format!("Semester {n}"))
            .collect()
    }

    /// Discard all entries and start over
    pub fn clear(&mut self, system: impl Into<String>) {
        *self = Self::new(system);
    }

    fn semester_index(&self, number: usize) -> Result<usize, EditError> {
        if number == 0 || number > self.semesters.len() {
            return Err(EditError::NoSuchSemester {
                number,
                count: self.semesters.len(),
            });
        }
        Ok(number - 1)
    }

    fn row_index(&self, semester: usize, row: usize) -> Result<(usize, usize), EditError> {
        let s = self.semester_index(semester)?;
        let count = self.semesters[s].len();
        if row == 0 || row > count {
            return Err(EditError::NoSuchSubject {
                semester,
                row,
                count,
            });
        }
        Ok((s, row - 1))
    }
}

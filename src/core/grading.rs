//! Grading systems and grade-point resolution
//!
//! A [`GradingCatalog`] is built explicitly and handed to the calculator, so
//! several catalogs (built-in or loaded from TOML) can coexist in one process.

use crate::core::error::GradingError;
use serde::{Deserialize, Serialize};

/// Highest grade point any system may assign
pub const MAX_GRADE_POINT: f64 = 4.0;

const AUS_GRADES: &[(&str, f64)] = &[
    ("HD", 4.00),
    ("D", 3.00),
    ("C", 2.00),
    ("P", 1.00),
    ("Fail", 0.00),
];

const MY_GRADES: &[(&str, f64)] = &[
    ("HD", 4.00),
    ("D", 3.67),
    ("C", 3.00),
    ("P", 2.33),
    ("Fail", 0.00),
    ("F", 0.00),
];

/// A named mapping from letter grade to grade point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingSystem {
    /// Short identifier (e.g., "AUS")
    pub id: String,
    /// Display name (e.g., "Australia")
    pub name: String,
    /// Grades in display order
    grades: Vec<(String, f64)>,
}

impl GradingSystem {
    /// Create a grading system, validating the grade table
    ///
    /// # Errors
    /// Returns an error if the id is blank, the table is empty, or a point
    /// lies outside `[0.0, 4.0]`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grades: Vec<(String, f64)>,
    ) -> Result<Self, GradingError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(GradingError::MissingId);
        }
        if grades.is_empty() {
            return Err(GradingError::Empty(id));
        }
        if let Some((grade, point)) = grades
            .iter()
            .find(|(_, p)| !p.is_finite() || !(0.0..=MAX_GRADE_POINT).contains(p))
        {
            return Err(GradingError::PointOutOfRange {
                system: id,
                grade: grade.clone(),
                point: *point,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            grades,
        })
    }

    fn from_static(id: &str, name: &str, grades: &[(&str, f64)]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            grades: grades.iter().map(|(g, p)| ((*g).to_string(), *p)).collect(),
        }
    }

    /// Exact, case-sensitive lookup of a grade
    #[must_use]
    pub fn point(&self, grade: &str) -> Option<f64> {
        self.grades
            .iter()
            .find(|(g, _)| g == grade)
            .map(|(_, p)| *p)
    }

    /// Grade point for user-entered text: trimmed, unknown grades score 0.0
    #[must_use]
    pub fn grade_point(&self, grade: &str) -> f64 {
        self.point(grade.trim()).unwrap_or(0.0)
    }

    /// Grades with their points, in display order
    #[must_use]
    pub fn grades(&self) -> &[(String, f64)] {
        &self.grades
    }

    /// Letter grades only, in display order
    pub fn grade_names(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|(g, _)| g.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct SystemsFile {
    #[serde(default)]
    systems: Vec<SystemDefinition>,
}

#[derive(Debug, Deserialize)]
struct SystemDefinition {
    id: String,
    #[serde(default)]
    name: Option<String>,
    grades: Vec<(String, f64)>,
}

/// Ordered set of grading systems; the first one is the fallback default
#[derive(Debug, Clone, PartialEq)]
pub struct GradingCatalog {
    // Never empty: only `builtin()` constructs a catalog.
    systems: Vec<GradingSystem>,
}

impl GradingCatalog {
    /// Catalog with the built-in Australian (default) and Malaysian systems
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            systems: vec![
                GradingSystem::from_static("AUS", "Australia", AUS_GRADES),
                GradingSystem::from_static("MY", "Malaysia", MY_GRADES),
            ],
        }
    }

    /// All systems in catalog order
    #[must_use]
    pub fn systems(&self) -> &[GradingSystem] {
        &self.systems
    }

    /// The system used when an identifier is not recognised
    #[must_use]
    pub fn default_system(&self) -> &GradingSystem {
        &self.systems[0]
    }

    /// Look up a system by exact identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GradingSystem> {
        self.systems.iter().find(|s| s.id == id)
    }

    /// Whether the catalog defines `id`
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Look up a system, falling back to the default for unknown identifiers
    #[must_use]
    pub fn resolve(&self, id: &str) -> &GradingSystem {
        self.get(id).unwrap_or_else(|| self.default_system())
    }

    /// Grade point of `grade` under `system_id` (see [`GradingSystem::grade_point`])
    #[must_use]
    pub fn grade_point(&self, grade: &str, system_id: &str) -> f64 {
        self.resolve(system_id).grade_point(grade)
    }

    /// Add a system, replacing any existing system with the same id in place
    pub fn insert(&mut self, system: GradingSystem) {
        if let Some(existing) = self.systems.iter_mut().find(|s| s.id == system.id) {
            *existing = system;
        } else {
            self.systems.push(system);
        }
    }

    /// Extend the catalog from a TOML document of `[[systems]]` tables
    ///
    /// All systems are validated before any is inserted.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or any system is invalid.
    pub fn extend_from_toml(&mut self, toml_str: &str) -> Result<usize, GradingError> {
        let file: SystemsFile = toml::from_str(toml_str)?;
        let parsed = file
            .systems
            .into_iter()
            .map(|def| {
                let name = def.name.unwrap_or_else(|| def.id.clone());
                GradingSystem::new(def.id, name, def.grades)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = parsed.len();
        for system in parsed {
            self.insert(system);
        }
        Ok(count)
    }
}

impl Default for GradingCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

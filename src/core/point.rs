//! # Survey Point
//!
//! A single field measurement of a physical monument.
//!
//! Coordinates are always populated: a record that fails to parse never
//! becomes a `SurveyPoint`. The only way coordinates change after
//! construction is a merge, which goes through [`SurveyPoint::with_coordinates`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::boundary::Vertex;

/// One measurement of a survey monument
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    /// Assigned identifier (may be reassigned on export)
    pub id: String,

    /// Original field tag from the data collector
    #[serde(default)]
    pub source_point_id: String,

    /// Northing (Y)
    pub northing: f64,

    /// Easting (X)
    pub easting: f64,

    /// Elevation (Z)
    pub elevation: f64,

    /// Free-text field description
    #[serde(default)]
    pub description: String,

    /// Job code of the project the point came from
    #[serde(default)]
    pub source_job: String,

    /// When the measurement file was created
    #[serde(default)]
    pub date_acquired: NaiveDateTime,
}

impl SurveyPoint {
    /// Create a point with empty text attributes
    ///
    /// # Example
    /// ```
    /// use survey_consolidate::SurveyPoint;
    /// let p = SurveyPoint::new("24-00001", 1000.0, 2000.0, 50.0);
    /// assert_eq!(p.coordinates(), [1000.0, 2000.0, 50.0]);
    /// ```
    pub fn new(id: impl Into<String>, northing: f64, easting: f64, elevation: f64) -> Self {
        Self {
            id: id.into(),
            source_point_id: String::new(),
            northing,
            easting,
            elevation,
            description: String::new(),
            source_job: String::new(),
            date_acquired: NaiveDateTime::default(),
        }
    }

    /// Set the original field tag
    pub fn with_source_point_id(mut self, source_point_id: impl Into<String>) -> Self {
        self.source_point_id = source_point_id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the source job code
    pub fn with_source_job(mut self, source_job: impl Into<String>) -> Self {
        self.source_job = source_job.into();
        self
    }

    /// Set the acquisition timestamp
    pub fn with_date_acquired(mut self, date_acquired: NaiveDateTime) -> Self {
        self.date_acquired = date_acquired;
        self
    }

    /// Coordinates as `[northing, easting, elevation]`
    pub fn coordinates(&self) -> [f64; 3] {
        [self.northing, self.easting, self.elevation]
    }

    /// Plan position, `x = easting`, `y = northing`
    pub fn planar(&self) -> Vertex {
        Vertex::new(self.easting, self.northing)
    }

    /// Copy of this point moved to `coords`; every other attribute is kept
    pub fn with_coordinates(&self, coords: [f64; 3]) -> Self {
        Self {
            northing: coords[0],
            easting: coords[1],
            elevation: coords[2],
            ..self.clone()
        }
    }
}

impl std::fmt::Display for SurveyPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{:.4},{:.4},{:.4},{},{},{},{}",
            self.id,
            self.northing,
            self.easting,
            self.elevation,
            self.description,
            self.source_job,
            self.date_acquired.format("%Y-%m-%d %H:%M:%S"),
            self.source_point_id
        )
    }
}

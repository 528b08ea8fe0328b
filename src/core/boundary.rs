//! # Boundary
//!
//! Ordered vertex ring describing a containment region (typically a city
//! limit). Built once from an external vertex list and read-only after.
//!
//! The ring does not need to repeat its first vertex at the end; the
//! closing edge is implied.

use serde::{Deserialize, Serialize};

/// Fewest vertices a usable boundary may have
pub const MIN_BOUNDARY_VERTICES: usize = 4;

/// A 2-D plan position (`x` = easting, `y` = northing)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Vertex {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Reasons a boundary cannot be used for containment
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundaryError {
    #[error("not enough points in the boundary ({got}, need at least {required})")]
    TooFewVertices { got: usize, required: usize },

    #[error("boundary vertex {index} is not finite")]
    NonFiniteVertex { index: usize },
}

/// Ordered polygon vertices
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boundary {
    vertices: Vec<Vertex>,
}

impl Boundary {
    /// Build a boundary from any sequence of vertex-like values
    ///
    /// Construction never fails; call [`Boundary::validate`] to find out
    /// whether the ring can be used.
    ///
    /// # Example
    /// ```
    /// use survey_consolidate::Boundary;
    /// let square = Boundary::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
    /// assert_eq!(square.len(), 4);
    /// assert!(square.validate().is_ok());
    /// ```
    pub fn new<V, I>(vertices: I) -> Self
    where
        V: Into<Vertex>,
        I: IntoIterator<Item = V>,
    {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check the ring is usable for containment tests
    pub fn validate(&self) -> Result<(), BoundaryError> {
        if self.vertices.len() < MIN_BOUNDARY_VERTICES {
            return Err(BoundaryError::TooFewVertices {
                got: self.vertices.len(),
                required: MIN_BOUNDARY_VERTICES,
            });
        }
        if let Some(index) = self
            .vertices
            .iter()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(BoundaryError::NonFiniteVertex { index });
        }
        Ok(())
    }

    /// Edges in traversal order, including the closing edge back to the
    /// first vertex unless the caller already repeated it.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.vertices.len();
        let explicitly_closed = n > 1 && self.vertices[0] == self.vertices[n - 1];
        let closing = if explicitly_closed || n < 2 {
            None
        } else {
            Some((self.vertices[n - 1], self.vertices[0]))
        };

        self.vertices
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }
}

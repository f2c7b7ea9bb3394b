//! # Mesh Data Structure
//!
//! Polygon mesh with per-face selection flags. Face normals, areas and
//! centres are derived from the vertex positions on demand.

use glam::DVec3;

/// A single polygon face referencing mesh vertices by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex indices in winding order (counter-clockwise seen from the front).
    pub vertices: Vec<u32>,
    /// Whether the face is part of the working selection.
    pub selected: bool,
}

/// Geometric summary of one face, in the mesh's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSample {
    /// Unit normal (zero for faces without area).
    pub normal: DVec3,
    /// Surface area.
    pub area: f64,
    /// Median centre (mean of the face's vertex positions).
    pub center: DVec3,
}

/// A polygon mesh with vertices and selectable faces.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// let face = mesh.add_face(&[0, 1, 2]);
/// mesh.select_face(face, true);
/// assert_eq!(mesh.selected_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds an unselected face and returns its index.
    pub fn add_face(&mut self, vertices: &[u32]) -> usize {
        let index = self.faces.len();
        self.faces.push(Face {
            vertices: vertices.to_vec(),
            selected: false,
        });
        index
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Sets the selection flag of one face. Out-of-range indices are ignored.
    pub fn select_face(&mut self, index: usize, selected: bool) {
        if let Some(face) = self.faces.get_mut(index) {
            face.selected = selected;
        }
    }

    /// Sets the selection flag of every face.
    pub fn select_all(&mut self, selected: bool) {
        for face in &mut self.faces {
            face.selected = selected;
        }
    }

    /// Returns true if at least one face is selected.
    pub fn has_selection(&self) -> bool {
        self.faces.iter().any(|face| face.selected)
    }

    /// Returns the number of selected faces.
    pub fn selected_count(&self) -> usize {
        self.faces.iter().filter(|face| face.selected).count()
    }

    /// Iterates over the selected faces in face order.
    pub fn selected_faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.faces.iter().filter(|face| face.selected)
    }

    /// Samples normal, area and centre of every selected face, in face order.
    pub fn selected_samples(&self) -> impl Iterator<Item = FaceSample> + '_ {
        self.selected_faces().map(|face| self.sample(face))
    }

    /// Computes normal, area and median centre of a face.
    ///
    /// Uses Newell's method, which handles non-triangular and slightly
    /// non-planar polygons. Out-of-range vertex indices are skipped.
    pub fn sample(&self, face: &Face) -> FaceSample {
        let points: Vec<DVec3> = face
            .vertices
            .iter()
            .filter_map(|&i| self.vertices.get(i as usize).copied())
            .collect();

        if points.is_empty() {
            return FaceSample {
                normal: DVec3::ZERO,
                area: 0.0,
                center: DVec3::ZERO,
            };
        }

        let mut newell = DVec3::ZERO;
        for (i, current) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            newell += current.cross(next);
        }

        let center = points.iter().copied().sum::<DVec3>() / points.len() as f64;

        FaceSample {
            normal: newell.normalize_or_zero(),
            area: newell.length() * 0.5,
            center,
        }
    }
}

//! # In-Memory Scene
//!
//! A minimal host: owns objects, hands out [`ObjectId`]s, duplicates
//! objects on request and writes placements back.

use std::sync::Arc;

use config::constants::DUPLICATE_SUFFIX_DIGITS;
use tracing::debug;

use crate::error::AdhesionError;
use crate::host::{Duplicate, ObjectId};
use crate::object::Object;
use crate::placement::Placement;

/// Flat collection of objects addressed by insertion index.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and returns its handle.
    pub fn add(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(object);
        id
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Looks up an object.
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0 as usize)
    }

    /// Looks up an object for modification.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0 as usize)
    }

    /// Object handles and names in insertion order, for pickers.
    pub fn mesh_objects(&self) -> impl Iterator<Item = (ObjectId, &str)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| (ObjectId(i as u32), object.name()))
    }

    /// Finds an object by exact name.
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.mesh_objects()
            .find(|(_, candidate)| *candidate == name)
            .map(|(id, _)| id)
    }

    /// Writes a placement onto an object.
    pub fn apply(&mut self, id: ObjectId, placement: &Placement) -> Result<(), AdhesionError> {
        let object = self.get_mut(id).ok_or(AdhesionError::UnknownObject(id))?;
        placement.apply_to(object);
        Ok(())
    }

    /// First free `<base>.NNN` name, where `base` is `name` without any
    /// existing numeric suffix.
    fn unique_name(&self, name: &str) -> String {
        let base = match name.rsplit_once('.') {
            Some((stem, suffix))
                if !stem.is_empty()
                    && !suffix.is_empty()
                    && suffix.bytes().all(|b| b.is_ascii_digit()) =>
            {
                stem
            }
            _ => name,
        };

        (1..)
            .map(|n| format!("{base}.{n:0width$}", width = DUPLICATE_SUFFIX_DIGITS))
            .find(|candidate| self.find(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }
}

impl Duplicate for Scene {
    fn duplicate(&mut self, original: &Object, count: usize, linked: bool) -> Vec<ObjectId> {
        debug!(original = original.name(), count, linked, "duplicating object");
        (0..count)
            .map(|_| {
                let name = self.unique_name(original.name());
                let mut copy = if linked {
                    Object::from_shared(name, Arc::clone(original.shared_mesh()))
                } else {
                    Object::new(name, original.mesh().clone())
                };
                copy.transform = original.transform;
                copy.delta_location = original.delta_location;
                self.add(copy)
            })
            .collect()
    }

    fn object(&self, id: ObjectId) -> Option<&Object> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::object::Transform;
    use glam::{DQuat, DVec3};

    fn scene_with_plane() -> (Scene, ObjectId) {
        let mut scene = Scene::new();
        let plane = Object::new("Plane", Mesh::new())
            .with_transform(Transform::from_location(DVec3::new(1.0, 2.0, 3.0)));
        let id = scene.add(plane);
        (scene, id)
    }

    #[test]
    fn add_and_find() {
        let (mut scene, plane) = scene_with_plane();
        let cube = scene.add(Object::new("Cube", Mesh::new()));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.find("Plane"), Some(plane));
        assert_eq!(scene.find("Cube"), Some(cube));
        assert_eq!(scene.find("Sphere"), None);
    }

    #[test]
    fn mesh_objects_in_insertion_order() {
        let (mut scene, _) = scene_with_plane();
        scene.add(Object::new("Cube", Mesh::new()));
        let names: Vec<&str> = scene.mesh_objects().map(|(_, name)| name).collect();
        assert_eq!(names, vec!["Plane", "Cube"]);
    }

    #[test]
    fn duplicates_get_numbered_names() {
        let (mut scene, plane) = scene_with_plane();
        let original = scene.get(plane).unwrap().clone();
        let ids = scene.duplicate(&original, 3, false);
        let names: Vec<&str> = ids.iter().map(|id| scene.get(*id).unwrap().name()).collect();
        assert_eq!(names, vec!["Plane.001", "Plane.002", "Plane.003"]);

        // Duplicating a duplicate continues the sequence on the base name
        let copy = scene.get(ids[0]).unwrap().clone();
        let more = scene.duplicate(&copy, 1, false);
        assert_eq!(scene.get(more[0]).unwrap().name(), "Plane.004");
    }

    #[test]
    fn copies_own_their_mesh() {
        let (mut scene, plane) = scene_with_plane();
        let original = scene.get(plane).unwrap().clone();
        let ids = scene.duplicate(&original, 2, false);
        for id in &ids {
            let copy = scene.get(*id).unwrap();
            assert!(!copy.shares_mesh_with(&original));
            assert_eq!(copy.transform, original.transform);
        }
    }

    #[test]
    fn linked_duplicates_share_mesh() {
        let (mut scene, plane) = scene_with_plane();
        let original = scene.get(plane).unwrap().clone();
        let ids = scene.duplicate(&original, 2, true);
        for id in &ids {
            assert!(scene.get(*id).unwrap().shares_mesh_with(&original));
        }
    }

    #[test]
    fn editing_linked_duplicate_detaches_it() {
        let (mut scene, plane) = scene_with_plane();
        let original = scene.get(plane).unwrap().clone();
        let ids = scene.duplicate(&original, 2, true);

        scene.get_mut(ids[0]).unwrap().mesh_mut().add_vertex(DVec3::ZERO);

        let edited = scene.get(ids[0]).unwrap();
        let untouched = scene.get(ids[1]).unwrap();
        assert!(!edited.shares_mesh_with(&original));
        assert!(untouched.shares_mesh_with(&original));
        assert_eq!(edited.mesh().vertex_count(), 1);
        assert_eq!(untouched.mesh().vertex_count(), 0);
    }

    #[test]
    fn zero_duplicates_is_a_no_op() {
        let (mut scene, plane) = scene_with_plane();
        let original = scene.get(plane).unwrap().clone();
        assert!(scene.duplicate(&original, 0, true).is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn apply_unknown_object_fails() {
        let (mut scene, _) = scene_with_plane();
        let placement = Placement {
            rotation: DQuat::IDENTITY,
            location: DVec3::ZERO,
            delta_location: None,
        };
        assert_eq!(
            scene.apply(ObjectId(9), &placement),
            Err(AdhesionError::UnknownObject(ObjectId(9)))
        );
    }

    #[test]
    fn dotted_names_without_number_keep_their_stem() {
        let mut scene = Scene::new();
        let original = Object::new("Part.left", Mesh::new());
        scene.add(original.clone());
        let ids = scene.duplicate(&original, 1, false);
        assert_eq!(scene.get(ids[0]).unwrap().name(), "Part.left.001");
    }
}

//! Scene container for objects and the camera
//!
//! The Scene owns every rotatable object and the camera. A gesture controller
//! writes to it through [`ViewerControl`].

use objctl_input::{Axis, ViewerControl};
use objctl_math::Euler;
use slotmap::{new_key_type, SlotMap};

use crate::{Camera, Object};

new_key_type! {
    /// Generational key to an object in the scene
    pub struct ObjectKey;
}

/// Objects and the camera that looks at them
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, Object>,
    /// The viewer camera
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene with the default camera
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace the camera
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Add an object, returning its key
    pub fn add_object(&mut self, object: Object) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Remove an object; targets still pointing at it are skipped afterwards
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<Object> {
        self.objects.remove(key)
    }

    pub fn get(&self, key: ObjectKey) -> Option<&Object> {
        self.objects.get(key)
    }

    /// Find an object by name
    pub fn get_by_name(&self, name: &str) -> Option<(ObjectKey, &Object)> {
        self.objects
            .iter()
            .find(|(_, object)| object.name.as_deref() == Some(name))
    }

    /// Keys of every object in insertion order
    pub fn keys(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.objects.keys()
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ViewerControl for Scene {
    type Key = ObjectKey;

    fn rotation(&self, key: ObjectKey) -> Option<Euler> {
        self.objects.get(key).map(|object| object.transform.rotation)
    }

    fn rotate(&mut self, key: ObjectKey, axis: Axis, delta: f32) {
        match self.objects.get_mut(key) {
            Some(object) => *axis.angle_mut(&mut object.transform.rotation) += delta,
            None => log::warn!("Rotate requested for missing object {:?}", key),
        }
    }

    fn dolly_distance(&self) -> f32 {
        self.camera.distance()
    }

    fn set_dolly_distance(&mut self, distance: f32) {
        self.camera.set_distance(distance);
    }
}

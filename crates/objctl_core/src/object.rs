//! Rotatable scene object

use crate::Transform;

/// An object in the scene that gestures can rotate
#[derive(Clone, Debug, Default)]
pub struct Object {
    /// Optional name for lookup
    pub name: Option<String>,
    /// Position and rotation
    pub transform: Transform,
}

impl Object {
    /// Create an object at the origin with no rotation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object with the given transform
    pub fn with_transform(transform: Transform) -> Self {
        Self {
            name: None,
            transform,
        }
    }

    /// Builder: set the object's name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

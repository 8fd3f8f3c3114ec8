//! Rotation receivers and the scene seam

use objctl_math::Euler;

use crate::Axis;

/// The object(s) a controller rotates
///
/// Decided when targets are set, so the rotation code only ever walks an
/// iterator of keys. An empty group means there is nothing to rotate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Targets<K> {
    /// One object
    Single(K),
    /// Every member receives the same step
    Group(Vec<K>),
}

impl<K> Default for Targets<K> {
    fn default() -> Self {
        Targets::Group(Vec::new())
    }
}

impl<K: Copy> Targets<K> {
    /// Target a single object
    pub fn single(key: K) -> Self {
        Targets::Single(key)
    }

    /// Target every key yielded by `keys`, in order
    pub fn group(keys: impl IntoIterator<Item = K>) -> Self {
        Targets::Group(keys.into_iter().collect())
    }

    /// Keys in application order
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.as_slice().iter().copied()
    }

    /// Keys as a slice
    pub fn as_slice(&self) -> &[K] {
        match self {
            Targets::Single(key) => std::slice::from_ref(key),
            Targets::Group(keys) => keys,
        }
    }

    /// Number of objects targeted
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when nothing is targeted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<K> From<Vec<K>> for Targets<K> {
    fn from(keys: Vec<K>) -> Self {
        Targets::Group(keys)
    }
}

/// Trait for the scene a controller drives
///
/// Allows the controller to work with different scene implementations.
/// The scene owns the objects and the camera; the controller only asks for
/// current values and requests changes.
pub trait ViewerControl {
    /// Handle identifying one rotatable object
    type Key: Copy;

    /// Current rotation of `key`, or `None` if it no longer exists
    fn rotation(&self, key: Self::Key) -> Option<Euler>;
    /// Add `delta` radians to one axis of `key`
    fn rotate(&mut self, key: Self::Key, axis: Axis, delta: f32);
    /// Camera dolly distance
    fn dolly_distance(&self) -> f32;
    fn set_dolly_distance(&mut self, distance: f32);
}

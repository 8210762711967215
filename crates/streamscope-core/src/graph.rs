//! Scene graph seam between the engine and the external renderer.

use std::collections::HashMap;

use crate::error::{Result, StreamscopeError};
use crate::object::{SceneObject, SceneObjectKind};

/// Registration surface of the external scene renderer.
///
/// The renderer accepts opaque renderables keyed by a unique name, added by
/// object and removed by name lookup.
pub trait SceneRenderer {
    /// Registers an object with the scene.
    ///
    /// Returns an error if an object with the same name already exists.
    fn add_object(&mut self, object: &SceneObject) -> Result<()>;

    /// Removes an object by name. Returns whether it was present.
    fn remove_object(&mut self, name: &str) -> bool;
}

/// In-memory scene graph tracking the set of registered objects.
///
/// This is the default [`SceneRenderer`] implementation; a real renderer
/// binding replaces it at the same seam.
#[derive(Default)]
pub struct SceneGraph {
    objects: HashMap<String, SceneObjectKind>,
}

impl SceneGraph {
    /// Creates a new empty scene graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether an object with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Returns the kind registered under `name`, if any.
    pub fn kind_of(&self, name: &str) -> Option<SceneObjectKind> {
        self.objects.get(name).copied()
    }

    /// Returns an iterator over registered object names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Returns the number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if no objects are registered.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Removes all objects.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Registers a batch of objects, all or none.
    ///
    /// On a name collision everything added earlier in the batch is
    /// unregistered again before the error propagates.
    pub fn add_objects<'a, I>(&mut self, objects: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a SceneObject>,
    {
        let mut added: Vec<&str> = Vec::new();
        for object in objects {
            if let Err(err) = self.add_object(object) {
                for name in added {
                    self.remove_object(name);
                }
                return Err(err);
            }
            added.push(&object.name);
        }
        Ok(())
    }
}

impl SceneRenderer for SceneGraph {
    fn add_object(&mut self, object: &SceneObject) -> Result<()> {
        if self.objects.contains_key(&object.name) {
            return Err(StreamscopeError::ObjectExists(object.name.clone()));
        }
        self.objects.insert(object.name.clone(), object.kind);
        Ok(())
    }

    fn remove_object(&mut self, name: &str) -> bool {
        self.objects.remove(name).is_some()
    }
}

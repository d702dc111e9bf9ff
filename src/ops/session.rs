//! Host objects and scoped mesh access.

use std::ops::{Deref, DerefMut};

use crate::mesh::PolyMesh;

/// Whether an object is being edited interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectMode {
    /// The stored mesh is at rest.
    Object,
    /// A live edit mesh exists and operators act on it.
    Edit,
}

/// A named mesh object, as a host editor would hold it.
#[derive(Debug, Clone)]
pub struct MeshObject {
    /// Display name.
    pub name: String,
    data: PolyMesh,
    edit: Option<PolyMesh>,
}

impl MeshObject {
    /// Create an object in object mode.
    pub fn new(name: impl Into<String>, mesh: PolyMesh) -> Self {
        Self {
            name: name.into(),
            data: mesh,
            edit: None,
        }
    }

    /// The current mode.
    pub fn mode(&self) -> ObjectMode {
        if self.edit.is_some() {
            ObjectMode::Edit
        } else {
            ObjectMode::Object
        }
    }

    /// Start editing: the stored mesh is copied into a live edit mesh.
    pub fn enter_edit_mode(&mut self) {
        if self.edit.is_none() {
            self.edit = Some(self.data.clone());
        }
    }

    /// Stop editing and store the edit mesh.
    pub fn exit_edit_mode(&mut self) {
        if let Some(mesh) = self.edit.take() {
            self.data = mesh;
        }
    }

    /// The edit mesh while editing, otherwise the stored mesh.
    pub fn mesh(&self) -> &PolyMesh {
        self.edit.as_ref().unwrap_or(&self.data)
    }

    fn mesh_mut(&mut self) -> &mut PolyMesh {
        self.edit.as_mut().unwrap_or(&mut self.data)
    }

    /// Leave edit mode and return the stored mesh.
    pub fn into_mesh(mut self) -> PolyMesh {
        self.exit_edit_mode();
        self.data
    }
}

/// Exclusive access to an object's mesh for one operator call.
///
/// In edit mode the session works on the live edit mesh. In object mode it
/// works on a copy that replaces the stored mesh when the session ends. Either
/// way the selection is flushed on release, including early returns.
pub struct EditSession<'a> {
    object: &'a mut MeshObject,
    detached: Option<PolyMesh>,
}

impl<'a> EditSession<'a> {
    /// Open a session on `object`.
    pub fn open(object: &'a mut MeshObject) -> Self {
        let detached = match object.mode() {
            ObjectMode::Edit => None,
            ObjectMode::Object => Some(object.data.clone()),
        };
        log::debug!(
            "opened {} session on {}",
            if detached.is_some() { "detached" } else { "live" },
            object.name
        );
        Self { object, detached }
    }
}

impl Deref for EditSession<'_> {
    type Target = PolyMesh;

    fn deref(&self) -> &PolyMesh {
        match &self.detached {
            Some(mesh) => mesh,
            None => self.object.mesh(),
        }
    }
}

impl DerefMut for EditSession<'_> {
    fn deref_mut(&mut self) -> &mut PolyMesh {
        match self.detached.as_mut() {
            Some(mesh) => mesh,
            None => self.object.mesh_mut(),
        }
    }
}

impl Drop for EditSession<'_> {
    fn drop(&mut self) {
        self.flush_selection();
        if let Some(mesh) = self.detached.take() {
            self.object.data = mesh;
        }
        log::debug!("released session on {}", self.object.name);
    }
}

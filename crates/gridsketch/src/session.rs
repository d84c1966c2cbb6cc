//! Named workspaces for building diagrams incrementally.
//!
//! A [`Sessions`] registry holds workspaces, each an ordered collection of
//! shape descriptions that can be added, patched, removed and rendered one
//! call at a time. Identifiers come from monotonic counters (`ws-1`,
//! `shp-1`, ...) and are never reused.
//!
//! Every workspace sits behind its own lock, so operations on one workspace
//! are serialized while independent workspaces proceed in parallel. The
//! registry lock is held only long enough to look a workspace up.

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;

use crate::{
    GridsketchError, SketchBuilder,
    render::RenderOptions,
    shape::{ShapeDescription, ShapePatch},
};

/// A summary of one workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub id: String,
    pub name: String,
    pub shape_count: usize,
}

#[derive(Debug)]
struct Workspace {
    name: String,
    shapes: IndexMap<String, ShapeDescription>,
}

/// Registry of workspaces
#[derive(Debug)]
pub struct Sessions {
    builder: SketchBuilder,
    workspaces: Mutex<IndexMap<String, Arc<Mutex<Workspace>>>>,
    next_workspace: AtomicU64,
    next_shape: AtomicU64,
}

impl Default for Sessions {
    fn default() -> Self {
        Self::new(SketchBuilder::default())
    }
}

/// Locks a mutex, recovering the data if a panicking holder poisoned it
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Sessions {
    /// Creates an empty registry that renders with `builder`
    pub fn new(builder: SketchBuilder) -> Self {
        Self {
            builder,
            workspaces: Mutex::default(),
            next_workspace: AtomicU64::new(0),
            next_shape: AtomicU64::new(0),
        }
    }

    /// Creates a workspace and returns its identifier
    pub fn create(&self, name: impl Into<String>) -> String {
        let id = format!("ws-{}", self.next_workspace.fetch_add(1, Ordering::Relaxed) + 1);
        let name = name.into();
        info!(id, name; "Creating workspace");
        let workspace = Workspace {
            name,
            shapes: IndexMap::new(),
        };
        lock(&self.workspaces).insert(id.clone(), Arc::new(Mutex::new(workspace)));
        id
    }

    fn workspace(&self, id: &str) -> Result<Arc<Mutex<Workspace>>, GridsketchError> {
        lock(&self.workspaces)
            .get(id)
            .cloned()
            .ok_or_else(|| GridsketchError::WorkspaceNotFound(id.to_string()))
    }

    /// Adds a shape on top of the workspace and returns its identifier
    ///
    /// # Errors
    ///
    /// Returns [`GridsketchError::WorkspaceNotFound`] for an unknown workspace.
    pub fn add_shape(
        &self,
        workspace_id: &str,
        shape: ShapeDescription,
    ) -> Result<String, GridsketchError> {
        let workspace = self.workspace(workspace_id)?;
        let id = format!("shp-{}", self.next_shape.fetch_add(1, Ordering::Relaxed) + 1);
        debug!(workspace = workspace_id, shape = id, kind:? = shape.kind; "Adding shape");
        lock(&workspace).shapes.insert(id.clone(), shape);
        Ok(id)
    }

    /// Replaces the fields of a shape that are present in `patch`
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown workspace or shape.
    pub fn modify_shape(
        &self,
        workspace_id: &str,
        shape_id: &str,
        patch: ShapePatch,
    ) -> Result<(), GridsketchError> {
        let workspace = self.workspace(workspace_id)?;
        let mut workspace = lock(&workspace);
        let shape = workspace
            .shapes
            .get_mut(shape_id)
            .ok_or_else(|| shape_not_found(workspace_id, shape_id))?;
        shape.apply(patch);
        debug!(workspace = workspace_id, shape = shape_id; "Modified shape");
        Ok(())
    }

    /// Removes a shape, keeping the order of the others
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown workspace or shape.
    pub fn remove_shape(&self, workspace_id: &str, shape_id: &str) -> Result<(), GridsketchError> {
        let workspace = self.workspace(workspace_id)?;
        if lock(&workspace).shapes.shift_remove(shape_id).is_none() {
            return Err(shape_not_found(workspace_id, shape_id));
        }
        debug!(workspace = workspace_id, shape = shape_id; "Removed shape");
        Ok(())
    }

    /// Renders every shape of the workspace in insertion order
    ///
    /// # Errors
    ///
    /// Returns [`GridsketchError::WorkspaceNotFound`] for an unknown workspace.
    pub fn render(
        &self,
        workspace_id: &str,
        options: RenderOptions,
    ) -> Result<String, GridsketchError> {
        let workspace = self.workspace(workspace_id)?;
        let shapes: Vec<ShapeDescription> = lock(&workspace).shapes.values().cloned().collect();
        Ok(self.builder.render(&shapes, options))
    }

    /// Lists every workspace in creation order
    pub fn list(&self) -> Vec<WorkspaceSummary> {
        lock(&self.workspaces)
            .iter()
            .map(|(id, workspace)| {
                let workspace = lock(workspace);
                WorkspaceSummary {
                    id: id.clone(),
                    name: workspace.name.clone(),
                    shape_count: workspace.shapes.len(),
                }
            })
            .collect()
    }

    /// Removes every shape; the workspace itself remains
    ///
    /// # Errors
    ///
    /// Returns [`GridsketchError::WorkspaceNotFound`] for an unknown workspace.
    pub fn clear(&self, workspace_id: &str) -> Result<(), GridsketchError> {
        let workspace = self.workspace(workspace_id)?;
        lock(&workspace).shapes.clear();
        info!(workspace = workspace_id; "Cleared workspace");
        Ok(())
    }
}

fn shape_not_found(workspace: &str, shape: &str) -> GridsketchError {
    GridsketchError::ShapeNotFound {
        workspace: workspace.to_string(),
        shape: shape.to_string(),
    }
}

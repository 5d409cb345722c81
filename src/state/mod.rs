// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor state management.
//!
//! The state holds at most one project. It only ever changes by running an
//! [`Action`] through [`reduce`], which builds a new state and leaves the
//! old one intact.

pub mod action;
pub mod reducer;
pub mod store;

pub use action::Action;
pub use reducer::reduce;
pub use store::ProjectStore;

use crate::models::project::Project;
use std::sync::Arc;

/// Snapshot of the editor: either no project or one loaded project.
#[derive(Debug, Clone, Default)]
pub struct ProjectState {
    pub project: Option<Arc<Project>>,
}

impl ProjectState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(project: Project) -> Self {
        Self {
            project: Some(Arc::new(project)),
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.project.is_some()
    }

    /// True when both states are the same snapshot, not merely equal ones.
    pub fn ptr_eq(&self, other: &ProjectState) -> bool {
        match (&self.project, &other.project) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

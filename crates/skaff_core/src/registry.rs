//! Step registry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::step::Step;

/// Maps step names to their implementations.
#[derive(Default)]
pub struct StepRegistry {
    steps: HashMap<String, Arc<dyn Step>>,
}

impl StepRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            steps: HashMap::new(),
        }
    }

    /// Register a step under its `name()`, replacing any previous one.
    pub fn register(&mut self, step: Arc<dyn Step>) {
        let name = step.name().to_string();
        debug!("Registering step: {}", name);
        self.steps.insert(name, step);
    }

    /// Get a step by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Step>> {
        self.steps.get(name).cloned()
    }

    /// Get a step by name, returning an error if not found.
    pub fn get_required(&self, name: &str) -> CoreResult<Arc<dyn Step>> {
        self.get(name)
            .ok_or_else(|| CoreError::StepNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.steps.contains_key(name)
    }

    /// Get all registered step names.
    pub fn names(&self) -> Vec<&str> {
        self.steps.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("steps", &self.steps.keys().collect::<Vec<_>>())
            .finish()
    }
}

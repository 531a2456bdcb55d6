//! Field-filter registry
//!
//! The host application pipes field text through named template filters
//! (`{{marked:Front}}`, `{{unmarked:Front}}`). Instead of ambient hook
//! lists, filters are registered explicitly: the registry maps a filter
//! name to a [`FieldFilter`], and applying an unregistered name returns the
//! field text unchanged, exactly how a template filter chain treats names
//! it does not own.

use std::collections::HashMap;
use std::sync::Arc;

use crate::engine::MarkupEngine;
use crate::error::InvalidMarkup;

/// A named transformation applied to a field's text.
pub trait FieldFilter: Send + Sync {
    /// The filter name, as written in the template (`marked`, `unmarked`).
    fn name(&self) -> &str;

    /// Transform the field text.
    fn apply(&self, field_text: &str) -> Result<String, InvalidMarkup>;
}

/// Registry of field filters.
pub struct FilterRegistry {
    filters: HashMap<String, Box<dyn FieldFilter>>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FilterRegistry {
            filters: HashMap::new(),
        }
    }

    /// Create a registry with the two standard filters: `marked` (render
    /// markup into spans) and `unmarked` (strip markup).
    pub fn with_defaults(engine: MarkupEngine) -> Self {
        let engine = Arc::new(engine);
        let mut registry = Self::new();
        registry.register(RenderFilter {
            engine: Arc::clone(&engine),
        });
        registry.register(UnmarkFilter { engine });
        registry
    }

    /// Register a filter. A filter with the same name is replaced.
    pub fn register<F: FieldFilter + 'static>(&mut self, filter: F) {
        self.filters
            .insert(filter.name().to_string(), Box::new(filter));
    }

    /// Check whether a filter name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// List registered filter names (sorted).
    pub fn list_filters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.filters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Apply the named filter to `field_text`.
    ///
    /// Unregistered names leave the text unchanged. `InvalidMarkup` is
    /// surfaced to the caller, which should keep the original text and
    /// report the message.
    pub fn apply(&self, name: &str, field_text: &str) -> Result<String, InvalidMarkup> {
        match self.filters.get(name) {
            Some(filter) => filter.apply(field_text),
            None => Ok(field_text.to_string()),
        }
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `{{marked:Field}}`: render markup into classed spans.
struct RenderFilter {
    engine: Arc<MarkupEngine>,
}

impl FieldFilter for RenderFilter {
    fn name(&self) -> &str {
        "marked"
    }

    fn apply(&self, field_text: &str) -> Result<String, InvalidMarkup> {
        self.engine.render(field_text)
    }
}

/// `{{unmarked:Field}}`: strip all markup.
struct UnmarkFilter {
    engine: Arc<MarkupEngine>,
}

impl FieldFilter for UnmarkFilter {
    fn name(&self) -> &str {
        "unmarked"
    }

    fn apply(&self, field_text: &str) -> Result<String, InvalidMarkup> {
        self.engine.unmark(field_text)
    }
}

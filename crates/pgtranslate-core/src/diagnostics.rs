//! Diagnostics handle passed to translators alongside each call-site.

use std::fmt;

/// Log target used for query translation diagnostics.
pub const QUERY: &str = "pgtranslate::query";

/// A logger scoped to a diagnostics category.
///
/// Records go through the [`log`] facade with the category as target, so
/// the host chooses the backend and filters per category.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    category: &'static str,
}

impl Logger {
    pub const fn new(category: &'static str) -> Self {
        Self { category }
    }

    /// The query translation logger.
    pub const fn query() -> Self {
        Self::new(QUERY)
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        log::trace!(target: self.category, "{args}");
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        log::debug!(target: self.category, "{args}");
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        log::warn!(target: self.category, "{args}");
    }

    pub fn is_debug_enabled(&self) -> bool {
        log::log_enabled!(target: self.category, log::Level::Debug)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::query()
    }
}

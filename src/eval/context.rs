use tracing::{debug, warn};

use super::error::{ErrorCollector, EvalError, EvalErrors, Location};
use crate::config::EvalConfig;
use crate::expr::{Definition, RootExpr};

/// Evaluation context
///
/// Holds the stack of definitions under construction, the finished top-level
/// definitions and the errors reported so far. Every design is evaluated
/// with its own context; DSL functions receive it explicitly.
///
/// ```text
/// service("calc")          stack: [service]
///   endpoint("add")        stack: [service, endpoint]
///     payload              stack: [service, endpoint, attribute]
///       metadata(...)      applies to the attribute on top
/// ```
pub struct EvalContext {
    config: EvalConfig,
    stack: Vec<Definition>,
    root: RootExpr,
    errors: ErrorCollector,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalContext {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            errors: ErrorCollector::with_limit(config.error_limit),
            config,
            stack: Vec::new(),
            root: RootExpr::default(),
        }
    }

    /// Definition currently under construction, `None` at the top level.
    pub fn current(&self) -> Option<&Definition> {
        self.stack.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Definition> {
        self.stack.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_top_level(&self) -> bool {
        self.stack.is_empty()
    }

    /// Run `dsl` with `definition` as the current definition and hand the
    /// definition back once the DSL returns.
    ///
    /// Returns `None` without running `dsl` when the definition would nest
    /// deeper than the configured maximum.
    #[track_caller]
    pub fn execute<F>(&mut self, definition: Definition, dsl: F) -> Option<Definition>
    where
        F: FnOnce(&mut EvalContext),
    {
        if self.stack.len() >= self.config.max_depth {
            let error = EvalError::nesting_too_deep(
                definition.kind().to_string(),
                self.config.max_depth,
                Location::caller(),
            );
            self.report_error(error);
            return None;
        }

        debug!(
            kind = %definition.kind(),
            name = definition.name(),
            depth = self.stack.len(),
            "enter definition"
        );
        self.stack.push(definition);
        dsl(self);
        let definition = self.stack.pop();
        if let Some(definition) = &definition {
            debug!(kind = %definition.kind(), name = definition.name(), "leave definition");
        }
        definition
    }

    pub fn report_error(&mut self, error: EvalError) {
        warn!(%error, "design error");
        self.errors.add_error(error);
    }

    /// Report a DSL function called where it does not apply.
    pub fn incompatible_dsl(&mut self, dsl: &str, location: Location) {
        let scope = self.scope_description();
        self.report_error(EvalError::incompatible_context(dsl, scope, location));
    }

    fn scope_description(&self) -> String {
        match self.current() {
            Some(definition) => format!("{} {:?}", definition.kind(), definition.name()),
            None => "the top-level scope".to_string(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn errors(&self) -> &[EvalError] {
        self.errors.errors()
    }

    pub fn root(&self) -> &RootExpr {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut RootExpr {
        &mut self.root
    }

    /// Finish the evaluation: the design root, or every error reported.
    pub fn finish(mut self) -> Result<RootExpr, EvalErrors> {
        if self.errors.has_errors() {
            Err(self.errors.take())
        } else {
            Ok(self.root)
        }
    }
}

pub mod context;
pub mod error;

pub use context::EvalContext;
pub use error::{ErrorCollector, EvalError, EvalErrors, Location};

use crate::config::EvalConfig;
use crate::expr::RootExpr;

/// Evaluate a design with the default configuration.
///
/// Every DSL call inside `dsl` runs against a fresh [`EvalContext`]. Errors
/// do not stop the evaluation; they are returned together once `dsl`
/// completes.
pub fn run_dsl<F>(dsl: F) -> Result<RootExpr, EvalErrors>
where
    F: FnOnce(&mut EvalContext),
{
    run_dsl_with_config(EvalConfig::default(), dsl)
}

pub fn run_dsl_with_config<F>(config: EvalConfig, dsl: F) -> Result<RootExpr, EvalErrors>
where
    F: FnOnce(&mut EvalContext),
{
    let mut ctx = EvalContext::with_config(config);
    dsl(&mut ctx);
    ctx.finish()
}

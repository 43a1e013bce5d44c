//! DR Plan Engine - deterministic planning tools.
//!
//! Three pure modules, each a synchronous function from a request value to a
//! result value with no I/O and no shared state:
//!
//! - [`strategy`]: maps a four-field planning request to one of six canned
//!   backup-strategy recommendations (priority-ordered categorical tree)
//! - [`risk`]: the 5×5 impact/likelihood matrix, composite scoring over a
//!   scenario checklist, and recommendation text generation
//! - [`cost`]: monthly/yearly cost estimation from closed lookup tables
//!
//! Every input combination maps to exactly one output; same input, same
//! output.

pub mod cost;
pub mod risk;
pub mod strategy;

// Re-export the entry points at crate root for convenience
pub use cost::{estimate, CostEstimate, CostRequest};
pub use risk::{classify, composite, recommendations, scenarios, RiskInput, RiskLevel};
pub use strategy::{recommend, StrategyPlan, StrategyRequest};

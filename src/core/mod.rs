// Core algorithm exports
pub mod engine;
pub mod filters;

pub use engine::{MatchEngine, MatchError};
pub use filters::{has_prior_interaction, matches_preferences};

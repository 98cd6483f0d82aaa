// Core algorithm exports
pub mod error;
pub mod matcher;
pub mod roster;
pub mod scoring;

pub use error::PairingError;
pub use matcher::{weighted_index, Matcher, DEFAULT_WEIGHT_FLOOR};
pub use roster::{apply_exclusions, Planner};
pub use scoring::{calculate_pair_score, score_all, topic_contribution};

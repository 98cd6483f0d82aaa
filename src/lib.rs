//! Workshop Pairs - score-biased random pairing for pair programming workshops
//!
//! Participants rate themselves per topic (`none`, `ok`, `preferred`). Every
//! pair gets a compatibility score, and pairs are then drawn at random with
//! higher-scoring pairs more likely, until fewer than two people are left.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{score_all, Matcher, PairingError, Planner};
pub use models::{Pairing, PairScores, Participant, Proficiency, Roster};

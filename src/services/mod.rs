// Service exports
pub mod roster_file;

pub use roster_file::{load_roster, parse_roster, RosterFileError};

//! Request orchestration on top of the domain and repos layers.

pub mod admin;
pub mod leaderboard;
pub mod play;
pub mod stats;
pub mod users;
pub mod words;

//! SeaORM adapters. Functions here speak `DbErr`; the repos layer maps to
//! `DomainError`.

pub mod games_sea;
pub mod guesses_sea;
pub mod users_sea;
pub mod words_sea;

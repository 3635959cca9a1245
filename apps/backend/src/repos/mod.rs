//! Repository functions for the domain layer (generic over `ConnectionTrait`,
//! returning `DomainError`).

pub mod games;
pub mod guesses;
pub mod users;
pub mod words;

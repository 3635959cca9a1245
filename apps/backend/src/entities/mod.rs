pub mod games;
pub mod guesses;
pub mod user_credentials;
pub mod users;
pub mod words;

pub use games::Entity as Games;
pub use games::Model as GameRecord;
pub use guesses::Entity as Guesses;
pub use guesses::Model as Guess;
pub use user_credentials::Entity as UserCredentials;
pub use user_credentials::Model as UserCredential;
pub use users::Entity as Users;
pub use users::Model as User;
pub use words::Entity as Words;
pub use words::Model as WordRow;

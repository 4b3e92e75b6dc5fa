use thiserror::Error;

/// Represents all the ways a method can fail within the catalog Postgres stores.
#[derive(Error, Debug)]
pub enum Error {
    /// Error returned from the database.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

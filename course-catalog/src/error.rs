use crate::BoxDynError;

/// Represents all the ways a catalog operation can fail.
///
/// A missing category or course is not an error: it is returned as `None`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied argument was rejected before reaching the store.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    /// The store could not complete the query.
    #[error("store error during {operation}: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: BoxDynError,
    },
}

impl Error {
    pub(crate) fn store<E>(operation: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store {
            operation,
            source: Box::new(source),
        }
    }

    /// Returns a message that can be shown to the caller.
    ///
    /// Store failures are reported as a generic message so that internal details
    /// are not leaked.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidArgument { .. } => self.to_string(),
            Self::Store { .. } => "internal error".to_string(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

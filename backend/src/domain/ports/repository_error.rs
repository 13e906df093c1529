//! Error type shared by every record repository port.

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Failures raised by repository adapters.
    pub enum RepositoryError {
        /// No backing store is configured.
        Unavailable => "record store unavailable",
        /// The store could not be reached.
        Connection => "record store connection failed",
        /// A query or mutation failed during execution.
        Query => "record store query failed",
    }
}

impl RepositoryError {
    /// Whether the failure means the store cannot currently serve requests.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Connection { .. })
    }
}

impl From<RepositoryError> for Error {
    fn from(error: RepositoryError) -> Self {
        let detail = error.message();
        if error.is_unavailable() {
            Error::service_unavailable(format!("record store unavailable: {detail}"))
        } else {
            Error::internal(format!("record store error: {detail}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(RepositoryError::unavailable("no database url"), true)]
    #[case(RepositoryError::connection("refused"), true)]
    #[case(RepositoryError::query("syntax"), false)]
    fn classifies_availability(#[case] err: RepositoryError, #[case] expected: bool) {
        assert_eq!(err.is_unavailable(), expected);
    }

    #[rstest]
    #[case(RepositoryError::unavailable("no database url"), ErrorCode::ServiceUnavailable)]
    #[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(RepositoryError::query("syntax"), ErrorCode::InternalError)]
    fn maps_to_domain_error(#[case] err: RepositoryError, #[case] expected: ErrorCode) {
        assert_eq!(Error::from(err).code(), expected);
    }
}

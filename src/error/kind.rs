//! Error kind enumeration for categorizing client errors.

/// Categorization of client errors.
///
/// A non-2xx HTTP status is **not** an error: the admin API signals
/// application-level outcomes (404 for a missing realm, 409 for a duplicate
/// user) through the status code of an otherwise successful exchange, and
/// callers inspect it via [`Response::status`](crate::Response::status).
///
/// | ErrorKind         | Raised when                                         |
/// |-------------------|-----------------------------------------------------|
/// | `Configuration`   | Base URL is malformed or lacks a trailing `/`       |
/// | `InvalidRequest`  | Relative path cannot be joined or request built     |
/// | `Serialization`   | Request body cannot be encoded as JSON              |
/// | `InvalidArgument` | A required identifier is missing on a record        |
/// | `Unauthorized`    | The bearer token source failed or is unusable       |
/// | `Connection`      | DNS, TLS handshake, or connect failure              |
/// | `Timeout`         | The configured per-request timeout elapsed          |
/// | `Transport`       | Any other failure while exchanging the request      |
/// | `Decode`          | Response body is not valid JSON for the target type |
/// | `Unsupported`     | The operation is deliberately not offered           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid client configuration (malformed base URL, missing trailing slash).
    #[error("configuration error")]
    Configuration,

    /// The request could not be constructed (URL join or request build failure).
    #[error("invalid request")]
    InvalidRequest,

    /// The request body could not be serialized to JSON.
    #[error("serialization error")]
    Serialization,

    /// A caller-supplied argument violates a precondition.
    ///
    /// Raised before anything is sent, e.g. `update` on a record whose
    /// identifier is `None`.
    #[error("invalid argument")]
    InvalidArgument,

    /// The bearer token could not be obtained or encoded as a header.
    #[error("unauthorized")]
    Unauthorized,

    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// The request exceeded the configured timeout.
    #[error("timeout")]
    Timeout,

    /// Any other transport-level failure.
    #[error("transport error")]
    Transport,

    /// The response body could not be decoded into the requested type.
    #[error("decode error")]
    Decode,

    /// The operation is intentionally not supported by this client.
    #[error("unsupported operation")]
    Unsupported,
}

impl ErrorKind {
    /// Returns `true` if the failure happened before anything was sent.
    ///
    /// ```rust
    /// use keycloak_admin::ErrorKind;
    ///
    /// assert!(ErrorKind::Configuration.is_local());
    /// assert!(!ErrorKind::Connection.is_local());
    /// ```
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ErrorKind::Configuration
                | ErrorKind::InvalidRequest
                | ErrorKind::Serialization
                | ErrorKind::InvalidArgument
                | ErrorKind::Unsupported
        )
    }

    /// Returns `true` if the failure came from the network exchange itself.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connection | ErrorKind::Timeout | ErrorKind::Transport
        )
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(ErrorKind::Configuration, "configuration error")]
    #[test_case(ErrorKind::InvalidRequest, "invalid request")]
    #[test_case(ErrorKind::Serialization, "serialization error")]
    #[test_case(ErrorKind::InvalidArgument, "invalid argument")]
    #[test_case(ErrorKind::Unauthorized, "unauthorized")]
    #[test_case(ErrorKind::Connection, "connection error")]
    #[test_case(ErrorKind::Timeout, "timeout")]
    #[test_case(ErrorKind::Transport, "transport error")]
    #[test_case(ErrorKind::Decode, "decode error")]
    #[test_case(ErrorKind::Unsupported, "unsupported operation")]
    fn test_display(kind: ErrorKind, expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_local_and_transport_are_disjoint() {
        let kinds = [
            ErrorKind::Configuration,
            ErrorKind::InvalidRequest,
            ErrorKind::Serialization,
            ErrorKind::InvalidArgument,
            ErrorKind::Unauthorized,
            ErrorKind::Connection,
            ErrorKind::Timeout,
            ErrorKind::Transport,
            ErrorKind::Decode,
            ErrorKind::Unsupported,
        ];
        for kind in kinds {
            assert!(!(kind.is_local() && kind.is_transport()), "{kind:?}");
        }
    }

    #[test]
    fn test_decode_is_neither_local_nor_transport() {
        assert!(!ErrorKind::Decode.is_local());
        assert!(!ErrorKind::Decode.is_transport());
    }
}

use thiserror::Error;

/// Everything a request can die of, per failure class. The classes are
/// handled identically at the UI boundary (caught, logged, surfaced as a
/// message) and none is retried; the split exists so messages stay honest
/// about what actually happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure: the request never produced a usable response.
    #[error("Could not reach the server. Please try again.")]
    Network(String),

    /// The server answered with `status: false`; carries its message.
    #[error("{0}")]
    Rejected(String),

    /// Non-2xx response without a readable envelope.
    #[error("The server returned an unexpected error (HTTP {0}).")]
    Http(u16),

    /// The body did not match the expected contract.
    #[error("Received an unexpected response from the server.")]
    Decode(String),
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for UPN.

use thiserror::Error;

/// Outcome of a single backend round trip that did not succeed.
///
/// Every backend call resolves to `Ok(value)` or exactly one of these, so
/// callers match exhaustively instead of inferring failure from control flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {0}")]
    Http(u16),

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(code) => Some(*code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Result of one backend call.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for all UPN operations.
#[derive(Debug, Error)]
pub enum UpnError {
    // -- Backend --
    #[error(transparent)]
    Api(#[from] ApiError),

    // -- Configuration / input --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    Validation(String),

    // -- Rendering --
    #[error("image decoding failed: {0}")]
    Image(String),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Misc --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, UpnError>;

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use circular_api::ApiError;

/// Errors raised by the Circular core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The event service call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No credential is stored for a request that needs one.
    #[error("Unauthorized: please log in again")]
    Unauthorized,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

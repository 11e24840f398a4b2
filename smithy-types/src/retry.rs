/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of modeled service errors.
//!
//! Only the classification lives here. Deciding whether and when to retry belongs to the
//! transport layer that sends requests.

use std::fmt;

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum ErrorKind {
    /// This is a connection level error such as a socket timeout, socket connect error,
    /// tls negotiation timeout etc...
    ///
    /// Modeled errors are never transient; transport implementations produce this kind
    /// for their own failures.
    TransientError,

    /// An error where the server explicitly told the client to back off, such as a 429 or 503 HTTP error.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but is considered by the client
    /// to be something that should be retried.
    ServerError,

    /// The request was wrong and sending it again unchanged will fail the same way.
    ClientError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::TransientError => "transient error",
            ErrorKind::ThrottlingError => "throttling error",
            ErrorKind::ServerError => "server error",
            ErrorKind::ClientError => "client error",
        })
    }
}

/// Classifies an error so callers can decide whether to retry it.
pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled and the error kind
    /// depends on an HTTP status code), return `None`.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors the service models for its operations.
//!
//! Each error is an ordinary shape carrying the service's message. [`ServiceError`] holds any
//! one of them.

use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use smithy_types::shape;
use std::error::Error;
use std::fmt;

/// Implements `Error` and `ProvideErrorKind` for an error shape. The error code is the shape name.
macro_rules! modeled_error {
    ($name:ident, $kind:expr) => {
        impl $name {
            pub const CODE: &'static str = stringify!($name);
        }

        impl Error for $name {}

        impl ProvideErrorKind for $name {
            fn error_kind(&self) -> Option<ErrorKind> {
                Some($kind)
            }

            fn code(&self) -> Option<&str> {
                Some(Self::CODE)
            }
        }

        impl From<$name> for ServiceError {
            fn from(err: $name) -> Self {
                ServiceError::$name(err)
            }
        }
    };
}

shape! {
    /// The request was malformed, eg. a missing required member or an invalid value.
    pub struct BadRequestException in bad_request_exception {
        "message" => message: scalar String { set_message, get_message },
    }
}
modeled_error!(BadRequestException, ErrorKind::ClientError);

shape! {
    /// The request conflicts with the current state of a resource.
    pub struct ConflictException in conflict_exception {
        "message" => message: scalar String { set_message, get_message },
    }
}
modeled_error!(ConflictException, ErrorKind::ClientError);

shape! {
    /// An account quota was exceeded.
    pub struct LimitExceededException in limit_exceeded_exception {
        /// Seconds to wait before trying again, as sent in the `Retry-After` header.
        "retryAfterSeconds" => retry_after_seconds: scalar String { set_retry_after_seconds, get_retry_after_seconds },
        "message" => message: scalar String { set_message, get_message },
    }
}
modeled_error!(LimitExceededException, ErrorKind::ThrottlingError);

shape! {
    /// The resource named in the request doesn't exist.
    pub struct NotFoundException in not_found_exception {
        "message" => message: scalar String { set_message, get_message },
    }
}
modeled_error!(NotFoundException, ErrorKind::ClientError);

shape! {
    /// The service couldn't handle the request right now.
    pub struct ServiceUnavailableException in service_unavailable_exception {
        "retryAfterSeconds" => retry_after_seconds: scalar String { set_retry_after_seconds, get_retry_after_seconds },
        "message" => message: scalar String { set_message, get_message },
    }
}
modeled_error!(ServiceUnavailableException, ErrorKind::ServerError);

shape! {
    /// The request rate limit was exceeded.
    pub struct TooManyRequestsException in too_many_requests_exception {
        "retryAfterSeconds" => retry_after_seconds: scalar String { set_retry_after_seconds, get_retry_after_seconds },
        "message" => message: scalar String { set_message, get_message },
    }
}
modeled_error!(TooManyRequestsException, ErrorKind::ThrottlingError);

shape! {
    /// The request was not signed or the caller isn't allowed to make it.
    pub struct UnauthorizedException in unauthorized_exception {
        "message" => message: scalar String { set_message, get_message },
    }
}
modeled_error!(UnauthorizedException, ErrorKind::ClientError);

/// Any error the service models.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    BadRequestException(BadRequestException),
    ConflictException(ConflictException),
    LimitExceededException(LimitExceededException),
    NotFoundException(NotFoundException),
    ServiceUnavailableException(ServiceUnavailableException),
    TooManyRequestsException(TooManyRequestsException),
    UnauthorizedException(UnauthorizedException),
}

impl ServiceError {
    fn inner(&self) -> &(dyn ProvideErrorKind + 'static) {
        match self {
            ServiceError::BadRequestException(inner) => inner,
            ServiceError::ConflictException(inner) => inner,
            ServiceError::LimitExceededException(inner) => inner,
            ServiceError::NotFoundException(inner) => inner,
            ServiceError::ServiceUnavailableException(inner) => inner,
            ServiceError::TooManyRequestsException(inner) => inner,
            ServiceError::UnauthorizedException(inner) => inner,
        }
    }

    /// The error code, eg. `NotFoundException`.
    pub fn code(&self) -> &str {
        self.inner().code().unwrap_or("Unknown")
    }

    /// The message sent by the service, if there was one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ServiceError::BadRequestException(inner) => inner.message(),
            ServiceError::ConflictException(inner) => inner.message(),
            ServiceError::LimitExceededException(inner) => inner.message(),
            ServiceError::NotFoundException(inner) => inner.message(),
            ServiceError::ServiceUnavailableException(inner) => inner.message(),
            ServiceError::TooManyRequestsException(inner) => inner.message(),
            ServiceError::UnauthorizedException(inner) => inner.message(),
        }
    }

    /// Seconds to wait before retrying, for the errors that carry one.
    pub fn retry_after_seconds(&self) -> Option<&str> {
        match self {
            ServiceError::LimitExceededException(inner) => inner.retry_after_seconds(),
            ServiceError::ServiceUnavailableException(inner) => inner.retry_after_seconds(),
            ServiceError::TooManyRequestsException(inner) => inner.retry_after_seconds(),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.code(), message),
            None => f.write_str(self.code()),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::BadRequestException(inner) => Some(inner),
            ServiceError::ConflictException(inner) => Some(inner),
            ServiceError::LimitExceededException(inner) => Some(inner),
            ServiceError::NotFoundException(inner) => Some(inner),
            ServiceError::ServiceUnavailableException(inner) => Some(inner),
            ServiceError::TooManyRequestsException(inner) => Some(inner),
            ServiceError::UnauthorizedException(inner) => Some(inner),
        }
    }
}

impl ProvideErrorKind for ServiceError {
    fn error_kind(&self) -> Option<ErrorKind> {
        self.inner().error_kind()
    }

    fn code(&self) -> Option<&str> {
        self.inner().code()
    }
}

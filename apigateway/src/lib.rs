/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request, response and error shapes for the Amazon API Gateway control plane.
//!
//! Every shape is built with its builder and read through accessors returning `Option`:
//!
//! ```rust
//! use apigateway::model::{MethodSetting, Stage};
//!
//! let stage = Stage::builder()
//!     .stage_name("prod")
//!     .method_settings(
//!         "GET/*",
//!         MethodSetting::builder().throttling_burst_limit(200),
//!     )
//!     .expect("first entry for this key")
//!     .build();
//! assert_eq!(stage.stage_name(), Some("prod"));
//! assert_eq!(
//!     stage.to_string(),
//!     "{stageName: prod, methodSettings: {GET/*={throttlingBurstLimit: 200}}}"
//! );
//! ```
//!
//! Sending requests is left to a client built on top of this crate.

#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod error;
pub mod input;
pub mod model;
pub mod output;

pub use smithy_types::{Blob, DuplicateKeyError, Instant};

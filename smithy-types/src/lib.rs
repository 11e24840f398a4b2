/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by smithy-rs generated model crates.
//!
//! Model crates declare their shapes with [`shape!`] and their closed string enumerations with
//! [`string_enum!`]. Both templates lean on the [`shape::ShapeValue`] trait, which describes how a
//! single field value is viewed, hashed and rendered.

#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod blob;
pub mod instant;
mod macros;
pub mod retry;
pub mod shape;

pub use crate::blob::Blob;
pub use crate::instant::Instant;
pub use crate::shape::DuplicateKeyError;

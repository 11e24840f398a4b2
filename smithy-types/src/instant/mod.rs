/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamps carried by model shapes.

use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, stored relative to the Unix epoch.
///
/// `subsecond_nanos` is always counted forward from `seconds`, so one and a half seconds
/// before the epoch is `seconds: -2, subsecond_nanos: 500_000_000`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` is rounded to the nearest nanosecond. Values below zero count as zero, and a
    /// fraction that rounds up to a whole second carries into `epoch_seconds`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        // `as` saturates, so negative fractions and NaN become 0
        let nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        Instant::from_secs_and_nanos(epoch_seconds, nanos)
    }

    /// Nanos of a second or more carry into `seconds`. Seconds saturate at the `i64` bounds.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add((subsecond_nanos / NANOS_PER_SECOND) as i64),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Seconds since the epoch, with the fraction kept to the nanosecond.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    /// Like [`Instant::from_f64`], but rounded to the nearest millisecond, the precision the
    /// service sends timestamps with. An `f64` near the current epoch can't hold more than that
    /// exactly, so this is what a decoded JSON number is read with.
    pub fn from_f64_millis(epoch_seconds: f64) -> Self {
        let millis = (epoch_seconds * 1000.0).round() as i64;
        Instant::from_secs_and_nanos(
            millis.div_euclid(1000),
            millis.rem_euclid(1000) as u32 * 1_000_000,
        )
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => Instant {
                        seconds: seconds - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    /// Parses a timestamp written in the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => format::date_time::format(date_time),
                // chrono can't represent this one; keep it readable instead of failing
                None => format::epoch_seconds::format(self),
            },
            Format::EpochSeconds => format::epoch_seconds::format(self),
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

impl crate::shape::ShapeValue for Instant {
    type View<'a> = Instant;

    fn view(&self) -> Instant {
        *self
    }

    fn eq_value(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_value<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(self, state)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Timestamp formats understood by [`Instant::fmt`] and [`Instant::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, eg. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Seconds since the Unix epoch with an optional fraction, eg. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InstantParseErrorKind {
    Invalid(&'static str),
    IntParseError,
}

/// Failed to parse an [`Instant`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantParseError {
    kind: InstantParseErrorKind,
}

impl InstantParseError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self {
            kind: InstantParseErrorKind::Invalid(reason),
        }
    }

    pub(crate) fn int_parse() -> Self {
        Self {
            kind: InstantParseErrorKind::IntParseError,
        }
    }
}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InstantParseErrorKind::Invalid(reason) => write!(f, "invalid timestamp: {}", reason),
            InstantParseErrorKind::IntParseError => {
                write!(f, "invalid timestamp: failed to parse a number")
            }
        }
    }
}

impl Error for InstantParseError {}

#[cfg(feature = "serde-serialize")]
impl serde::Serialize for Instant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.has_nanos() {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.seconds)
        }
    }
}

#[cfg(feature = "serde-deserialize")]
impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EpochSecondsVisitor;

        impl<'de> serde::de::Visitor<'de> for EpochSecondsVisitor {
            type Value = Instant;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a timestamp in epoch seconds")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Instant, E> {
                Ok(Instant::from_epoch_seconds(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Instant, E> {
                i64::try_from(v)
                    .map(Instant::from_epoch_seconds)
                    .map_err(|_| E::custom("epoch seconds out of range"))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Instant, E> {
                if v.is_finite() {
                    Ok(Instant::from_f64_millis(v))
                } else {
                    Err(E::custom("epoch seconds must be finite"))
                }
            }
        }

        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

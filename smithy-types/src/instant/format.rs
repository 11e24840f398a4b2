/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub(super) mod date_time {
    use crate::instant::{InstantParseError, NANOS_PER_SECOND};
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat, Utc};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(in crate::instant) fn format(date_time: DateTime<Utc>) -> String {
        let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        // AutoSi pads to millis/micros/nanos; trailing 0s are trimmed to match other SDKs
        match rfc3339.split_once('.') {
            Some((whole, fraction)) => {
                let fraction = fraction.trim_end_matches('Z').trim_end_matches('0');
                if fraction.is_empty() {
                    format!("{}Z", whole)
                } else {
                    format!("{}.{}Z", whole, fraction)
                }
            }
            None => rfc3339,
        }
    }

    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let parsed = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|_| InstantParseError::invalid("not an RFC 3339 date-time"))?;
        let nanos = parsed.timestamp_subsec_nanos();
        if nanos >= NANOS_PER_SECOND {
            return Err(InstantParseError::invalid("leap seconds are not supported"));
        }
        Ok(Instant::from_secs_and_nanos(parsed.timestamp(), nanos))
    }
}

pub(super) mod epoch_seconds {
    use crate::instant::{InstantParseError, NANOS_PER_SECOND};
    use crate::Instant;

    pub(in crate::instant) fn format(instant: &Instant) -> String {
        let (seconds, nanos) = (instant.seconds, instant.subsecond_nanos);
        if nanos == 0 {
            return format!("{}", seconds);
        }
        // Render the signed value, not the forward-counted nanos
        let (sign, whole, fraction) = if seconds < 0 {
            ("-", -(seconds + 1), NANOS_PER_SECOND - nanos)
        } else {
            ("", seconds, nanos)
        };
        let fraction = format!("{:0>9}", fraction);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let s = s.trim();
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstantParseError::int_parse());
        }
        let whole: i64 = whole.parse().map_err(|_| InstantParseError::int_parse())?;
        let nanos = match fraction {
            None => 0,
            Some(fraction) => {
                if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(InstantParseError::int_parse());
                }
                if fraction.len() > 9 {
                    return Err(InstantParseError::invalid("too much precision"));
                }
                let digits: u32 = fraction
                    .parse()
                    .map_err(|_| InstantParseError::int_parse())?;
                digits * 10_u32.pow(9 - fraction.len() as u32)
            }
        };
        Ok(match (negative, nanos) {
            (false, _) => Instant::from_secs_and_nanos(whole, nanos),
            (true, 0) => Instant::from_epoch_seconds(-whole),
            (true, nanos) => Instant::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
        })
    }
}

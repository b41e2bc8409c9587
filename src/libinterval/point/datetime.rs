// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Point kinds backed by `chrono`, all measured with `TimeDelta`.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeDelta, Utc};

use super::{parse_error, Offset, Point, PointKind, Sign};
use crate::error::Error;

const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl Offset for TimeDelta
{
  fn sign(&self) -> Sign {
    Sign::from(self.cmp(&TimeDelta::zero()))
  }
}

impl Point for DateTime<Utc>
{
  type Offset = TimeDelta;

  const KIND: PointKind = PointKind::Instant;

  fn checked_add(&self, offset: &TimeDelta) -> Option<Self> {
    self.checked_add_signed(*offset)
  }

  fn since(&self, earlier: &Self) -> TimeDelta {
    self.signed_duration_since(earlier)
  }

  fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
  }

  /// Accepts any offset and normalizes it to UTC. Years outside `0000..=9999` carry a sign.
  fn parse_canonical(text: &str) -> Result<Self, Error> {
    text.parse::<DateTime<FixedOffset>>()
      .map(|stamp| stamp.with_timezone(&Utc))
      .map_err(|_| parse_error::<Self>(text))
  }
}

/// Zoned points carry their offset as the zone annotation, `[UTC]` is accepted on input for a zero offset.
impl Point for DateTime<FixedOffset>
{
  type Offset = TimeDelta;

  const KIND: PointKind = PointKind::Zoned;

  fn checked_add(&self, offset: &TimeDelta) -> Option<Self> {
    self.checked_add_signed(*offset)
  }

  fn since(&self, earlier: &Self) -> TimeDelta {
    self.signed_duration_since(earlier)
  }

  fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}[{}]", self.to_rfc3339_opts(SecondsFormat::AutoSi, false), self.offset())
  }

  fn parse_canonical(text: &str) -> Result<Self, Error> {
    let (stamp, zone) = text.strip_suffix(']')
      .and_then(|rest| rest.split_once('['))
      .ok_or_else(|| parse_error::<Self>(text))?;
    let point = stamp.parse::<DateTime<FixedOffset>>()
      .map_err(|_| parse_error::<Self>(text))?;
    let offset = *point.offset();
    let utc_alias = offset.local_minus_utc() == 0 && zone.eq_ignore_ascii_case("utc");
    if utc_alias || zone == offset.to_string() {
      Ok(point)
    }
    else {
      Err(parse_error::<Self>(text))
    }
  }
}

impl Point for NaiveDateTime
{
  type Offset = TimeDelta;

  const KIND: PointKind = PointKind::DateTime;

  fn checked_add(&self, offset: &TimeDelta) -> Option<Self> {
    self.checked_add_signed(*offset)
  }

  fn since(&self, earlier: &Self) -> TimeDelta {
    self.signed_duration_since(*earlier)
  }

  fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format(NAIVE_DATE_TIME_FORMAT))
  }

  fn parse_canonical(text: &str) -> Result<Self, Error> {
    text.parse().map_err(|_| parse_error::<Self>(text))
  }
}

/// Only the whole days of an offset move a date, sub-day offsets leave it unchanged.
impl Point for NaiveDate
{
  type Offset = TimeDelta;

  const KIND: PointKind = PointKind::Date;

  fn checked_add(&self, offset: &TimeDelta) -> Option<Self> {
    self.checked_add_signed(*offset)
  }

  fn since(&self, earlier: &Self) -> TimeDelta {
    self.signed_duration_since(*earlier)
  }

  fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self)
  }

  fn parse_canonical(text: &str) -> Result<Self, Error> {
    text.parse().map_err(|_| parse_error::<Self>(text))
  }
}

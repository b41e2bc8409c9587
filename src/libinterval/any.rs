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

//! Points and intervals whose kind is only known at runtime.
//!
//! [`Interval<P>`](../interval/struct.Interval.html) rules out mixed kinds statically. Text and JSON inputs do not carry a Rust type though, so this module wraps the five supported kinds in [`AnyPoint`](enum.AnyPoint.html) and [`AnyInterval`](enum.AnyInterval.html). The kind of a point is recognized from its canonical text, and every binary operation checks that both operands are of the same kind, failing with `Error::KindMismatch` otherwise.
//!
//! # Examples
//!
//! ```rust
//! use temporal_interval::{AnyInterval, AnyPoint, ErrorKind, PointKind};
//!
//! let years: AnyInterval = "2005-01-01--2025-01-01".parse()?;
//! assert_eq!(years.kind(), PointKind::Date);
//!
//! let noon: AnyPoint = "2010-06-01T12:00:00Z".parse()?;
//! assert_eq!(years.contains(&noon).unwrap_err().kind(), ErrorKind::Type);
//! # Ok::<(), temporal_interval::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::interval::{split_bounds, Interval, RawBounds};
use crate::options::UnionOptions;
use crate::point::{Point, PointKind, YearMonth};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyPoint {
  Instant(DateTime<Utc>),
  Zoned(DateTime<FixedOffset>),
  DateTime(NaiveDateTime),
  Date(NaiveDate),
  YearMonth(YearMonth)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyInterval {
  Instant(Interval<DateTime<Utc>>),
  Zoned(Interval<DateTime<FixedOffset>>),
  DateTime(Interval<NaiveDateTime>),
  Date(Interval<NaiveDate>),
  YearMonth(Interval<YearMonth>)
}

macro_rules! any_kind_impl
{
  ( $( $variant: ident, $point: ty ),* ) =>
  {$(
    impl From<$point> for AnyPoint
    {
      fn from(point: $point) -> AnyPoint {
        AnyPoint::$variant(point)
      }
    }

    impl From<Interval<$point>> for AnyInterval
    {
      fn from(interval: Interval<$point>) -> AnyInterval {
        AnyInterval::$variant(interval)
      }
    }
  )*}
}

any_kind_impl!(
  Instant, DateTime<Utc>,
  Zoned, DateTime<FixedOffset>,
  DateTime, NaiveDateTime,
  Date, NaiveDate,
  YearMonth, YearMonth);

// Runs `$body` with `$inner` bound to the typed point or interval, whatever the kind.
macro_rules! dispatch
{
  ($any: ident, $value: expr, $inner: ident => $body: expr) =>
  {
    match $value {
      $any::Instant($inner) => $body,
      $any::Zoned($inner) => $body,
      $any::DateTime($inner) => $body,
      $any::Date($inner) => $body,
      $any::YearMonth($inner) => $body
    }
  }
}

// Runs `$body` on two operands of the same kind, or fails with a kind mismatch.
macro_rules! zip_kinds
{
  ($left: expr, $right: expr, $right_any: ident, ($a: ident, $b: ident) => $body: expr) =>
  {
    match ($left, $right) {
      (AnyInterval::Instant($a), $right_any::Instant($b)) => Ok($body),
      (AnyInterval::Zoned($a), $right_any::Zoned($b)) => Ok($body),
      (AnyInterval::DateTime($a), $right_any::DateTime($b)) => Ok($body),
      (AnyInterval::Date($a), $right_any::Date($b)) => Ok($body),
      (AnyInterval::YearMonth($a), $right_any::YearMonth($b)) => Ok($body),
      (left, right) => Err(mismatch(left.kind(), right.kind()))
    }
  }
}

fn mismatch(expected: PointKind, found: PointKind) -> Error {
  debug!(%expected, %found, "mixed point kinds");
  Error::KindMismatch { expected, found }
}

impl AnyPoint
{
  pub fn kind(&self) -> PointKind {
    match self {
      AnyPoint::Instant(_) => PointKind::Instant,
      AnyPoint::Zoned(_) => PointKind::Zoned,
      AnyPoint::DateTime(_) => PointKind::DateTime,
      AnyPoint::Date(_) => PointKind::Date,
      AnyPoint::YearMonth(_) => PointKind::YearMonth
    }
  }

  /// Recognizes the kind of a point from the shape of its canonical text.
  pub fn detect_kind(text: &str) -> Result<PointKind, Error> {
    let is_sign = |c: char| c == '+' || c == '-';
    if text.ends_with(']') {
      Ok(PointKind::Zoned)
    }
    else if let Some((_, time)) = text.split_once('T') {
      if time.ends_with('Z') || time.ends_with('z') || time.contains(is_sign) {
        Ok(PointKind::Instant)
      }
      else {
        Ok(PointKind::DateTime)
      }
    }
    else {
      match text.trim_start_matches(is_sign).matches('-').count() {
        1 => Ok(PointKind::YearMonth),
        2 => Ok(PointKind::Date),
        _ => Err(Error::UnsupportedPoint { input: text.to_owned() })
      }
    }
  }
}

impl fmt::Display for AnyPoint
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    dispatch!(AnyPoint, self, point => point.fmt_canonical(f))
  }
}

impl FromStr for AnyPoint
{
  type Err = Error;

  fn from_str(text: &str) -> Result<AnyPoint, Error> {
    match AnyPoint::detect_kind(text)? {
      PointKind::Instant => DateTime::<Utc>::parse_canonical(text).map(AnyPoint::Instant),
      PointKind::Zoned => DateTime::<FixedOffset>::parse_canonical(text).map(AnyPoint::Zoned),
      PointKind::DateTime => NaiveDateTime::parse_canonical(text).map(AnyPoint::DateTime),
      PointKind::Date => NaiveDate::parse_canonical(text).map(AnyPoint::Date),
      PointKind::YearMonth => YearMonth::parse_canonical(text).map(AnyPoint::YearMonth)
    }
  }
}

impl AnyInterval
{
  /// Fails with `Error::KindMismatch` unless both points are of the same kind.
  pub fn new(start: AnyPoint, end: AnyPoint) -> Result<AnyInterval, Error> {
    match (start, end) {
      (AnyPoint::Instant(s), AnyPoint::Instant(e)) => Interval::new(s, e).map(AnyInterval::Instant),
      (AnyPoint::Zoned(s), AnyPoint::Zoned(e)) => Interval::new(s, e).map(AnyInterval::Zoned),
      (AnyPoint::DateTime(s), AnyPoint::DateTime(e)) => Interval::new(s, e).map(AnyInterval::DateTime),
      (AnyPoint::Date(s), AnyPoint::Date(e)) => Interval::new(s, e).map(AnyInterval::Date),
      (AnyPoint::YearMonth(s), AnyPoint::YearMonth(e)) => Interval::new(s, e).map(AnyInterval::YearMonth),
      (start, end) => Err(mismatch(start.kind(), end.kind()))
    }
  }

  pub fn kind(&self) -> PointKind {
    dispatch!(AnyInterval, self, interval => interval.kind())
  }

  pub fn start(&self) -> AnyPoint {
    dispatch!(AnyInterval, self, interval => AnyPoint::from(*interval.start()))
  }

  pub fn end(&self) -> AnyPoint {
    dispatch!(AnyInterval, self, interval => AnyPoint::from(*interval.end()))
  }

  pub fn is_empty(&self) -> bool {
    dispatch!(AnyInterval, self, interval => interval.is_empty())
  }

  pub fn contains(&self, point: &AnyPoint) -> Result<bool, Error> {
    zip_kinds!(self, point, AnyPoint, (a, b) => a.contains(b))
  }

  pub fn equals(&self, other: &AnyInterval) -> Result<bool, Error> {
    zip_kinds!(self, other, AnyInterval, (a, b) => a.equals(b))
  }

  pub fn encloses(&self, other: &AnyInterval) -> Result<bool, Error> {
    zip_kinds!(self, other, AnyInterval, (a, b) => a.encloses(b))
  }

  pub fn overlaps(&self, other: &AnyInterval) -> Result<bool, Error> {
    zip_kinds!(self, other, AnyInterval, (a, b) => a.overlaps(b))
  }

  pub fn intersection(&self, other: &AnyInterval) -> Result<Option<AnyInterval>, Error> {
    zip_kinds!(self, other, AnyInterval, (a, b) => a.intersection(b).map(AnyInterval::from))
  }

  pub fn union(&self, other: &AnyInterval, options: UnionOptions) -> Result<AnyInterval, Error> {
    zip_kinds!(self, other, AnyInterval, (a, b) => a.union(b, options).map(AnyInterval::from))?
  }
}

impl fmt::Display for AnyInterval
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    dispatch!(AnyInterval, self, interval => fmt::Display::fmt(interval, f))
  }
}

impl FromStr for AnyInterval
{
  type Err = Error;

  fn from_str(text: &str) -> Result<AnyInterval, Error> {
    let (start, end) = split_bounds(text)?;
    AnyInterval::new(start.parse()?, end.parse()?)
  }
}

impl Serialize for AnyInterval
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    dispatch!(AnyInterval, self, interval => interval.serialize(serializer))
  }
}

impl<'de> Deserialize<'de> for AnyInterval
{
  fn deserialize<D>(deserializer: D) -> Result<AnyInterval, D::Error> where
   D: Deserializer<'de>
  {
    let raw = RawBounds::deserialize(deserializer)?;
    let start = raw.start.parse().map_err(D::Error::custom)?;
    let end = raw.end.parse().map_err(D::Error::custom)?;
    AnyInterval::new(start, end).map_err(D::Error::custom)
  }
}

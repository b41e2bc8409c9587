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

//! Points in time that an [interval](../interval/index.html) can be built upon.
//!
//! A point is a totally ordered value (`Ord`) which can be moved forward or backward by an [offset](trait.Offset.html), measured against another point of the same kind, and written in a canonical text form. Five kinds are supported out of the box:
//!
//! | Kind | Type | Canonical text |
//! |---|---|---|
//! | instant | `chrono::DateTime<Utc>` | `2005-01-01T00:00:00Z` |
//! | zoned date-time | `chrono::DateTime<FixedOffset>` | `2005-01-01T00:00:00+01:00[+01:00]` |
//! | date-time | `chrono::NaiveDateTime` | `2005-01-01T00:00:00` |
//! | date | `chrono::NaiveDate` | `2005-01-01` |
//! | year-month | [`YearMonth`](struct.YearMonth.html) | `2005-01` |
//!
//! Any other type can take part by implementing [`Point`](trait.Point.html).

mod datetime;
mod year_month;

pub use self::year_month::{MonthDelta, YearMonth};

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// The closed set of point kinds understood by [`AnyPoint`](../any/enum.AnyPoint.html).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointKind {
  Instant,
  Zoned,
  DateTime,
  Date,
  YearMonth
}

impl fmt::Display for PointKind
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      PointKind::Instant => "instant",
      PointKind::Zoned => "zoned date-time",
      PointKind::DateTime => "date-time",
      PointKind::Date => "date",
      PointKind::YearMonth => "year-month"
    };
    f.write_str(name)
  }
}

/// Sign of an offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Negative,
  Zero,
  Positive
}

impl From<Ordering> for Sign
{
  fn from(ordering: Ordering) -> Sign {
    match ordering {
      Ordering::Less => Sign::Negative,
      Ordering::Equal => Sign::Zero,
      Ordering::Greater => Sign::Positive
    }
  }
}

impl fmt::Display for Sign
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Sign::Negative => f.write_str("negative"),
      Sign::Zero => f.write_str("zero"),
      Sign::Positive => f.write_str("positive")
    }
  }
}

/// A signed quantity that can be added to a point.
pub trait Offset : Clone + fmt::Debug
{
  fn sign(&self) -> Sign;
}

/// An ordered moment or calendar unit.
///
/// `Ord` must agree with the kind's own notion of "earlier" and "later". The remaining operations must be consistent with it: for a positive offset `d`, `p.checked_add(&d)` is never smaller than `p`, and `q.since(&p)` is the offset that brings `p` to `q` whenever the kind can represent it exactly.
pub trait Point : Clone + Ord
{
  type Offset: Offset;

  const KIND: PointKind;

  /// Moves this point by `offset`, or `None` if the result leaves the representable range.
  fn checked_add(&self, offset: &Self::Offset) -> Option<Self>;

  /// The offset from `earlier` to `self`.
  fn since(&self, earlier: &Self) -> Self::Offset;

  fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

  fn parse_canonical(text: &str) -> Result<Self, Error>;

  /// A `Display` adaptor over `fmt_canonical`.
  fn canonical(&self) -> Canonical<'_, Self> {
    Canonical(self)
  }
}

/// Displays a point in its canonical text form.
pub struct Canonical<'a, P: ?Sized>(&'a P);

impl<'a, P: Point> fmt::Display for Canonical<'a, P>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt_canonical(f)
  }
}

impl<'a, P: Point> Serialize for Canonical<'a, P>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_str(self)
  }
}

fn parse_error<P: Point>(input: &str) -> Error {
  Error::Parse { kind: P::KIND, input: input.to_owned() }
}

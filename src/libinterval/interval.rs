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

//! Half-open time interval generic over its [point](../point/index.html) kind.
//!
//! An `Interval<P>` is the set of points `p` such that `start <= p < end`. Both bounds share the same kind `P`, so mixing, say, an instant with a calendar date is rejected by the type checker. The only check left to construction is `start <= end`; once built, an interval never changes and the combinators return new intervals.
//!
//! `start == end` is allowed and denotes the empty interval.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{NaiveDate, TimeDelta};
//! use temporal_interval::Interval;
//!
//! let date = |d| NaiveDate::from_ymd_opt(2000, 1, d).unwrap();
//! let week = Interval::new(date(3), date(10))?;
//! assert!(week.contains(&date(3)));
//! assert!(!week.contains(&date(10)));
//!
//! let every_other_day = week.iterate(TimeDelta::days(2))?.collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(every_other_day, vec![date(3), date(5), date(7), date(9)]);
//!
//! assert_eq!(week.to_string(), "2000-01-03--2000-01-10");
//! assert_eq!(week.to_duration(), TimeDelta::days(7));
//! # Ok::<(), temporal_interval::Error>(())
//! ```
//!
//! # See also
//! [any](../any/index.html) when the point kind is only known at runtime.

use std::cmp::{max, min};
use std::fmt;
use std::str::FromStr;

use gcollections::kind::Collection;
use gcollections::ops::{Contains, Disjoint, Intersection, IsEmpty, Overlap, Subset};
use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoundSide, Error};
use crate::iter::Iterate;
use crate::ops::{Adjacent, Hull};
use crate::options::{IterateOptions, UnionOptions};
use crate::point::{Point, PointKind};

/// Separator between the two bounds in the text form of an interval.
pub const DELIMITER: &str = "--";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<P> {
  start: P,
  end: P
}

impl<P: Point> Interval<P>
{
  /// Fails with `Error::StartAfterEnd` if `start > end`.
  pub fn new(start: P, end: P) -> Result<Interval<P>, Error> {
    if start > end {
      debug!(kind = %P::KIND, start = %start.canonical(), end = %end.canonical(), "start is after end");
      return Err(Error::StartAfterEnd {
        start: start.canonical().to_string(),
        end: end.canonical().to_string()
      });
    }
    Ok(Interval { start, end })
  }

  /// The interval from `start` to `start + offset`.
  pub fn with_offset(start: P, offset: P::Offset) -> Result<Interval<P>, Error> {
    let end = start.checked_add(&offset)
      .ok_or(Error::Overflow { kind: P::KIND })?;
    Interval::new(start, end)
  }

  pub fn start(&self) -> &P {
    &self.start
  }

  pub fn end(&self) -> &P {
    &self.end
  }

  pub fn kind(&self) -> PointKind {
    P::KIND
  }

  pub fn into_bounds(self) -> (P, P) {
    (self.start, self.end)
  }

  pub fn is_empty(&self) -> bool {
    self.start == self.end
  }

  /// `start` is contained, `end` is not.
  pub fn contains(&self, point: &P) -> bool {
    self.start <= *point && self.end > *point
  }

  pub fn equals(&self, other: &Interval<P>) -> bool {
    self.start == other.start && self.end == other.end
  }

  /// Is `other` a subset of this interval? Equal bounds enclose, so every interval encloses itself.
  pub fn encloses(&self, other: &Interval<P>) -> bool {
    self.start <= other.start && self.end >= other.end
  }

  /// Do both intervals share a point? Adjacent intervals do not.
  pub fn overlaps(&self, other: &Interval<P>) -> bool {
    let start_inside = self.start >= other.start && self.start < other.end;
    let end_inside = self.end > other.start && self.end <= other.end;
    let around = self.start <= other.start && self.end >= other.end;
    start_inside || end_inside || around
  }

  pub fn is_adjacent(&self, other: &Interval<P>) -> bool {
    self.end == other.start || other.end == self.start
  }

  /// `None` unless the intervals overlap.
  pub fn intersection(&self, other: &Interval<P>) -> Option<Interval<P>> {
    if self.overlaps(other) {
      Some(Interval {
        start: max(&self.start, &other.start).clone(),
        end: min(&self.end, &other.end).clone()
      })
    }
    else {
      None
    }
  }

  pub fn hull(&self, other: &Interval<P>) -> Interval<P> {
    Interval {
      start: min(&self.start, &other.start).clone(),
      end: max(&self.end, &other.end).clone()
    }
  }

  /// The hull of both intervals. A strict union also requires them to overlap or be adjacent.
  pub fn union(&self, other: &Interval<P>, options: UnionOptions) -> Result<Interval<P>, Error> {
    if options.strict && !self.overlaps(other) && !self.is_adjacent(other) {
      debug!(kind = %P::KIND, left = %self, right = %other, "refusing to bridge the gap of a strict union");
      return Err(Error::Disjoint { left: self.to_string(), right: other.to_string() });
    }
    Ok(self.hull(other))
  }

  /// `end.since(start)`, at the granularity of the point kind.
  pub fn to_duration(&self) -> P::Offset {
    self.end.since(&self.start)
  }

  /// The points `start`, `start + step`, ... before `end`.
  ///
  /// Fails right away if `step` is not positive. See [`Iterate`](../iter/struct.Iterate.html) for the behaviour on a step too small to move a point.
  pub fn iterate(&self, step: P::Offset) -> Result<Iterate<P>, Error> {
    self.iterate_with(step, IterateOptions::default())
  }

  pub fn iterate_with(&self, step: P::Offset, options: IterateOptions) -> Result<Iterate<P>, Error> {
    Iterate::new(self.start.clone(), self.end.clone(), step, options)
  }
}

impl<P: Point> fmt::Display for Interval<P>
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}{}", self.start.canonical(), DELIMITER, self.end.canonical())
  }
}

/// Splits the text form of an interval into its two bounds.
pub(crate) fn split_bounds(text: &str) -> Result<(&str, &str), Error> {
  let (start, end) = text.split_once(DELIMITER)
    .ok_or(Error::MissingBound { bound: BoundSide::End })?;
  if start.is_empty() {
    Err(Error::MissingBound { bound: BoundSide::Start })
  }
  else if end.is_empty() {
    Err(Error::MissingBound { bound: BoundSide::End })
  }
  else {
    Ok((start, end))
  }
}

impl<P: Point> FromStr for Interval<P>
{
  type Err = Error;

  fn from_str(text: &str) -> Result<Interval<P>, Error> {
    let (start, end) = split_bounds(text)?;
    Interval::new(P::parse_canonical(start)?, P::parse_canonical(end)?)
  }
}

impl<P: Point> Serialize for Interval<P>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    let mut bounds = serializer.serialize_struct("Interval", 2)?;
    bounds.serialize_field("start", &self.start.canonical())?;
    bounds.serialize_field("end", &self.end.canonical())?;
    bounds.end()
  }
}

/// The structured form of an interval before its bounds are parsed.
#[derive(Deserialize)]
#[serde(rename = "Interval")]
pub(crate) struct RawBounds {
  pub start: String,
  pub end: String
}

impl<'de, P: Point> Deserialize<'de> for Interval<P>
{
  fn deserialize<D>(deserializer: D) -> Result<Interval<P>, D::Error> where
   D: Deserializer<'de>
  {
    let raw = RawBounds::deserialize(deserializer)?;
    let start = P::parse_canonical(&raw.start).map_err(D::Error::custom)?;
    let end = P::parse_canonical(&raw.end).map_err(D::Error::custom)?;
    Interval::new(start, end).map_err(D::Error::custom)
  }
}

impl<P: Point> Collection for Interval<P>
{
  type Item = P;
}

impl<P: Point> Contains for Interval<P>
{
  fn contains(&self, value: &P) -> bool {
    Interval::contains(self, value)
  }
}

impl<P: Point> IsEmpty for Interval<P>
{
  fn is_empty(&self) -> bool {
    Interval::is_empty(self)
  }
}

impl<P: Point> Overlap for Interval<P>
{
  fn overlap(&self, other: &Interval<P>) -> bool {
    self.overlaps(other)
  }
}

impl<P: Point> Disjoint for Interval<P>
{
  fn is_disjoint(&self, other: &Interval<P>) -> bool {
    !self.overlaps(other)
  }
}

impl<P: Point> Subset for Interval<P>
{
  fn is_subset(&self, other: &Interval<P>) -> bool {
    other.encloses(self)
  }
}

impl<P: Point> Intersection for Interval<P>
{
  type Output = Option<Interval<P>>;

  fn intersection(&self, other: &Interval<P>) -> Option<Interval<P>> {
    Interval::intersection(self, other)
  }
}

impl<P: Point> Hull for Interval<P>
{
  type Output = Interval<P>;

  fn hull(&self, other: &Interval<P>) -> Interval<P> {
    Interval::hull(self, other)
  }
}

impl<P: Point> Adjacent for Interval<P>
{
  fn is_adjacent(&self, other: &Interval<P>) -> bool {
    Interval::is_adjacent(self, other)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;
  use crate::point::{MonthDelta, YearMonth};
  use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
  use proptest::prelude::*;
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};

  // The same scenarios run for every point kind, on intervals whose bounds are the first of January of the given years.
  macro_rules! kind_suite
  {
    ($suite: ident, $point: ty, $at: expr, $text: expr) =>
    {
      mod $suite {
        use super::*;

        fn at(year: i32) -> $point {
          ($at)(year)
        }

        fn text(year: i32) -> String {
          ($text)(year)
        }

        fn interval(from: i32, to: i32) -> Interval<$point> {
          Interval::new(at(from), at(to)).unwrap()
        }

        fn outer() -> Interval<$point> { interval(1990, 2040) }
        fn left() -> Interval<$point> { interval(2000, 2010) }
        fn left_adjacent() -> Interval<$point> { interval(2010, 2020) }
        fn center() -> Interval<$point> { interval(2005, 2025) }
        fn right() -> Interval<$point> { interval(2020, 2030) }

        #[test]
        fn start_after_end_test() {
          let err = Interval::new(at(2018), at(2012)).unwrap_err();
          assert_eq!(err.kind(), ErrorKind::Range);
          assert_eq!(err, Error::StartAfterEnd { start: text(2018), end: text(2012) });
        }

        #[test]
        fn contains_test() {
          assert!(!right().contains(&at(2012)));
          assert!(center().contains(&at(2018)));
          assert!(!left().contains(&at(2018)));
          assert!(left().contains(&at(2000)));
          assert!(!left().contains(&at(2010)));
        }

        #[test]
        fn equals_test() {
          assert!(center().equals(&center()));
          assert!(!left().equals(&right()));
          assert_eq!(center(), interval(2005, 2025));
        }

        #[test]
        fn encloses_test() {
          assert!(!left().encloses(&right()));
          assert!(!left().encloses(&center()));
          assert!(!center().encloses(&left()));
          assert!(outer().encloses(&center()));
          assert!(!center().encloses(&outer()));
          assert!(!left().encloses(&left_adjacent()));
          assert!(center().encloses(&center()));
          assert!(outer().encloses(&interval(2000, 2040)));
        }

        #[test]
        fn overlaps_test() {
          assert!(!left().overlaps(&right()));
          assert!(left().overlaps(&center()));
          assert!(center().overlaps(&left()));
          assert!(outer().overlaps(&center()));
          assert!(center().overlaps(&outer()));
          assert!(!left().overlaps(&left_adjacent()));
          assert!(!left_adjacent().overlaps(&left()));
        }

        #[test]
        fn intersection_test() {
          assert_eq!(left().intersection(&center()), Some(interval(2005, 2010)));
          assert_eq!(outer().intersection(&center()), Some(center()));
          assert_eq!(left().intersection(&left_adjacent()), None);
          assert_eq!(left().intersection(&right()), None);
        }

        #[test]
        fn union_test() {
          assert_eq!(left().union(&left_adjacent(), UnionOptions::default()), Ok(interval(2000, 2020)));
          assert_eq!(left().union(&left_adjacent(), UnionOptions::strict()), Ok(interval(2000, 2020)));
          assert_eq!(left_adjacent().union(&left(), UnionOptions::strict()), Ok(interval(2000, 2020)));
          assert_eq!(left().union(&center(), UnionOptions::strict()), Ok(interval(2000, 2025)));
          assert_eq!(left().union(&right(), UnionOptions::default()), Ok(interval(2000, 2030)));
          let err = left().union(&right(), UnionOptions::strict()).unwrap_err();
          assert_eq!(err.kind(), ErrorKind::Range);
          assert_eq!(err, Error::Disjoint { left: left().to_string(), right: right().to_string() });
        }

        #[test]
        fn duration_round_trip_test() {
          let duration = center().to_duration();
          assert_eq!(Interval::with_offset(at(2005), duration), Ok(center()));
        }

        #[test]
        fn encoding_test() {
          let expected = format!("{}--{}", text(2005), text(2025));
          assert_eq!(center().to_string(), expected);
          assert_eq!(expected.parse::<Interval<$point>>(), Ok(center()));
          let json = format!(r#"{{"start":"{}","end":"{}"}}"#, text(2005), text(2025));
          assert_eq!(serde_json::to_string(&center()).unwrap(), json);
          assert_eq!(serde_json::from_str::<Interval<$point>>(&json).unwrap(), center());
        }

        #[test]
        fn signed_year_encoding_test() {
          let wide = interval(-1, 10000);
          let written = wide.to_string();
          assert!(written.starts_with("-0001-01"));
          assert!(written.contains("--+10000-01"));
          assert_eq!(written.parse::<Interval<$point>>(), Ok(wide));
          let json = serde_json::to_string(&wide).unwrap();
          assert_eq!(serde_json::from_str::<Interval<$point>>(&json).unwrap(), wide);
        }
      }
    }
  }

  kind_suite!(instant, DateTime<Utc>,
    |y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap(),
    |y| format!("{}-01-01T00:00:00Z", y));

  kind_suite!(zoned, DateTime<FixedOffset>,
    |y| FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap(),
    |y| format!("{}-01-01T00:00:00+00:00[+00:00]", y));

  kind_suite!(date_time, NaiveDateTime,
    |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
    |y| format!("{}-01-01T00:00:00", y));

  kind_suite!(date, NaiveDate,
    |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap(),
    |y| format!("{}-01-01", y));

  kind_suite!(year_month, YearMonth,
    |y| YearMonth::new(y, 1).unwrap(),
    |y| format!("{}-01", y));

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn instant(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, h, 0, 0).unwrap()
  }

  #[test]
  fn duration_test() {
    let center = Interval::new(date(2005, 1, 1), date(2025, 1, 1)).unwrap();
    assert_eq!(center.to_duration(), TimeDelta::days(7305));
    let center = Interval::new(instant(0), instant(0) + TimeDelta::days(7305)).unwrap();
    assert_eq!(center.to_duration(), TimeDelta::days(7305));
    let center = Interval::new(YearMonth::new(2005, 1).unwrap(), YearMonth::new(2025, 1).unwrap()).unwrap();
    assert_eq!(Some(center.to_duration()), MonthDelta::years(20));
  }

  #[test]
  fn with_offset_test() {
    let hours = Interval::with_offset(instant(1), TimeDelta::hours(5)).unwrap();
    assert_eq!(hours, Interval::new(instant(1), instant(6)).unwrap());
    let err = Interval::with_offset(instant(6), TimeDelta::hours(-5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    let err = Interval::with_offset(NaiveDate::MAX, TimeDelta::days(1)).unwrap_err();
    assert_eq!(err, Error::Overflow { kind: PointKind::Date });
  }

  #[test]
  fn iterate_hours_test() {
    let actual: Vec<_> = Interval::new(instant(1), instant(6)).unwrap()
      .iterate(TimeDelta::hours(1)).unwrap()
      .map(|point| point.unwrap().canonical().to_string())
      .collect();
    assert_eq!(actual, vec![
      "2000-01-01T01:00:00Z",
      "2000-01-01T02:00:00Z",
      "2000-01-01T03:00:00Z",
      "2000-01-01T04:00:00Z",
      "2000-01-01T05:00:00Z"]);
  }

  #[test]
  fn iterate_end_inclusive_test() {
    let actual: Vec<_> = Interval::new(instant(1), instant(3)).unwrap()
      .iterate_with(TimeDelta::hours(1), IterateOptions::end_inclusive()).unwrap()
      .collect::<Result<_, Error>>()
      .unwrap();
    assert_eq!(actual, vec![instant(1), instant(2), instant(3)]);
  }

  #[test]
  fn iterate_days_test() {
    let interval = Interval::new(date(2000, 1, 1), date(2000, 1, 6)).unwrap();
    let actual: Vec<_> = interval.iterate(TimeDelta::days(1)).unwrap()
      .collect::<Result<_, Error>>()
      .unwrap();
    assert_eq!(actual, vec![date(2000, 1, 1), date(2000, 1, 2), date(2000, 1, 3), date(2000, 1, 4), date(2000, 1, 5)]);
    // A fresh call starts over.
    assert_eq!(interval.iterate(TimeDelta::days(1)).unwrap().count(), 5);
  }

  #[test]
  fn iterate_invalid_step_test() {
    let interval = Interval::new(instant(1), instant(6)).unwrap();
    assert_eq!(interval.iterate(TimeDelta::zero()).err().map(|e| e.kind()), Some(ErrorKind::Range));
    assert_eq!(interval.iterate(TimeDelta::hours(-1)).err().map(|e| e.kind()), Some(ErrorKind::Range));

    let dates = Interval::new(date(2000, 1, 1), date(2000, 1, 6)).unwrap();
    let err = dates.iterate(TimeDelta::hours(1)).unwrap()
      .collect::<Result<Vec<_>, _>>()
      .unwrap_err();
    assert_eq!(err, Error::Stalled { point: "2000-01-01".into() });
  }

  #[test]
  fn empty_interval_test() {
    let empty = Interval::new(date(2000, 1, 1), date(2000, 1, 1)).unwrap();
    assert!(empty.is_empty());
    assert!(!empty.contains(&date(2000, 1, 1)));
    assert_eq!(empty.iterate(TimeDelta::days(1)).unwrap().count(), 0);
    assert_eq!(empty.to_duration(), TimeDelta::zero());
  }

  #[test]
  fn accessors_test() {
    let interval = Interval::new(date(2000, 1, 1), date(2000, 2, 1)).unwrap();
    assert_eq!(interval.start(), &date(2000, 1, 1));
    assert_eq!(interval.end(), &date(2000, 2, 1));
    assert_eq!(interval.kind(), PointKind::Date);
    assert_eq!(interval.into_bounds(), (date(2000, 1, 1), date(2000, 2, 1)));
  }

  #[test]
  fn parse_errors_test() {
    assert_eq!("2005-01-01--".parse::<Interval<NaiveDate>>(),
      Err(Error::MissingBound { bound: BoundSide::End }));
    assert_eq!("--2005-01-01".parse::<Interval<NaiveDate>>(),
      Err(Error::MissingBound { bound: BoundSide::Start }));
    assert_eq!("2005-01-01".parse::<Interval<NaiveDate>>().map_err(|e| e.kind()),
      Err(ErrorKind::MissingArgument));
    assert_eq!("2005-01--2025-01".parse::<Interval<NaiveDate>>().map_err(|e| e.kind()),
      Err(ErrorKind::Type));
    assert_eq!("2025-01-01--2005-01-01".parse::<Interval<NaiveDate>>().map_err(|e| e.kind()),
      Err(ErrorKind::Range));
  }

  #[test]
  fn negative_years_parse_test() {
    let interval = Interval::new(YearMonth::new(-2, 1).unwrap(), YearMonth::new(-1, 1).unwrap()).unwrap();
    assert_eq!(interval.to_string(), "-0002-01---0001-01");
    assert_eq!(interval.to_string().parse::<Interval<YearMonth>>(), Ok(interval));
  }

  #[test]
  fn serde_tokens_test() {
    let center = Interval::new(date(2005, 1, 1), date(2025, 1, 1)).unwrap();
    assert_tokens(&center, &[
      Token::Struct { name: "Interval", len: 2 },
      Token::Str("start"),
      Token::Str("2005-01-01"),
      Token::Str("end"),
      Token::Str("2025-01-01"),
      Token::StructEnd
    ]);
  }

  #[test]
  fn serde_rejects_reversed_bounds_test() {
    assert_de_tokens_error::<Interval<NaiveDate>>(&[
      Token::Struct { name: "Interval", len: 2 },
      Token::Str("start"),
      Token::Str("2025-01-01"),
      Token::Str("end"),
      Token::Str("2005-01-01"),
      Token::StructEnd
    ], "start 2025-01-01 may not be greater than end 2005-01-01");
  }

  #[test]
  fn serde_rejects_missing_bound_test() {
    assert_de_tokens_error::<Interval<NaiveDate>>(&[
      Token::Struct { name: "Interval", len: 1 },
      Token::Str("start"),
      Token::Str("2005-01-01"),
      Token::StructEnd
    ], "missing field `end`");
  }

  fn gcollections_view<S>(a: &S, b: &S) -> (bool, bool, bool) where
   S: Overlap + Disjoint + Subset
  {
    (a.overlap(b), a.is_disjoint(b), a.is_subset(b))
  }

  #[test]
  fn gcollections_test() {
    let outer = Interval::new(date(1990, 1, 1), date(2040, 1, 1)).unwrap();
    let center = Interval::new(date(2005, 1, 1), date(2025, 1, 1)).unwrap();
    assert_eq!(gcollections_view(&center, &outer), (true, false, true));
    assert_eq!(gcollections_view(&outer, &center), (true, false, false));
    assert!(Contains::contains(&center, &date(2010, 6, 1)));
    assert!(!IsEmpty::is_empty(&center));
    assert_eq!(Intersection::intersection(&center, &outer), Some(center));
    assert_eq!(Hull::hull(&center, &outer), outer);
    assert!(!Adjacent::is_adjacent(&center, &outer));
  }

  fn date_interval() -> impl Strategy<Value = Interval<NaiveDate>> {
    (0i64..400, 0i64..60).prop_map(|(offset, length)| {
      let start = date(2000, 1, 1) + TimeDelta::days(offset);
      Interval::new(start, start + TimeDelta::days(length)).unwrap()
    })
  }

  proptest! {
    #[test]
    fn overlap_is_symmetric(a in date_interval(), b in date_interval()) {
      prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn equality_laws(a in date_interval(), b in date_interval(), c in date_interval()) {
      prop_assert!(a.equals(&a));
      prop_assert_eq!(a.equals(&b), b.equals(&a));
      if a.equals(&b) && b.equals(&c) {
        prop_assert!(a.equals(&c));
      }
    }

    #[test]
    fn bounds_membership(a in date_interval()) {
      prop_assert!(a.encloses(&a));
      prop_assert!(!a.contains(a.end()));
      prop_assert_eq!(a.contains(a.start()), !a.is_empty());
    }

    #[test]
    fn intersection_within_both(a in date_interval(), b in date_interval()) {
      match a.intersection(&b) {
        Some(common) => {
          prop_assert!(a.encloses(&common) && b.encloses(&common));
          prop_assert_eq!(Some(common), b.intersection(&a));
        }
        None => prop_assert!(!a.overlaps(&b))
      }
    }

    #[test]
    fn union_covers_both(a in date_interval(), b in date_interval()) {
      let hull = a.union(&b, UnionOptions::default()).unwrap();
      prop_assert!(hull.encloses(&a) && hull.encloses(&b));
      let strict = a.union(&b, UnionOptions::strict());
      prop_assert_eq!(strict.is_ok(), a.overlaps(&b) || a.is_adjacent(&b));
    }

    #[test]
    fn duration_round_trip(a in date_interval()) {
      prop_assert_eq!(Interval::with_offset(a.start().clone(), a.to_duration()), Ok(a));
    }
  }
}

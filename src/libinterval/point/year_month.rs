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

//! Calendar months of the proleptic Gregorian calendar.
//!
//! `chrono` has no year-month type, so this module provides one together with its offset, [`MonthDelta`](struct.MonthDelta.html). Both are thin wrappers around a month count: a `YearMonth` is ordered by year then month, which is exactly the order of its month index `year * 12 + (month - 1)`.

use std::convert::TryFrom;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use num_integer::Integer;

use super::{parse_error, Offset, Point, PointKind, Sign};
use crate::error::Error;

/// A signed number of months.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDelta {
  months: i64
}

impl MonthDelta
{
  pub const fn months(months: i64) -> MonthDelta {
    MonthDelta { months }
  }

  /// `None` when the number of months overflows `i64`.
  pub const fn years(years: i64) -> Option<MonthDelta> {
    match years.checked_mul(12) {
      Some(months) => Some(MonthDelta { months }),
      None => None
    }
  }

  pub const fn count(&self) -> i64 {
    self.months
  }
}

impl Offset for MonthDelta
{
  fn sign(&self) -> Sign {
    Sign::from(self.months.cmp(&0))
  }
}

/// A month of a year, such as `2012-01`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
  year: i32,
  month: u32
}

impl YearMonth
{
  /// Returns `None` unless `month` is in `1..=12`.
  pub fn new(year: i32, month: u32) -> Option<YearMonth> {
    if (1..=12).contains(&month) {
      Some(YearMonth { year, month })
    }
    else {
      None
    }
  }

  pub fn year(&self) -> i32 {
    self.year
  }

  pub fn month(&self) -> u32 {
    self.month
  }

  /// The first day of this month, if `chrono` can represent it.
  pub fn first_day(&self) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(self.year, self.month, 1)
  }

  fn index(&self) -> i64 {
    i64::from(self.year) * 12 + i64::from(self.month - 1)
  }

  fn from_index(index: i64) -> Option<YearMonth> {
    let (year, month) = index.div_mod_floor(&12);
    let year = i32::try_from(year).ok()?;
    YearMonth::new(year, month as u32 + 1)
  }
}

impl From<NaiveDate> for YearMonth
{
  fn from(date: NaiveDate) -> YearMonth {
    YearMonth { year: date.year(), month: date.month() }
  }
}

impl Point for YearMonth
{
  type Offset = MonthDelta;

  const KIND: PointKind = PointKind::YearMonth;

  fn checked_add(&self, offset: &MonthDelta) -> Option<Self> {
    self.index().checked_add(offset.months).and_then(YearMonth::from_index)
  }

  fn since(&self, earlier: &Self) -> MonthDelta {
    MonthDelta::months(self.index() - earlier.index())
  }

  fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if (0..=9999).contains(&self.year) {
      write!(f, "{:04}-{:02}", self.year, self.month)
    }
    else {
      write!(f, "{:+05}-{:02}", self.year, self.month)
    }
  }

  fn parse_canonical(text: &str) -> Result<Self, Error> {
    let (year, month) = text.rsplit_once('-')
      .ok_or_else(|| parse_error::<Self>(text))?;
    let digits = year.trim_start_matches(|c: char| c == '+' || c == '-');
    if digits.len() < 4 || month.len() != 2 {
      return Err(parse_error::<Self>(text));
    }
    let year = year.parse().map_err(|_| parse_error::<Self>(text))?;
    let month = month.parse().map_err(|_| parse_error::<Self>(text))?;
    YearMonth::new(year, month).ok_or_else(|| parse_error::<Self>(text))
  }
}

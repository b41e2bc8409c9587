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

//! Errors raised while building, combining, iterating or decoding intervals.
//!
//! Every failure is reported through [`Error`](enum.Error.html). Callers that only care about the broad category (absent argument, wrong type, value out of range) can match on [`Error::kind`](enum.Error.html#method.kind).

use std::fmt;

use crate::point::{PointKind, Sign};

/// Which bound of an interval an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundSide {
  Start,
  End
}

impl fmt::Display for BoundSide
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BoundSide::Start => f.write_str("start"),
      BoundSide::End => f.write_str("end")
    }
  }
}

/// Broad classification of an [`Error`](enum.Error.html).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// A required bound or argument is absent.
  MissingArgument,
  /// A value is not of a supported point kind, or kinds are mixed.
  Type,
  /// A value is of the right kind but violates an ordering or sign constraint.
  Range
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("interval {bound} is missing")]
  MissingBound { bound: BoundSide },

  #[error("{input:?} is not an instant, zoned date-time, date-time, date or year-month")]
  UnsupportedPoint { input: String },

  #[error("{input:?} is not a valid {kind}")]
  Parse { kind: PointKind, input: String },

  #[error("expected a {expected} but found a {found}")]
  KindMismatch { expected: PointKind, found: PointKind },

  #[error("start {start} may not be greater than end {end}")]
  StartAfterEnd { start: String, end: String },

  #[error("iteration offset must be positive but is {sign}")]
  NonPositiveOffset { sign: Sign },

  #[error("iteration offset does not advance past {point}")]
  Stalled { point: String },

  #[error("intervals {left} and {right} neither overlap nor touch")]
  Disjoint { left: String, right: String },

  #[error("{kind} arithmetic is out of range")]
  Overflow { kind: PointKind }
}

impl Error
{
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::MissingBound { .. } => ErrorKind::MissingArgument,
      Error::UnsupportedPoint { .. }
      | Error::Parse { .. }
      | Error::KindMismatch { .. } => ErrorKind::Type,
      Error::StartAfterEnd { .. }
      | Error::NonPositiveOffset { .. }
      | Error::Stalled { .. }
      | Error::Disjoint { .. }
      | Error::Overflow { .. } => ErrorKind::Range
    }
  }
}

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

//! Lazy discretization of an interval into evenly spaced points.

use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, trace};

use crate::error::Error;
use crate::options::IterateOptions;
use crate::point::{Offset, Point, Sign};

/// Iterator returned by [`Interval::iterate`](../interval/struct.Interval.html#method.iterate).
///
/// Yields `start`, `start + step`, `start + 2 * step`, ... while the point is before `end` (or at `end` for an end-inclusive iteration). A step which fails to move a point forward, for example an hour added to a date, yields one `Err(Error::Stalled)` and ends the iteration.
pub struct Iterate<P: Point> {
  state: State<P>,
  end: P,
  step: P::Offset,
  end_inclusive: bool
}

enum State<P> {
  Next(P),
  Failed(Error),
  Done
}

impl<P: Point> Iterate<P>
{
  pub(crate) fn new(start: P, end: P, step: P::Offset, options: IterateOptions) -> Result<Iterate<P>, Error> {
    let sign = step.sign();
    if sign != Sign::Positive {
      return Err(Error::NonPositiveOffset { sign });
    }
    trace!(kind = %P::KIND, start = %start.canonical(), end = %end.canonical(), step = ?step,
      end_inclusive = options.end_inclusive, "iterating interval");
    Ok(Iterate {
      state: State::Next(start),
      end,
      step,
      end_inclusive: options.end_inclusive
    })
  }

  fn in_range(&self, point: &P) -> bool {
    if self.end_inclusive { *point <= self.end }
    else { *point < self.end }
  }
}

impl<P: Point> Iterator for Iterate<P>
{
  type Item = Result<P, Error>;

  fn next(&mut self) -> Option<Self::Item> {
    match mem::replace(&mut self.state, State::Done) {
      State::Next(point) => {
        if !self.in_range(&point) {
          return None;
        }
        self.state = match point.checked_add(&self.step) {
          Some(next) if next > point => State::Next(next),
          Some(_) => {
            debug!(kind = %P::KIND, point = %point.canonical(), step = ?self.step, "iteration stalled");
            State::Failed(Error::Stalled { point: point.canonical().to_string() })
          }
          // Past the representable range, hence past `end`.
          None => State::Done
        };
        Some(Ok(point))
      }
      State::Failed(err) => Some(Err(err)),
      State::Done => None
    }
  }
}

impl<P: Point> FusedIterator for Iterate<P> {}

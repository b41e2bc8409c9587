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

//! This library provides an immutable half-open time interval, `[start, end)`, generic over the kind of point its bounds are made of: instants, zoned date-times, plain date-times, dates and year-months. All the calendar arithmetic is delegated to the point kind (`chrono` for the first four); the interval only relies on the ordering of points and on adding an offset to them.
//!
//! On top of containment, equality, enclosure and overlap tests, intervals can be intersected, joined, measured and discretized into a lazy sequence of evenly spaced points. They are written as `<start>--<end>` and serialized as a `{start, end}` structure.
//!
//! # Examples
//!
//! For examples see the [interval module](interval/index.html) or the [any module](any/index.html) for kinds only known at runtime.
//!
//! # References
//! * [Allen's interval algebra](https://en.wikipedia.org/wiki/Allen%27s_interval_algebra)
//! * [ISO 8601 time intervals](https://en.wikipedia.org/wiki/ISO_8601#Time_intervals)

pub mod any;
pub mod error;
pub mod interval;
pub mod iter;
pub mod ops;
pub mod options;
pub mod point;

pub use crate::any::{AnyInterval, AnyPoint};
pub use crate::error::{BoundSide, Error, ErrorKind};
pub use crate::interval::Interval;
pub use crate::iter::Iterate;
pub use crate::options::{IterateOptions, UnionOptions};
pub use crate::point::{MonthDelta, Offset, Point, PointKind, Sign, YearMonth};

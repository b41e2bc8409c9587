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

//! Options tuning [`iterate_with`](../interval/struct.Interval.html#method.iterate_with) and [`union`](../interval/struct.Interval.html#method.union).
//!
//! Both structures default to the behaviour of the shorthand methods and can be read from any serde format, missing fields taking their default value.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct IterateOptions {
  /// Also yield `end` when the iteration lands exactly on it.
  pub end_inclusive: bool
}

impl IterateOptions
{
  pub const fn end_inclusive() -> IterateOptions {
    IterateOptions { end_inclusive: true }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct UnionOptions {
  /// Refuse to bridge a gap between intervals which neither overlap nor touch.
  pub strict: bool
}

impl UnionOptions
{
  pub const fn strict() -> UnionOptions {
    UnionOptions { strict: true }
  }
}

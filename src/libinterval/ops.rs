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

//! Interval specific operations.
//!
//! The set operations shared with other collections (`Contains`, `Overlap`, `Intersection`, ...) come from `gcollections::ops`; this module only adds the ones that make sense on intervals alone.

/// Smallest interval covering both operands, gap included.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// Two half-open intervals are adjacent when one ends exactly where the other starts.
pub trait Adjacent<RHS = Self>
{
  fn is_adjacent(&self, rhs: &RHS) -> bool;
}

//! The [`Sequence`] trait and the standard containers that implement it.
//!
//! The benchmark measures the containers as they ship: every
//! implementation here forwards straight to the container's own
//! end-of-sequence operations, with no capacity reservation.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// Number of elements an [`InlineVec`] stores before spilling to the heap.
pub const INLINE_CAPACITY: usize = 16;

/// Small-vector container with [`INLINE_CAPACITY`] inline slots.
pub type InlineVec = SmallVec<[u64; INLINE_CAPACITY]>;

/// An ordered, growable sequence of integers with access at the back.
///
/// `Default` must produce an empty sequence.
pub trait Sequence: Default {
    /// The container kind this implementation corresponds to.
    const KIND: ContainerKind;

    /// Append `value` at the end.
    fn push(&mut self, value: u64);

    /// Remove and return the last element, or `None` if empty.
    fn pop(&mut self) -> Option<u64>;

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, counting from the front.
    fn get(&self, index: usize) -> Option<u64>;
}

impl Sequence for Vec<u64> {
    const KIND: ContainerKind = ContainerKind::Vec;

    fn push(&mut self, value: u64) {
        Vec::push(self, value);
    }

    fn pop(&mut self) -> Option<u64> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn get(&self, index: usize) -> Option<u64> {
        self.as_slice().get(index).copied()
    }
}

impl Sequence for VecDeque<u64> {
    const KIND: ContainerKind = ContainerKind::Deque;

    fn push(&mut self, value: u64) {
        self.push_back(value);
    }

    fn pop(&mut self) -> Option<u64> {
        self.pop_back()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn get(&self, index: usize) -> Option<u64> {
        VecDeque::get(self, index).copied()
    }
}

impl Sequence for InlineVec {
    const KIND: ContainerKind = ContainerKind::SmallVec;

    fn push(&mut self, value: u64) {
        SmallVec::push(self, value);
    }

    fn pop(&mut self) -> Option<u64> {
        SmallVec::pop(self)
    }

    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn is_empty(&self) -> bool {
        SmallVec::is_empty(self)
    }

    fn get(&self, index: usize) -> Option<u64> {
        self.as_slice().get(index).copied()
    }
}

/// Which container backs a benchmark run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `Vec<u64>`.
    #[default]
    Vec,
    /// `VecDeque<u64>`, used only at its back end.
    Deque,
    /// [`InlineVec`].
    SmallVec,
}

impl ContainerKind {
    /// Every kind, in a stable order.
    pub const ALL: [ContainerKind; 3] = [Self::Vec, Self::Deque, Self::SmallVec];

    /// The name accepted by [`FromStr`] and printed by [`Display`](fmt::Display).
    pub fn name(self) -> &'static str {
        match self {
            Self::Vec => "vec",
            Self::Deque => "deque",
            Self::SmallVec => "smallvec",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a container name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownContainer {
    /// The rejected name.
    pub name: String,
}

impl fmt::Display for UnknownContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown container '{}' (expected one of: vec, deque, smallvec)",
            self.name
        )
    }
}

impl std::error::Error for UnknownContainer {}

impl FromStr for ContainerKind {
    type Err = UnknownContainer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownContainer { name: s.to_owned() })
    }
}

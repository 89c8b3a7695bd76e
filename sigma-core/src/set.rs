use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of integers requested per set.
///
/// Always at least 1: the upstream provider rejects empty draws, so a zero
/// size is refused at construction instead of on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SetSize(NonZeroU32);

impl SetSize {
    /// Creates a `SetSize` from a positive count.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidSetSize`] if `value` is zero.
    pub fn new(value: u32) -> Result<Self, CoreError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(CoreError::InvalidSetSize { value: u64::from(value) })
    }

    /// Returns the size as a plain `u32`.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for SetSize {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SetSize> for u32 {
    fn from(size: SetSize) -> Self {
        size.get()
    }
}

impl fmt::Display for SetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One batch of integers returned by a single upstream draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RandomSet(Vec<u32>);

impl RandomSet {
    /// Wraps the values of one draw, preserving their order.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    /// Borrow the values.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// Number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the set holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the set and return its values.
    #[must_use]
    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl From<Vec<u32>> for RandomSet {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

impl AsRef<[u32]> for RandomSet {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

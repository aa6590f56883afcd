//! Run configuration and validation.

use crate::error::ConfigError;
use crate::sequence::ContainerKind;

/// Largest count any supported container can hold.
///
/// Allocations are capped at `isize::MAX` bytes, so a buffer of `u64`
/// elements tops out at `isize::MAX / 8` slots.
pub const MAX_COUNT: u64 = (isize::MAX as usize / std::mem::size_of::<u64>()) as u64;

/// Parameters of one fill/drain run.
///
/// Built by the driver after the count argument has been resolved.
/// [`validate()`](RunConfig::validate) must pass before the config is
/// handed to [`run`](crate::run).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of elements to append and then remove (N).
    pub count: u64,
    /// Container that backs the run.
    pub container: ContainerKind,
}

impl RunConfig {
    /// Create a config for `count` elements in the given container.
    pub fn new(count: u64, container: ContainerKind) -> Self {
        Self { count, container }
    }

    /// A zero count means there is nothing to measure; the driver
    /// prints usage instead of running.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check that the count is within [`MAX_COUNT`].
    ///
    /// This only rules out counts no container could ever allocate; a
    /// count below the bound can still exhaust memory at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count > MAX_COUNT {
            return Err(ConfigError::CountOverflow { value: self.count });
        }
        Ok(())
    }
}

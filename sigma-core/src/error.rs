/// Errors produced by the `sigma-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A set size of zero was requested; the provider needs at least one value per set.
    #[error("invalid set size {value}: must be at least 1")]
    InvalidSetSize { value: u64 },
}

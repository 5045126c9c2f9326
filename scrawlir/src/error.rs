use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A builder was asked for a character it has no stroke skeleton for.
    ///
    /// This is a structural failure of the repertoire, not a rendering
    /// problem; the boxed-X fallback is reserved for unmapped punctuation
    /// and must not paper over a missing letter or digit.
    #[error("No stroke skeleton for {0:?}")]
    MissingSkeleton(char),
}

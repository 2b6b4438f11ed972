/// Classification for retry policy.
///
/// Used by the resolver to decide whether a failed upstream attempt is worth
/// repeating.
///
/// | Class | Retried? |
/// |-------|----------|
/// | `Never` | No, the failure is terminal for the request |
/// | `Transient` | Yes, within the resolver's attempt budget |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Bad input, missing configuration or an answer from upstream.
    /// Repeating the same call would produce the same outcome.
    Never,

    /// The upstream could not be reached or did not answer in time.
    /// A second attempt may succeed.
    Transient,
}

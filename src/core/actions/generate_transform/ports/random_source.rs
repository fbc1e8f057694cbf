/// Injected source of randomness for transform generation and export naming.
pub trait RandomSource {
    /// Uniform sample in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// A fresh token used to name exported files.
    fn unique_token(&mut self) -> u64;
}

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Return an integer in `[0, bound)`. A zero bound yields 0.
    fn next_int(&mut self, bound: u32) -> u32;
}

/// Random source backed by any `rand` generator.
///
/// Draws a uniform real in `[0, 1)`, scales it by the bound and floors it.
#[derive(Debug, Clone)]
pub struct RngSource<R = ThreadRng> {
    rng: R,
}

impl RngSource<ThreadRng> {
    /// Random source on the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let scaled = (self.rng.gen::<f64>() * f64::from(bound)).floor() as u32;
        // Rounding must never reach the bound itself
        scaled.min(bound - 1)
    }
}

//! Random verification code generation

use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use std::sync::{Mutex, PoisonError};

use super::traits::CodeGenerator;

/// Generates codes uniformly in `[0, 999999]` from the wrapped random source
pub struct RngCodeGenerator<R: RngCore + Send> {
    rng: Mutex<R>,
}

impl<R: RngCore + Send> RngCodeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RngCodeGenerator<OsRng> {
    /// Generator backed by the operating system CSPRNG
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl Default for RngCodeGenerator<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore + Send> CodeGenerator for RngCodeGenerator<R> {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }
}

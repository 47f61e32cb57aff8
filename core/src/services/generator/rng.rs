//! Random source selection for code generation.

use rand::rngs::{OsRng, ThreadRng};
use rand::{Error, RngCore};

/// Random source for drawing codes: the operating system CSPRNG, or the
/// thread-local generator when the OS source is unavailable.
pub(crate) enum TokenRng {
    Os(OsRng),
    Thread(ThreadRng),
}

impl RngCore for TokenRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Os(rng) => rng.next_u32(),
            Self::Thread(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Os(rng) => rng.next_u64(),
            Self::Thread(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Os(rng) => rng.fill_bytes(dest),
            Self::Thread(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        match self {
            Self::Os(rng) => rng.try_fill_bytes(dest),
            Self::Thread(rng) => rng.try_fill_bytes(dest),
        }
    }
}

/// Probes the OS random source and falls back to the thread-local RNG
///
/// The fallback is a degraded-security event and is logged as such; the
/// shape of generated codes does not change.
pub(crate) fn secure_rng() -> TokenRng {
    let mut probe = [0u8; 8];

    match OsRng.try_fill_bytes(&mut probe) {
        Ok(()) => TokenRng::Os(OsRng),
        Err(err) => {
            tracing::warn!(
                error = %err,
                event = "rng_degraded",
                "Operating system random source unavailable, falling back to thread-local RNG"
            );
            TokenRng::Thread(rand::thread_rng())
        }
    }
}

//! The process-wide random generator shared by all dice.
//!
//! Access is serialized through a mutex, so dice rolled from several
//! threads never touch the generator concurrently.

use std::sync::{LazyLock, Mutex, PoisonError};

use rand::rngs::StdRng;

use crate::config::RollerConfig;

static SHARED_RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| {
    tracing::debug!("initializing shared die generator from os entropy");
    Mutex::new(RollerConfig::default().build_rng())
});

/// Run `f` with exclusive access to the shared generator.
///
/// The lock is not reentrant: `f` must not roll or build a die through the
/// shared path.
pub(crate) fn with_shared_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    // A panic inside `f` cannot leave `StdRng` in an unusable state.
    let mut rng = SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut rng)
}

/// Replace the shared generator with one built from `config`.
pub fn reseed_shared(config: &RollerConfig) {
    tracing::debug!(seed = ?config.seed, "reseeding shared die generator");
    let fresh = config.build_rng();
    with_shared_rng(|rng| *rng = fresh);
}

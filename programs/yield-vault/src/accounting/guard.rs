//! Reentrancy guard

use anchor_lang::prelude::*;
use super::ReentrancyLock;

/// Run `f` while holding the host's lock
///
/// A nested call fails in `acquire` before touching any state. The lock is
/// released whether `f` succeeds or fails.
pub fn with_lock<H, T, F>(host: &mut H, f: F) -> Result<T>
where
    H: ReentrancyLock + ?Sized,
    F: FnOnce(&mut H) -> Result<T>,
{
    host.acquire()?;
    let outcome = f(host);
    let released = host.release();
    let value = outcome?;
    released?;
    Ok(value)
}

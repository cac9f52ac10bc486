use std::sync::atomic::{AtomicBool, Ordering};

use fanin_core_rs::BarrierError;

/// Occupancy token for the single waiter a barrier admits.
///
/// Releasing happens on drop, so a wait abandoned by a timeout or cancellation frees the slot.
pub(crate) struct WaitSlot<'a> {
  occupied: &'a AtomicBool,
}

impl<'a> WaitSlot<'a> {
  pub(crate) fn acquire(occupied: &'a AtomicBool) -> Result<Self, BarrierError> {
    match occupied.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire) {
      | Ok(_) => Ok(Self { occupied }),
      | Err(_) => {
        tracing::warn!("rejected a second concurrent waiter");
        Err(BarrierError::ConcurrentWait)
      },
    }
  }
}

impl Drop for WaitSlot<'_> {
  fn drop(&mut self) {
    self.occupied.store(false, Ordering::Release);
  }
}

use std::time::Duration;

use fanin_core_rs::{BarrierError, CompletionBarrier, CompletionBarrierBackend};
use futures::FutureExt;
use tokio::{
  join, pin,
  time::{sleep, Instant},
};
use tokio_util::sync::CancellationToken;

use super::{CountingBarrier, QueueBarrier, TimedWait, TokioCountingBarrierBackend, TokioQueueBarrierBackend};

async fn releases_after_all_signals<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(2);
  let worker_barrier = barrier.clone();

  let wait_fut = barrier.wait();
  let worker = async move {
    worker_barrier.signal().unwrap();
    worker_barrier.signal().unwrap();
  };

  let (result, ()) = join!(wait_fut, worker);
  assert_eq!(result, Ok(()));
  assert!(barrier.is_complete());
}

async fn zero_expected_returns_immediately<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(0);
  assert_eq!(barrier.wait().now_or_never(), Some(Ok(())));
}

fn overflow_is_rejected<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(1);
  assert_eq!(barrier.signal(), Ok(()));
  assert_eq!(barrier.signal(), Err(BarrierError::SignalOverflow { expected: 1 }));
  assert_eq!(barrier.outstanding(), 0);
}

async fn second_waiter_is_rejected<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(1);
  let first = barrier.wait();
  pin!(first);
  assert!(first.as_mut().now_or_never().is_none());

  assert_eq!(barrier.wait().await, Err(BarrierError::ConcurrentWait));

  barrier.signal().unwrap();
  assert_eq!(first.await, Ok(()));
}

async fn released_barrier_can_be_waited_again<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(1);
  barrier.signal().unwrap();
  assert_eq!(barrier.wait().await, Ok(()));
  assert_eq!(barrier.wait().await, Ok(()));
}

async fn timeout_frees_the_waiter_slot<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(1);
  assert_eq!(barrier.wait_timeout(Duration::from_millis(20)).await, Err(BarrierError::Timeout));

  barrier.signal().unwrap();
  assert_eq!(barrier.wait_timeout(Duration::from_millis(20)).await, Ok(()));
}

async fn unbounded_timeout_behaves_like_wait<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(1);
  let worker_barrier = barrier.clone();
  let worker = async move {
    sleep(Duration::from_millis(10)).await;
    worker_barrier.signal().unwrap();
  };

  let (result, ()) = join!(barrier.wait_timeout(Duration::MAX), worker);
  assert_eq!(result, Ok(()));
  assert_eq!(barrier.wait_timeout(Duration::MAX).await, Ok(()));
}

async fn deadline_bounds_the_wait<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(2);
  barrier.signal().unwrap();
  let deadline = Instant::now() + Duration::from_millis(20);
  assert_eq!(barrier.wait_deadline(deadline).await, Err(BarrierError::Timeout));
  assert_eq!(barrier.outstanding(), 1);

  barrier.signal().unwrap();
  let deadline = Instant::now() + Duration::from_secs(5);
  assert_eq!(barrier.wait_deadline(deadline).await, Ok(()));
}

async fn cancellation_stops_the_wait<B: CompletionBarrierBackend>() {
  let barrier = CompletionBarrier::<B>::new(1);
  let token = CancellationToken::new();
  let canceller = {
    let token = token.clone();
    async move {
      sleep(Duration::from_millis(10)).await;
      token.cancel();
    }
  };

  let (result, ()) = join!(barrier.wait_or_cancel(&token), canceller);
  assert_eq!(result, Err(BarrierError::Cancelled));
  assert_eq!(barrier.outstanding(), 1);
}

#[tokio::test]
async fn counting_barrier_releases_after_all_signals() {
  releases_after_all_signals::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_releases_after_all_signals() {
  releases_after_all_signals::<TokioQueueBarrierBackend>().await;
}

#[tokio::test]
async fn counting_barrier_with_zero_expected_returns_immediately() {
  zero_expected_returns_immediately::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_with_zero_expected_returns_immediately() {
  zero_expected_returns_immediately::<TokioQueueBarrierBackend>().await;
}

#[test]
fn counting_barrier_rejects_overflow() {
  overflow_is_rejected::<TokioCountingBarrierBackend>();
}

#[test]
fn queue_barrier_rejects_overflow() {
  overflow_is_rejected::<TokioQueueBarrierBackend>();
}

#[tokio::test]
async fn counting_barrier_rejects_second_waiter() {
  second_waiter_is_rejected::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_rejects_second_waiter() {
  second_waiter_is_rejected::<TokioQueueBarrierBackend>().await;
}

#[tokio::test]
async fn counting_barrier_stays_released() {
  released_barrier_can_be_waited_again::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_stays_released() {
  released_barrier_can_be_waited_again::<TokioQueueBarrierBackend>().await;
}

#[tokio::test]
async fn counting_barrier_timeout_frees_slot() {
  timeout_frees_the_waiter_slot::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_timeout_frees_slot() {
  timeout_frees_the_waiter_slot::<TokioQueueBarrierBackend>().await;
}

#[tokio::test]
async fn counting_barrier_accepts_unbounded_timeout() {
  unbounded_timeout_behaves_like_wait::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_accepts_unbounded_timeout() {
  unbounded_timeout_behaves_like_wait::<TokioQueueBarrierBackend>().await;
}

#[tokio::test]
async fn released_barrier_ignores_maximal_timeout() {
  assert_eq!(CountingBarrier::new(0).wait_timeout(Duration::MAX).await, Ok(()));
  assert_eq!(QueueBarrier::new(0).wait_timeout(Duration::MAX).await, Ok(()));
}

#[tokio::test]
async fn counting_barrier_wait_deadline_times_out() {
  deadline_bounds_the_wait::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_wait_deadline_times_out() {
  deadline_bounds_the_wait::<TokioQueueBarrierBackend>().await;
}

#[tokio::test]
async fn counting_barrier_wait_can_be_cancelled() {
  cancellation_stops_the_wait::<TokioCountingBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_wait_can_be_cancelled() {
  cancellation_stops_the_wait::<TokioQueueBarrierBackend>().await;
}

#[tokio::test]
async fn queue_barrier_overflow_keeps_token_count() {
  let barrier = QueueBarrier::new(2);
  barrier.signal().unwrap();
  barrier.signal().unwrap();
  assert_eq!(barrier.signal(), Err(BarrierError::SignalOverflow { expected: 2 }));
  assert_eq!(barrier.outstanding(), 0);
  assert!(format!("{:?}", barrier).contains("issued: 2"));
  assert_eq!(barrier.wait().await, Ok(()));
}

#[test]
fn queue_barrier_capacity_covers_expected() {
  assert_eq!(QueueBarrier::new(0).backend().capacity(), 1);
  assert_eq!(QueueBarrier::new(5).backend().capacity(), 5);
}

#[test]
fn counting_barrier_debug_shows_remaining() {
  let barrier = CountingBarrier::new(3);
  barrier.signal().unwrap();
  let debug_str = format!("{:?}", barrier);
  assert!(debug_str.contains("TokioCountingBarrierBackend"));
  assert!(debug_str.contains("remaining: 2"));
}

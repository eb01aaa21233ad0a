// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use parking_lot::Mutex;
use tokio::sync::{broadcast, Notify};
use tracing::{debug, trace};

// Current module imports
use super::errors::GateError;
use super::types::{AdmissionGate, GateConfig, GatePermit, GateShared, GateState};

impl GateConfig {
    pub fn new(capacity: u32, period: Duration) -> Self {
        Self { capacity, period }
    }

    pub fn validate(&self) -> Result<(), GateError> {
        if self.capacity == 0 {
            return Err(GateError::InvalidCapacity(self.capacity));
        }

        if self.period.is_zero() {
            return Err(GateError::InvalidPeriod);
        }

        Ok(())
    }
}

impl GateShared {
    /// Takes one slot if any is left.
    fn try_take(&self) -> Result<bool, GateError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(GateError::Closed);
        }
        if state.available == 0 {
            return Ok(false);
        }
        state.available -= 1;
        trace!(available = state.available, "Admission slot taken");
        Ok(true)
    }

    /// Returns one slot, never going past capacity.
    fn give_back(&self) {
        {
            let mut state = self.state.lock();
            state.available = (state.available + 1).min(self.capacity);
            trace!(available = state.available, "Admission slot released");
        }
        self.notify.notify_one();
    }

    /// Resets the pool to full capacity.
    fn refill(&self) {
        {
            let mut state = self.state.lock();
            trace!(
                before = state.available,
                capacity = self.capacity,
                "Replenishing admission slots"
            );
            state.available = self.capacity;
        }
        self.notify.notify_waiters();
    }

    fn close(&self) {
        self.state.lock().closed = true;
        self.notify.notify_waiters();
    }
}

impl AdmissionGate {
    /// Creates the gate at full capacity and starts its replenishment task.
    pub fn new(config: GateConfig) -> Result<Self, GateError> {
        config.validate()?;

        let shared = Arc::new(GateShared {
            capacity: config.capacity,
            period: config.period,
            state: Mutex::new(GateState {
                available: config.capacity,
                closed: false,
            }),
            notify: Notify::new(),
        });

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let replenisher = tokio::spawn(replenish_loop(Arc::clone(&shared), shutdown_rx));

        debug!(
            capacity = config.capacity,
            period = ?config.period,
            "Admission gate created"
        );

        Ok(Self {
            shared,
            shutdown_tx,
            replenisher: Mutex::new(Some(replenisher)),
        })
    }

    /// Waits until a slot is available and takes it.
    ///
    /// Dropping the returned future before it completes consumes no slot.
    /// Fails with [`GateError::Closed`] once the gate has been shut down,
    /// including for callers that were already waiting.
    pub async fn acquire(&self) -> Result<GatePermit, GateError> {
        loop {
            // Register interest before checking so a release or refill that
            // lands between the check and the await still wakes us.
            let notified = self.shared.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.shared.try_take()? {
                return Ok(GatePermit {
                    shared: Arc::clone(&self.shared),
                });
            }

            notified.await;
        }
    }

    /// Like [`acquire`](Self::acquire), giving up after `timeout`.
    pub async fn acquire_timeout(&self, timeout: Duration) -> Result<GatePermit, GateError> {
        tokio::time::timeout(timeout, self.acquire())
            .await
            .map_err(|_| GateError::TimedOut(timeout))?
    }

    /// Like [`acquire`](Self::acquire), giving up when `cancel` fires.
    pub async fn acquire_or_cancel(
        &self,
        cancel: &mut broadcast::Receiver<()>,
    ) -> Result<GatePermit, GateError> {
        tokio::select! {
            biased;

            permit = self.acquire() => permit,

            Ok(_) = cancel.recv() => {
                debug!("Wait for admission slot cancelled");
                Err(GateError::Cancelled)
            }
        }
    }

    /// Returns one slot to the gate without a matching permit.
    ///
    /// Extra releases are absorbed: the number of available slots never
    /// exceeds the capacity.
    pub fn release(&self) {
        self.shared.give_back();
    }

    /// Closes the gate and waits for the replenishment task to stop.
    ///
    /// Pending and future acquisitions fail with [`GateError::Closed`].
    /// Calling it more than once is harmless.
    pub async fn shutdown(&self) {
        self.shared.close();
        let _ = self.shutdown_tx.send(());

        let replenisher = self.replenisher.lock().take();
        if let Some(handle) = replenisher {
            let _ = handle.await;
            debug!("Admission gate shut down");
        }
    }

    pub fn capacity(&self) -> u32 {
        self.shared.capacity
    }

    pub fn period(&self) -> Duration {
        self.shared.period
    }

    pub fn available(&self) -> u32 {
        self.shared.state.lock().available
    }

    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }
}

impl Drop for AdmissionGate {
    fn drop(&mut self) {
        self.shared.close();
        let _ = self.shutdown_tx.send(());
    }
}

impl GatePermit {
    /// Gives the slot back now instead of at the end of scope.
    pub fn release(self) {}
}

impl Drop for GatePermit {
    fn drop(&mut self) {
        self.shared.give_back();
    }
}

/// Sleeps one period, refills, repeats until the shutdown signal arrives or
/// its sender goes away.
async fn replenish_loop(shared: Arc<GateShared>, mut shutdown_rx: broadcast::Receiver<()>) {
    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                debug!("Replenishment task stopping");
                break;
            }

            _ = tokio::time::sleep(shared.period) => {
                shared.refill();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_gate(capacity: u32, period: Duration) -> AdmissionGate {
        AdmissionGate::new(GateConfig::new(capacity, period)).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_zero_capacity() {
        let result = AdmissionGate::new(GateConfig::new(0, Duration::from_secs(1)));
        assert_eq!(result.unwrap_err(), GateError::InvalidCapacity(0));
    }

    #[tokio::test]
    async fn test_rejects_zero_period() {
        let result = AdmissionGate::new(GateConfig::new(5, Duration::ZERO));
        assert_eq!(result.unwrap_err(), GateError::InvalidPeriod);
    }

    #[tokio::test]
    async fn test_acquire_and_drop_permit() {
        let gate = test_gate(2, Duration::from_secs(3600));
        assert_eq!(gate.available(), 2);

        let first = gate.acquire().await.unwrap();
        let second = gate.acquire().await.unwrap();
        assert_eq!(gate.available(), 0);

        drop(first);
        assert_eq!(gate.available(), 1);

        second.release();
        assert_eq!(gate.available(), 2);
    }

    #[tokio::test]
    async fn test_extra_release_is_clamped() {
        let gate = test_gate(3, Duration::from_secs(3600));

        gate.release();
        gate.release();
        assert_eq!(gate.available(), 3);

        let permit = gate.acquire().await.unwrap();
        gate.release();
        gate.release();
        assert_eq!(gate.available(), 3);

        // The late permit drop must not overflow either.
        drop(permit);
        assert_eq!(gate.available(), 3);
    }

    #[tokio::test]
    async fn test_replenish_resets_to_capacity() {
        let gate = test_gate(3, Duration::from_secs(3600));

        let permits = vec![
            gate.acquire().await.unwrap(),
            gate.acquire().await.unwrap(),
            gate.acquire().await.unwrap(),
        ];
        assert_eq!(gate.available(), 0);

        gate.shared.refill();
        assert_eq!(gate.available(), 3);

        drop(permits);
        assert_eq!(gate.available(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_refill_before_period_ends() {
        let gate = test_gate(2, Duration::from_secs(3600));
        let _first = gate.acquire().await.unwrap();
        let _second = gate.acquire().await.unwrap();

        let third = gate.acquire_timeout(Duration::from_secs(3599)).await;
        assert!(matches!(third, Err(GateError::TimedOut(_))));
        assert_eq!(gate.available(), 0);
    }

    #[tokio::test]
    async fn test_acquire_blocks_at_capacity() {
        let gate = test_gate(1, Duration::from_secs(3600));
        let held = gate.acquire().await.unwrap();

        let result = gate.acquire_timeout(Duration::from_millis(50)).await;
        assert!(matches!(result, Err(GateError::TimedOut(_))));
        // The abandoned wait did not take anything.
        assert_eq!(gate.available(), 0);

        drop(held);
        assert!(gate
            .acquire_timeout(Duration::from_millis(50))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_waiter_woken_by_release() {
        let gate = Arc::new(test_gate(1, Duration::from_secs(3600)));
        let held = gate.acquire().await.unwrap();

        let waiter = {
            let gate = Arc::clone(&gate);
            tokio::spawn(async move { gate.acquire().await.map(drop) })
        };
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        drop(held);
        assert_eq!(waiter.await.unwrap(), Ok(()));
        assert_eq!(gate.available(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_replenishment_admits_waiter() {
        let gate = test_gate(1, Duration::from_millis(100));
        let _held = gate.acquire().await.unwrap();
        assert_eq!(gate.available(), 0);

        // Only the background refill can satisfy this one.
        let second = gate.acquire_timeout(Duration::from_millis(150)).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_acquire_or_cancel() {
        let gate = test_gate(1, Duration::from_secs(3600));
        let (cancel_tx, mut cancel_rx) = broadcast::channel(1);
        let held = gate.acquire().await.unwrap();

        cancel_tx.send(()).unwrap();
        let result = gate.acquire_or_cancel(&mut cancel_rx).await;
        assert!(matches!(result, Err(GateError::Cancelled)));
        assert_eq!(gate.available(), 0);

        drop(held);
        assert_eq!(gate.available(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_fails_pending_and_future_acquires() {
        let gate = Arc::new(test_gate(1, Duration::from_secs(3600)));
        let held = gate.acquire().await.unwrap();

        let waiter = {
            let gate = Arc::clone(&gate);
            tokio::spawn(async move { gate.acquire().await.map(drop) })
        };
        tokio::task::yield_now().await;

        gate.shutdown().await;
        assert!(gate.is_closed());
        assert_eq!(waiter.await.unwrap(), Err(GateError::Closed));
        assert!(matches!(gate.acquire().await, Err(GateError::Closed)));

        drop(held);
        gate.shutdown().await;
    }

    #[tokio::test]
    async fn test_drop_stops_replenishment_task() {
        let gate = test_gate(1, Duration::from_millis(10));
        let shared = Arc::clone(&gate.shared);
        assert!(Arc::strong_count(&shared) >= 3);

        drop(gate);
        assert!(shared.state.lock().closed);

        // The task holds the last other reference until it exits.
        let stopped = tokio::time::timeout(Duration::from_secs(1), async {
            while Arc::strong_count(&shared) > 1 {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await;
        assert!(stopped.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_outstanding_permits_never_exceed_capacity() {
        let gate = Arc::new(test_gate(3, Duration::from_secs(3600)));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..32 {
            let gate = Arc::clone(&gate);
            let in_flight = Arc::clone(&in_flight);
            let peak = Arc::clone(&peak);
            handles.push(tokio::spawn(async move {
                let permit = gate.acquire().await.unwrap();
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::task::yield_now().await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                drop(permit);
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(gate.available(), 3);
    }
}

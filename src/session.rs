//! Identity session contracts bridging the external provider's authenticated-event stream.

// std
use std::sync::atomic::{AtomicUsize, Ordering};
// self
use crate::{_prelude::*, identity::Identity};

/// Boxed future returned by session trait methods.
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Error raised when the identity session source cannot deliver events; fatal to the attempt.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SessionError {
	/// The provider is unreachable or refused the subscription.
	#[error("Identity session source is unavailable: {reason}.")]
	Unavailable {
		/// Provider-supplied reason string.
		reason: String,
	},
}

/// Trust boundary supplying authenticated-identity events.
///
/// Credentials are verified entirely on the provider side; the bridge consumes the resulting
/// events and never re-checks them.
pub trait IdentitySource
where
	Self: Send + Sync,
{
	/// Opens the event subscription for one page lifetime.
	///
	/// Callers hold exactly one subscription and release it by dropping the returned stream;
	/// implementations tear down provider-side listeners in their [`Drop`] glue.
	fn subscribe(&self) -> Result<Box<dyn IdentityEvents>, SessionError>;
}

/// Stream of authenticated identities delivered by an open subscription.
pub trait IdentityEvents
where
	Self: Send,
{
	/// Resolves to the next authenticated identity, or `None` once the session ends.
	///
	/// The same uid may be delivered more than once; consumers must stay idempotent.
	fn next(&mut self) -> SessionFuture<'_, Option<Identity>>;
}

/// In-process identity source for tests and demos.
///
/// Queued events are drained in order; the live-subscription counter makes the
/// acquire/release discipline observable.
#[derive(Clone, Debug, Default)]
pub struct QueueIdentitySource {
	queue: Arc<Mutex<VecDeque<Identity>>>,
	active: Arc<AtomicUsize>,
}
impl QueueIdentitySource {
	/// Queues an authenticated-identity event.
	pub fn push(&self, identity: Identity) {
		self.queue.lock().push_back(identity);
	}

	/// Number of subscriptions currently held open.
	pub fn active_subscriptions(&self) -> usize {
		self.active.load(Ordering::SeqCst)
	}
}
impl IdentitySource for QueueIdentitySource {
	fn subscribe(&self) -> Result<Box<dyn IdentityEvents>, SessionError> {
		self.active.fetch_add(1, Ordering::SeqCst);

		Ok(Box::new(QueueEvents { queue: self.queue.clone(), active: self.active.clone() }))
	}
}

struct QueueEvents {
	queue: Arc<Mutex<VecDeque<Identity>>>,
	active: Arc<AtomicUsize>,
}
impl IdentityEvents for QueueEvents {
	fn next(&mut self) -> SessionFuture<'_, Option<Identity>> {
		let queue = self.queue.clone();

		Box::pin(async move { queue.lock().pop_front() })
	}
}
impl Drop for QueueEvents {
	fn drop(&mut self) {
		self.active.fetch_sub(1, Ordering::SeqCst);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::identity::Uid;

	fn identity(uid: &str) -> Identity {
		Identity::new(Uid::new(uid).expect("Uid fixture should be valid."))
	}

	#[tokio::test]
	async fn queued_events_drain_in_order() {
		let source = QueueIdentitySource::default();

		source.push(identity("uid-a"));
		source.push(identity("uid-b"));

		let mut events =
			source.subscribe().expect("Queue source subscription should always succeed.");

		assert_eq!(events.next().await.map(|i| i.uid.to_string()), Some("uid-a".into()));
		assert_eq!(events.next().await.map(|i| i.uid.to_string()), Some("uid-b".into()));
		assert!(events.next().await.is_none());
	}

	#[test]
	fn dropping_the_stream_releases_the_subscription() {
		let source = QueueIdentitySource::default();
		let events =
			source.subscribe().expect("Queue source subscription should always succeed.");

		assert_eq!(source.active_subscriptions(), 1);

		drop(events);

		assert_eq!(source.active_subscriptions(), 0);
	}
}

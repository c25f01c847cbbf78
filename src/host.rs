//! Hosting page capabilities.
//!
//! The session never touches a document directly; everything it needs
//! from the page lives behind [`NavigationHost`], so webview-backed hosts
//! and scripted test hosts plug in the same way.

use tokio::sync::oneshot;

/// Capabilities the hosting page must provide.
pub trait NavigationHost: Send + Sync {
	/// The client identity string, when the environment exposes one.
	///
	/// Returning `None` models a host without a user-agent interface;
	/// the session then classifies the platform as unknown and every
	/// operation degrades to a no-op.
	fn user_agent(&self) -> Option<String>;

	/// Attaches an invisible off-screen probe whose target resource is
	/// `uri`.
	///
	/// The returned handle resolves when the probe's load event fires.
	/// The host keeps the paired [`ProbeSignal`] and completes it from
	/// its load callback.
	fn attach_probe(&self, uri: &str) -> ProbeHandle;

	/// Removes the attached probe from the page.
	fn detach_probe(&self);

	/// Sets the current page's navigation target.
	fn navigate(&self, url: &str);
}

/// Completion side of a probe, held by the host.
#[derive(Debug)]
pub struct ProbeSignal {
	tx: oneshot::Sender<()>,
}

impl ProbeSignal {
	/// Signals that the probe's load event fired. One-shot.
	pub fn complete(self) {
		let _ = self.tx.send(());
	}
}

/// Waiting side of a probe, returned to the session by
/// [`NavigationHost::attach_probe`].
#[derive(Debug)]
pub struct ProbeHandle {
	rx: oneshot::Receiver<()>,
}

impl ProbeHandle {
	/// Creates a connected signal/handle pair.
	pub fn pair() -> (ProbeSignal, ProbeHandle) {
		let (tx, rx) = oneshot::channel();
		(ProbeSignal { tx }, ProbeHandle { rx })
	}

	/// Resolves when the probe's load event fires.
	///
	/// A host that drops its signal without completing it means the load
	/// event can no longer fire; that is a probe that never resolves,
	/// not a spurious completion, so this future stays pending.
	pub async fn loaded(self) {
		if self.rx.await.is_err() {
			std::future::pending::<()>().await;
		}
	}
}

use std::{sync::Arc, thread};

use tracing::debug;

use super::SessionStore;

/// One-shot completion signal for hydration. The worker sends a single
/// message and drops its sender, so every waiter observes completion either
/// through the message or through the disconnect that follows it.
pub struct HydrationSignal {
  receiver: flume::Receiver<()>,
}

impl HydrationSignal {
  pub(super) fn new() -> (flume::Sender<()>, Self) {
    let (tx, rx) = flume::bounded::<()>(1);
    (tx, Self { receiver: rx })
  }

  pub async fn wait(&self) {
    let _ = self.receiver.recv_async().await;
  }
}

/// Runs the session restore off the caller's thread so construction never
/// blocks on storage.
pub(super) fn spawn(
  store: Arc<SessionStore>,
  done: flume::Sender<()>,
) -> std::io::Result<()> {
  thread::Builder::new()
    .name(String::from("session-hydration"))
    .spawn(move || {
      store.hydrate();
      debug!("hydration complete");
      let _ = done.send(());
    })?;
  Ok(())
}

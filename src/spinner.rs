use std::io::Write;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

const FRAME_INTERVAL_MS: u64 = 300;

/// Cosmetic "thinking" indicator drawn on stderr by a background task.
/// Carries no data. Call `stop` and await it before printing anything else.
pub struct Spinner {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Spinner {
    pub fn start(label: &'static str) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let frames = [".", "..", "..."];
            let mut ticker = interval(Duration::from_millis(FRAME_INTERVAL_MS));
            let mut i = 0usize;
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        // Pad so a shorter frame fully overwrites a longer one
                        draw(&format!("\r{}{:<3}", label, frames[i % frames.len()]));
                        i += 1;
                    }
                }
            }
            draw(&format!("\r{}\r", " ".repeat(label.chars().count() + 3)));
        });

        Spinner { stop_tx, handle }
    }

    /// Signal the task and wait until it has erased its line
    pub async fn stop(self) {
        // Send fails only if the task already ended
        let _ = self.stop_tx.send(());
        if let Err(e) = self.handle.await {
            tracing::debug!(error = %e, "Spinner task ended abnormally");
        }
    }
}

fn draw(text: &str) {
    let mut err = std::io::stderr();
    let _ = err.write_all(text.as_bytes());
    let _ = err.flush();
}

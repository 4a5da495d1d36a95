//! A minimal terminal spinner shown while the narration request is in
//! flight.

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(120);

/// A spinner running in a background task. Writes to stderr so stdout
/// stays clean for the session transcript.
pub struct Spinner {
    handle: JoinHandle<()>,
    stop: tokio::sync::watch::Sender<bool>,
}

impl Spinner {
    /// Start a spinner with the given message (e.g. `"thinking"`).
    pub fn start(message: &str) -> Self {
        let (stop, mut stopped) = tokio::sync::watch::channel(false);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut tick = 0usize;
            loop {
                eprint!("\r{} {}", FRAMES[tick % FRAMES.len()], message);
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(TICK) => tick += 1,
                    _ = stopped.changed() => break,
                }
            }
            // \x1b[2K erases the spinner line
            eprint!("\r\x1b[2K");
            let _ = std::io::stderr().flush();
        });

        Self { handle, stop }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.handle.await;
    }
}

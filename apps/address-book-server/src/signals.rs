use std::fmt;

use tokio::signal;

/// Signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        })
    }
}

/// Resolve on the first of Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> std::io::Result<StopSignal> {
    tokio::select! {
        res = signal::ctrl_c() => res.map(|()| StopSignal::Interrupt),
        res = sigterm() => res.map(|()| StopSignal::Terminate),
    }
}

#[cfg(unix)]
async fn sigterm() -> std::io::Result<()> {
    let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    stream.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn sigterm() -> std::io::Result<()> {
    std::future::pending().await
}

//! Start-up notification for a launching process.
//!
//! A launcher that spawns noisebox with `--notify-parent` waits for SIGUSR1,
//! which is raised once the output stream is playing.

use color_eyre::eyre::Result as EyreResult;

#[cfg(unix)]
pub fn notify_parent() -> EyreResult<()> {
    let parent = nix::unistd::getppid();
    signal_ready(parent)?;
    tracing::info!(parent = %parent, "notified parent process");
    Ok(())
}

#[cfg(not(unix))]
pub fn notify_parent() -> EyreResult<()> {
    Err(color_eyre::eyre::eyre!("--notify-parent needs a Unix host"))
}

#[cfg(unix)]
fn signal_ready(pid: nix::unistd::Pid) -> EyreResult<()> {
    use color_eyre::eyre::WrapErr;
    use nix::sys::signal::{kill, Signal};

    kill(pid, Signal::SIGUSR1).wrap_err_with(|| format!("failed to send SIGUSR1 to process {pid}"))
}

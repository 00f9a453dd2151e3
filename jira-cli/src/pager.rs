// ABOUTME: Scoped pager sink for rendered output
// ABOUTME: Guarantees the pager process is reaped on every exit path

use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};

use crate::constants::ui;
use crate::output::RenderError;

/// Run `render` against a scoped output sink.
///
/// When stdout is a terminal the sink is the configured pager (explicit
/// argument, then `$PAGER`, then `less`); otherwise output goes straight
/// to stdout. The pager child is spawned before rendering starts and is
/// always waited on, even when rendering fails partway. The user closing
/// the pager early surfaces as a broken pipe, which is a normal exit,
/// not an error.
pub fn with_pager<F>(pager: Option<&str>, render: F) -> Result<(), RenderError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), RenderError>,
{
    if !io::stdout().is_terminal() {
        return render_to_stdout(render);
    }

    let pager_env = std::env::var("PAGER").ok();
    let command_line = pager
        .or(pager_env.as_deref())
        .unwrap_or(ui::DEFAULT_PAGER)
        .trim()
        .to_string();

    // An empty or "cat" pager means "no paging".
    if command_line.is_empty() || command_line == "cat" {
        return render_to_stdout(render);
    }

    let mut parts = command_line.split_whitespace();
    let program = parts.next().unwrap_or(ui::DEFAULT_PAGER);
    let mut command = Command::new(program);
    command.args(parts).stdin(Stdio::piped());
    if program == "less" && std::env::var_os("LESS").is_none() {
        command.env("LESS", ui::DEFAULT_LESS_FLAGS);
    }

    let mut child = command.spawn().map_err(RenderError::Io)?;

    let render_result = match child.stdin.take() {
        Some(mut stdin) => {
            let result = render(&mut stdin).and_then(|_| stdin.flush().map_err(RenderError::Io));
            drop(stdin); // close the pipe so the pager sees EOF
            result
        }
        None => Err(RenderError::Io(io::Error::other(
            "pager stdin was not captured",
        ))),
    };

    // Reap the pager before deciding the outcome; otherwise an early
    // render error leaves the terminal owned by an orphaned child.
    let wait_result = child.wait();

    match render_result {
        Err(RenderError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e),
        Ok(()) => {
            let status = wait_result.map_err(RenderError::Io)?;
            if !status.success() {
                log::debug!("pager exited with {}", status);
            }
            Ok(())
        }
    }
}

fn render_to_stdout<F>(render: F) -> Result<(), RenderError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), RenderError>,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let result = render(&mut lock).and_then(|_| lock.flush().map_err(RenderError::Io));
    match result {
        Err(RenderError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution with stdout and stderr merged into one pipe.

use std::io::{self, Read, Write};
use std::process::{ChildStdin, Command, Stdio};

/// Output of a finished subprocess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Interleaved stdout and stderr, decoded as lossy UTF-8.
    pub text: String,

    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CapturedOutput {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run a command to completion and capture its merged output.
///
/// Stdin is connected to `/dev/null`.
pub fn capture(command: Command) -> io::Result<CapturedOutput> {
    capture_with_input(command, None)
}

/// Run a command to completion, feeding `input` to its stdin.
///
/// Input is written from a scoped thread while the output pipe is drained,
/// and stdin is closed afterwards so the child sees EOF. With `None`, stdin
/// is connected to `/dev/null`. Blocks until the child exits and every writer
/// of the output pipe is gone. The child is reaped on every error path after
/// spawning.
pub fn capture_with_input(
    mut command: Command,
    input: Option<&[u8]>,
) -> io::Result<CapturedOutput> {
    let (mut reader, writer) = os_pipe::pipe()?;
    let writer_clone = writer.try_clone()?;

    command.stdout(writer).stderr(writer_clone);
    command.stdin(if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = command.spawn()?;
    // The command still holds our copies of the pipe writers.
    drop(command);

    let stdin = child.stdin.take();
    let name = program.as_str();
    let drained = std::thread::scope(|scope| {
        let feeder = stdin
            .zip(input)
            .map(|(stdin, bytes)| scope.spawn(move || feed_stdin(stdin, bytes, name)));

        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        if read.is_err() {
            // Unblocks a feeder stuck on a full stdin pipe
            let _ = child.kill();
        }

        let fed = match feeder {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked"))),
            None => Ok(()),
        };
        read.and(fed).map(|_| raw)
    });

    let raw = match drained {
        Ok(raw) => raw,
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }
    };
    let status = child.wait()?;

    let text = match String::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(%program, "output is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    tracing::debug!(%program, code = ?status.code(), bytes = text.len(), "captured output");

    Ok(CapturedOutput {
        text,
        code: status.code(),
    })
}

/// Write `bytes` to the child's stdin and close it.
fn feed_stdin(mut stdin: ChildStdin, bytes: &[u8], program: &str) -> io::Result<()> {
    match stdin.write_all(bytes) {
        Ok(()) => Ok(()),
        // Child exited without reading its input
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!(%program, "stdin closed before input was written");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

//! Line input for the REPL
//!
//! Stdin is read on a dedicated thread and forwarded over a channel so the
//! session loop can select between user input and clock ticks.

use std::io::Write;

use tokio::sync::mpsc;

/// Spawn the stdin reader. The channel closes when stdin reaches EOF.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if tx.send(line.trim_end().to_string()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    rx
}

pub fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

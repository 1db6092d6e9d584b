use std::io::{self, BufRead, IsTerminal, Write};

/// Wait for Enter before exiting, but only when someone is at the keyboard.
pub fn wait_for_enter(enabled: bool) -> io::Result<()> {
    let stdin = io::stdin();
    if !should_pause(enabled, stdin.is_terminal()) {
        return Ok(());
    }

    print!("\nPress Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(())
}

fn should_pause(enabled: bool, interactive: bool) -> bool {
    enabled && interactive
}

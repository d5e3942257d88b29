/// Orthoview Terminal - static preview of the projection explorer
///
/// Prints the XY diagram, legend and projection table once, sized to the
/// current terminal.

use std::io::{stdout, IsTerminal};

use anyhow::Context;
use crossterm::terminal;
use orthoview_terminal::TerminalPreview;

const FALLBACK_SIZE: (u16, u16) = (100, 32);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (cols, rows) = if stdout().is_terminal() {
        terminal::size().unwrap_or_else(|e| {
            log::warn!("could not query terminal size, using {FALLBACK_SIZE:?}: {e}");
            FALLBACK_SIZE
        })
    } else {
        FALLBACK_SIZE
    };

    let mut preview = TerminalPreview::new(cols, rows);
    preview
        .render(&mut stdout().lock())
        .context("failed to write preview to stdout")?;
    Ok(())
}

/// Orthoview Page - writes the projection explorer HTML document to stdout
///
/// Usage: orthoview-page > index.html

use std::io::{self, Write};

use anyhow::Context;
use orthoview_web::Page;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let page = Page::default();
    let html = page.to_string();
    log::info!("rendered {} points into {} bytes of HTML", page.points.len(), html.len());

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .context("failed to write page to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

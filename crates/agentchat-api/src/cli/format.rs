//! `agentchat format` -- run the formatter over a file or stdin.

use std::path::Path;

use tokio::io::AsyncReadExt;

use agentchat_core::format::{format_response, render_blocks};

/// Read raw agent text from `file` (or stdin) and print it formatted.
pub async fn format_input(file: Option<&Path>, blocks: bool) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    if blocks {
        for block in render_blocks(&raw) {
            println!("{}\t{}", console::style(block.kind).cyan(), block.inner_html);
        }
    } else {
        let html = format_response(&raw);
        if !html.is_empty() {
            println!("{html}");
        }
    }

    Ok(())
}

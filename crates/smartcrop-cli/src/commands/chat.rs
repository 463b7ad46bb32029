use anyhow::{Result, anyhow};
use colored::Colorize;
use smartcrop_core::Route;

use super::Runtime;
use crate::prompt::{self, QUIT_COMMAND};
use crate::render;

/// Interactive chat until `/quit`, Ctrl-C or Ctrl-D.
pub async fn run(rt: &Runtime) -> Result<()> {
    let view = rt.app.navigate(Route::Chat.path()).await;
    let chat = view
        .as_chat()
        .ok_or_else(|| anyhow!("chat route did not resolve to the chat view"))?;

    let dict = rt.app.context().locale.dictionary();
    println!("{}", dict.chatbot.bright_magenta().bold());
    println!(
        "{}",
        format!("{} ({} {})", dict.chat_placeholder, QUIT_COMMAND, rt.config.backend_url)
            .bright_black()
    );

    let mut rl = prompt::chat_editor()?;
    loop {
        let Some(line) = prompt::read_line(&mut rl, &format!("{}> ", dict.you))? else {
            break;
        };
        let text = line.trim();
        if text == QUIT_COMMAND {
            break;
        }
        if text.is_empty() {
            continue;
        }

        let reply = tokio::select! {
            reply = chat.send(text) => reply,
            _ = tokio::signal::ctrl_c() => break,
        };
        match reply {
            Some(Ok(reply)) => println!("{}: {}", dict.bot.bright_blue(), reply),
            Some(Err(err)) => {
                tracing::debug!("Chat failed: {}", err);
                render::failure(dict.unavailable);
            }
            None => {}
        }
    }

    rt.app.close().await;
    Ok(())
}

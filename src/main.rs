mod bot;
mod config;
mod countdown;
mod keyboard;
mod messages;
mod quotes;

use crate::config::Settings;
use crate::countdown::Countdown;
use anyhow::Context;
use std::sync::Arc;
use teloxide::Bot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 2. Load Config
    let settings = Settings::new()?;

    // 3. Parse the departure once; it never changes afterwards
    let countdown = Arc::new(Countdown::trip().context("Invalid departure time")?);

    // 4. Start Bot
    let bot = Bot::new(settings.bot_token);
    tracing::info!("Starting Trip Countdown Bot...");

    bot::run_bot(bot, countdown).await?;

    Ok(())
}

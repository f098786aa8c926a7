use crate::countdown::Countdown;
use crate::keyboard::{self, COUNTDOWN_CALLBACK};
use crate::messages::{FALLBACK_TEXT, HELP_TEXT, START_TEXT};
use crate::quotes;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "snake_case", description = "Supported commands:")]
// NOTE: Trailing text is captured and ignored, deep links arrive as "/start <payload>".
enum Command {
    #[command(description = "Start the bot")]
    Start(String),
    #[command(description = "Show help")]
    Help(String),
}

/// One outgoing message of a button press answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub with_menu: bool,
}

pub async fn run_bot(bot: Bot, countdown: Arc<Countdown>) -> anyhow::Result<()> {
    let command_handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command);

    let callback_handler = Update::filter_callback_query().endpoint(handle_callback_query);

    let handler = dptree::entry()
        .branch(command_handler)
        .branch(callback_handler);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![countdown])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    tracing::info!("Command {:?} in chat {}", cmd, chat_id);

    let text = match cmd {
        Command::Start(_) => START_TEXT,
        Command::Help(_) => HELP_TEXT,
    };

    bot.send_message(chat_id, text)
        .reply_markup(keyboard::main_menu())
        .await?;

    Ok(())
}

async fn handle_callback_query(
    bot: Bot,
    q: CallbackQuery,
    countdown: Arc<Countdown>,
) -> ResponseResult<()> {
    // Stop the loading spinner on the button first.
    bot.answer_callback_query(q.id.clone()).await?;

    let chat_id = q
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or_else(|| q.from.id.into());

    tracing::info!(
        "User {} pressed {:?} in chat {}",
        q.from.id,
        q.data.as_deref(),
        chat_id
    );

    if q.data.as_deref() != Some(COUNTDOWN_CALLBACK) {
        tracing::warn!("Unknown callback data: {:?}", q.data.as_deref());
    }

    for reply in callback_replies(q.data.as_deref(), &countdown, Utc::now()) {
        let request = bot.send_message(chat_id, reply.text);
        if reply.with_menu {
            request.reply_markup(keyboard::main_menu()).await?;
        } else {
            request.await?;
        }
    }

    Ok(())
}

/// Messages to send, in order, for a button press carrying `data`.
pub fn callback_replies(
    data: Option<&str>,
    countdown: &Countdown,
    now: DateTime<Utc>,
) -> Vec<Reply> {
    if data != Some(COUNTDOWN_CALLBACK) {
        return vec![Reply {
            text: FALLBACK_TEXT.to_string(),
            with_menu: true,
        }];
    }

    vec![
        Reply {
            text: countdown.text_at(&now),
            with_menu: false,
        },
        Reply {
            text: quotes::random_quote().to_string(),
            with_menu: true,
        },
    ]
}

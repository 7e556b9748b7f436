use std::sync::Arc;

use ingetin::{
    appsettings::AppSettings,
    clock::{Clock, SystemClock},
    notification::{LogNotifier, NotifierGroup, ReminderNotifier},
    start_matching, stop_matching, storage,
    telegram::{TelegramInteractionInterface, TelegramNotifier},
};
use teloxide::{Bot, types::ChatId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = AppSettings::load()?;
    let reminder_storage = storage::from_settings(&settings.storage).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let bot = settings
        .telegram
        .as_ref()
        .map(|telegram| Bot::new(telegram.token.clone()));

    let mut notifiers: Vec<Arc<dyn ReminderNotifier>> = vec![Arc::new(LogNotifier)];
    let notify_chat_id = settings
        .telegram
        .as_ref()
        .and_then(|telegram| telegram.notify_chat_id);
    if let (Some(bot), Some(chat_id)) = (&bot, notify_chat_id) {
        notifiers.push(Arc::new(TelegramNotifier::new(bot.clone(), ChatId(chat_id))));
    }

    let matching = start_matching(
        settings.matcher.interval(),
        reminder_storage.clone(),
        clock.clone(),
        Arc::new(NotifierGroup::new(notifiers)),
    );

    match bot {
        Some(bot) => TelegramInteractionInterface::start(bot, reminder_storage, clock).await,
        None => {
            log::info!("Telegram is not configured, only matching reminders. Press Ctrl+C to stop");
            tokio::signal::ctrl_c().await?;
        }
    }

    let shutdown = stop_matching(matching).await;
    log::info!("Stopped. [matching = {:?}]", shutdown);
    Ok(())
}

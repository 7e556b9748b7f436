mod delivery;

pub use delivery::TelegramNotifier;

use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

use crate::{
    clock::Clock,
    conversation::{self, EXAMPLE_MESSAGE},
    reminder::ReminderId,
    storage::ReminderStorage,
};

type HandlerResult = anyhow::Result<()>;
type HandlerReminderStorageType = Arc<dyn ReminderStorage>;
type HandlerClockType = Arc<dyn Clock>;

pub struct TelegramInteractionInterface;
impl TelegramInteractionInterface {
    pub async fn start(
        bot: Bot,
        reminder_storage: HandlerReminderStorageType,
        clock: HandlerClockType,
    ) {
        log::info!("Starting Telegram interaction interface");

        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![reminder_storage, clock])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await
    }
}

fn schema() -> UpdateHandler<anyhow::Error> {
    Update::filter_message()
        .branch(teloxide::filter_command::<GlobalCommand, _>().endpoint(handle_command))
        .branch(Message::filter_text().endpoint(receive_reminder_text))
        .branch(dptree::endpoint(invalid_message))
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: GlobalCommand,
    reminder_storage: HandlerReminderStorageType,
) -> HandlerResult {
    let reply = match cmd {
        GlobalCommand::Start | GlobalCommand::Help => format!(
            "Tulis pengingatmu, contoh: \"{}\"\n\n{}",
            EXAMPLE_MESSAGE,
            GlobalCommand::descriptions()
        ),
        GlobalCommand::List => {
            let reminders = conversation::list(reminder_storage.as_ref()).await?;
            conversation::list_message(&reminders)
        }
        GlobalCommand::Delete(id) => match id.trim().parse::<ReminderId>() {
            Ok(id) => {
                if reminder_storage.delete(id).await? {
                    log::info!("Deleted reminder. [reminder_id = {}, chat_id = {}]", id, msg.chat.id);
                    format!("Pengingat {} sudah dihapus.", id)
                } else {
                    format!("Pengingat {} nggak ada.", id)
                }
            }
            Err(_) => "Kasih id pengingatnya ya, contoh: /delete 3".to_string(),
        },
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

async fn receive_reminder_text(
    bot: Bot,
    msg: Message,
    text: String,
    reminder_storage: HandlerReminderStorageType,
    clock: HandlerClockType,
) -> HandlerResult {
    let reply = match conversation::remember(&text, reminder_storage.as_ref(), clock.as_ref()).await
    {
        Ok(reminder) => {
            log::info!(
                "Created reminder from chat. [reminder_id = {}, chat_id = {}]",
                reminder.id,
                msg.chat.id
            );
            conversation::confirmation_message(&reminder)
        }
        Err(error) => {
            log::info!("Could not create reminder from chat. [chat_id = {}, error = {}]", msg.chat.id, error);
            conversation::not_understood_message(&error)
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

async fn invalid_message(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Maaf, aku cuma bisa baca pesan teks.",
    )
    .await?;
    Ok(())
}

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "Perintah yang tersedia:"
)]
enum GlobalCommand {
    #[command(hide)]
    Start,
    #[command(description = "tampilkan bantuan")]
    Help,
    #[command(description = "daftar semua pengingat")]
    List,
    #[command(description = "hapus pengingat, contoh: /delete 3")]
    Delete(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_NAME: &str = "ingetin_bot";

    #[test]
    fn commands_are_lowercase() {
        assert!(matches!(
            GlobalCommand::parse("/list", BOT_NAME),
            Ok(GlobalCommand::List)
        ));
        assert!(matches!(
            GlobalCommand::parse("/delete 3", BOT_NAME),
            Ok(GlobalCommand::Delete(id)) if id == "3"
        ));
    }

    #[test]
    fn help_lists_each_command_once() {
        let help = GlobalCommand::descriptions().to_string();

        assert!(!help.contains("/start"));
        assert_eq!(help.matches("tampilkan bantuan").count(), 1);
    }

    #[test]
    fn start_is_still_accepted() {
        assert!(matches!(
            GlobalCommand::parse("/start", BOT_NAME),
            Ok(GlobalCommand::Start)
        ));
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert!(GlobalCommand::parse(EXAMPLE_MESSAGE, BOT_NAME).is_err());
    }
}

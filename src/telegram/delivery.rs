use async_trait::async_trait;
use teloxide::prelude::*;

use crate::notification::{ReminderNotifier, reminder_phrase};

pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReminderNotifier for TelegramNotifier {
    async fn notify(&self, activity: &str) -> anyhow::Result<()> {
        self.bot
            .send_message(self.chat_id, format!("🔔 {}", reminder_phrase(activity)))
            .await?;

        Ok(())
    }
}

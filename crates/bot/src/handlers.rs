use std::sync::Arc;

use serenity::{
    async_trait,
    model::{
        application::interaction::{Interaction, InteractionResponseType},
        channel::Message,
        gateway::Ready,
    },
    prelude::*,
};
use timekeeper_core::models::UserId;
use tracing::{debug, error, info, warn};

use crate::dialog::DialogEngine;
use crate::i18n::{Key, fill};
use crate::menu::{Inbound, Reply};
use crate::outbound::Outbound;

/// Main Discord handler.
///
/// Turns direct messages and button presses into [`Inbound`] events, runs
/// them through the dialog and sends back whatever it replies.
pub struct Handler {
    engine: Arc<DialogEngine>,
    outbound: Arc<dyn Outbound>,
    admin_user_id: Option<UserId>,
}

impl Handler {
    pub fn new(
        engine: Arc<DialogEngine>,
        outbound: Arc<dyn Outbound>,
        admin_user_id: Option<u64>,
    ) -> Self {
        let admin_user_id = admin_user_id.and_then(|id| {
            let converted = UserId::try_from(id).ok();
            if converted.is_none() {
                warn!(admin_user_id = id, "admin user id out of range, notices disabled");
            }
            converted
        });
        Self {
            engine,
            outbound,
            admin_user_id,
        }
    }

    /// Run one event for `user_id` and deliver the replies in order.
    pub async fn dispatch(&self, user_id: UserId, display_name: &str, inbound: Inbound) {
        let turn = self.engine.handle(user_id, inbound).await;

        for reply in &turn.replies {
            if let Err(err) = self.outbound.send(user_id, reply).await {
                error!(user_id, error = %err, "failed to send reply");
                break;
            }
        }

        if turn.first_contact {
            self.notify_admin(user_id, display_name).await;
        }
    }

    async fn notify_admin(&self, user_id: UserId, display_name: &str) {
        let Some(admin) = self.admin_user_id.filter(|admin| *admin != user_id) else {
            return;
        };
        let lang = self.engine.language_of(admin).await;
        let notice = fill(lang, Key::NewUserNotice, &[&user_id.to_string(), display_name]);
        match self.outbound.send(admin, &Reply::text(notice)).await {
            Ok(()) => info!(user_id, "admin notified of new user"),
            Err(err) => warn!(user_id, error = %err, "failed to notify admin"),
        }
    }
}

fn to_user_id(id: serenity::model::id::UserId) -> Option<UserId> {
    UserId::try_from(id.0).ok()
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        if msg.author.bot || msg.guild_id.is_some() {
            return;
        }
        let Some(user_id) = to_user_id(msg.author.id) else {
            warn!(author = msg.author.id.0, "user id out of range");
            return;
        };
        debug!(user_id, "direct message received");
        self.dispatch(user_id, &msg.author.name, Inbound::from_text(&msg.content))
            .await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::MessageComponent(mut component) = interaction else {
            return;
        };
        let Some(user_id) = to_user_id(component.user.id) else {
            warn!(author = component.user.id.0, "user id out of range");
            return;
        };

        if let Err(why) = component
            .create_interaction_response(&ctx.http, |r| {
                r.kind(InteractionResponseType::DeferredUpdateMessage)
            })
            .await
        {
            error!(user_id, "Failed to acknowledge interaction: {:?}", why);
        }

        // a dropdown reports the chosen option; a button is its own token
        let token = component
            .data
            .values
            .first()
            .unwrap_or(&component.data.custom_id);
        let inbound = Inbound::from_token(token);
        if matches!(inbound, Inbound::Confirm { .. }) {
            // a confirmation can only be answered once
            if let Err(why) = component
                .message
                .edit(&ctx.http, |m| m.components(|c| c))
                .await
            {
                warn!(user_id, "Failed to clear confirmation buttons: {:?}", why);
            }
        }

        let name = component.user.name.clone();
        self.dispatch(user_id, &name, inbound).await;
    }
}

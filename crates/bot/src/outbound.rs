use async_trait::async_trait;
use eyre::Result;
use timekeeper_core::models::UserId;

use crate::menu::Reply;

/// Sends replies to a user outside of a request/response cycle.
#[async_trait]
pub trait Outbound: Send + Sync {
    async fn send(&self, user_id: UserId, reply: &Reply) -> Result<()>;
}

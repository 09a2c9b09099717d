use crate::api::Api;
use crate::error::ApiError;
use crate::window::Page;
use echoverse_core::model::ActionResponse;
use echoverse_core::{PostId, UserId};
use tracing::error;

pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// What a block toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    User,
    Post,
}

impl Target {
    pub fn noun(self) -> &'static str {
        match self {
            Target::User => "user",
            Target::Post => "post",
        }
    }

    /// Wording of the confirmation, given the state currently shown.
    pub fn confirm_prompt(self, is_blocked: bool) -> String {
        let verb = if is_blocked { "unblock" } else { "block" };
        format!("Are you sure you want to {verb} this {}?", self.noun())
    }
}

/// Block/unblock toggles. Success reloads the whole page instead of patching it.
pub struct Moderation {
    api: Api,
    page: Page,
}

impl Moderation {
    pub fn new(api: Api, page: Page) -> Self {
        Self { api, page }
    }

    pub async fn toggle_user_block(&self, user_id: UserId, is_blocked: bool) -> bool {
        self.toggle(Target::User, user_id, is_blocked).await
    }

    pub async fn toggle_post_block(&self, post_id: PostId, is_blocked: bool) -> bool {
        self.toggle(Target::Post, post_id, is_blocked).await
    }

    async fn toggle(&self, target: Target, id: u64, is_blocked: bool) -> bool {
        let window = self.page.window();
        if !window.confirm(&target.confirm_prompt(is_blocked)) {
            return false;
        }
        let outcome: Result<ActionResponse, ApiError> = match target {
            Target::User => self.api.toggle_user_block(id).await,
            Target::Post => self.api.toggle_post_block(id).await,
        };
        match outcome {
            Ok(_) => {
                window.reload();
                true
            }
            // an error status without a JSON body gets the generic alert
            Err(err @ (ApiError::Rejected(_) | ApiError::Server { message: Some(_), .. })) => {
                let fallback = format!("Failed to update {}", target.noun());
                window.alert(&format!("Error: {}", err.server_message().unwrap_or(&fallback)));
                false
            }
            Err(err) => {
                error!(target = target.noun(), id, %err, "block toggle failed");
                window.alert(GENERIC_FAILURE);
                false
            }
        }
    }
}

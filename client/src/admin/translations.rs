use crate::api::Api;
use crate::window::Page;
use echoverse_core::render::{self, admin};
use echoverse_core::{AdminSection, TabEvent};
use tracing::error;

pub const CONFIRM_SYNC: &str = "This will overwrite dictionary.json with data from Google Sheets. \
Make sure your sheet has data before syncing! Continue?";

/// The languages tab: spreadsheet preview, dictionary dump, and the overwrite sync.
///
/// Results land in the `languages_display` region; nothing here alerts.
pub struct Translations {
    api: Api,
    page: Page,
}

impl Translations {
    pub fn new(api: Api, page: Page) -> Self {
        Self { api, page }
    }

    pub fn show_section(&self, section: AdminSection, event: TabEvent<'_>) {
        self.page.update(|doc| doc.show_section(section, event));
    }

    pub async fn load_languages(&self) -> bool {
        self.display(admin::loading());
        match self.api.languages().await {
            Ok(data) => {
                self.display(admin::languages(&data));
                true
            }
            Err(err) if err.is_server_reported() => {
                self.display(admin::load_failed(
                    err.server_message().unwrap_or("Failed to load languages"),
                ));
                false
            }
            Err(err) => {
                error!(%err, "error loading languages");
                self.display(render::error(
                    "An error occurred. Please check if Google Spreadsheet key is configured.",
                ));
                false
            }
        }
    }

    pub async fn load_dictionary(&self) -> bool {
        self.display(admin::loading());
        match self.api.dictionary().await {
            Ok(data) => {
                self.display(admin::dictionary(&data));
                true
            }
            Err(err) if err.is_server_reported() => {
                self.display(admin::load_failed(
                    err.server_message().unwrap_or("Failed to load dictionary"),
                ));
                false
            }
            Err(err) => {
                error!(%err, "error loading dictionary");
                self.display(render::error("An error occurred while loading dictionary.json."));
                false
            }
        }
    }

    /// Overwrites the server dictionary from the sheet, after confirmation.
    pub async fn sync(&self) -> bool {
        if !self.page.window().confirm(CONFIRM_SYNC) {
            return false;
        }
        self.display(admin::syncing());
        match self.api.sync_languages().await {
            Ok(data) => {
                self.display(admin::sync_succeeded(data.message.as_deref().unwrap_or_default()));
                true
            }
            Err(err) if err.is_server_reported() => {
                self.display(admin::sync_failed(
                    err.server_message().unwrap_or("Failed to sync languages"),
                    "Please add data to your Google Sheet and try again.",
                ));
                false
            }
            Err(err) => {
                error!(%err, "error syncing languages");
                self.display(admin::sync_failed(
                    "An error occurred while syncing.",
                    "Please check the logs for details.",
                ));
                false
            }
        }
    }

    fn display(&self, html: String) {
        self.page.update(|doc| doc.languages_display.show(html));
    }
}

use std::sync::Arc;

use crate::actions::discord::DiscordNotifier;
use crate::actions::sheet::SheetClient;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sheet: Option<SheetClient>,
    pub notifier: DiscordNotifier,
}

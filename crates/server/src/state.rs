use std::sync::Arc;

use reelscout_core::{Config, ImageConfig, MovieApp, SanitizedConfig};

use crate::api::WsBroadcaster;
use crate::presenter::ViewPresenter;

/// Shared application state
pub struct AppState {
    config: Config,
    images: ImageConfig,
    app: Arc<MovieApp>,
    view: Arc<ViewPresenter>,
}

impl AppState {
    pub fn new(config: Config, app: Arc<MovieApp>, view: Arc<ViewPresenter>) -> Self {
        Self {
            images: config.catalog.images(),
            config,
            app,
            view,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn images(&self) -> &ImageConfig {
        &self.images
    }

    pub fn app(&self) -> &MovieApp {
        &self.app
    }

    pub fn view(&self) -> &ViewPresenter {
        &self.view
    }

    pub fn ws_broadcaster(&self) -> &WsBroadcaster {
        self.view.broadcaster()
    }
}

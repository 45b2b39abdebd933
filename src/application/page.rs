// Page lifecycle - Idle -> Loading -> {Succeeded, Failed} -> Idle
use async_trait::async_trait;

use crate::application::page_surface::PageSurface;
use crate::application::weather_api::WeatherApi;
use crate::error::Result;

#[async_trait]
pub trait PageController: Send + Sync {
    fn name(&self) -> &'static str;

    /// The fixed message shown when the page fails to load.
    fn failure_message(&self) -> &'static str;

    /// Fetch and render into the surface. Either every primary field is
    /// written or, on error, none are.
    async fn load(&self, api: &dyn WeatherApi, surface: &mut dyn PageSurface) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Succeeded,
    Failed,
}

/// Run one page load against injected collaborators.
///
/// The loading indicator is hidden on both outcomes. Error details go to the
/// log; the surface only ever shows the controller's fixed message.
pub async fn init_page(
    controller: &dyn PageController,
    api: &dyn WeatherApi,
    surface: &mut dyn PageSurface,
) -> LoadOutcome {
    surface.set_loading(true);
    surface.clear_error();

    match controller.load(api, surface).await {
        Ok(()) => {
            surface.set_loading(false);
            tracing::debug!(page = controller.name(), "page loaded");
            LoadOutcome::Succeeded
        }
        Err(e) => {
            tracing::error!(
                page = controller.name(),
                request_failure = e.is_request_failure(),
                error = %e,
                "page load failed"
            );
            surface.set_loading(false);
            surface.show_error(controller.failure_message());
            LoadOutcome::Failed
        }
    }
}

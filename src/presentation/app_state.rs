// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardHandle;
use crate::domain::view::RenderedView;
use crate::infrastructure::locale::Locales;
use std::sync::Arc;
use tokio::sync::watch;

pub struct AppState {
    pub dashboard: DashboardHandle,
    pub view: watch::Receiver<Option<RenderedView>>,
    pub locales: Arc<Locales>,
}

impl AppState {
    pub fn latest_view(&self) -> Option<RenderedView> {
        self.view.borrow().clone()
    }
}

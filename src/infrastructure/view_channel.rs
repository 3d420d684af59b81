// Watch-channel render sink - publishes each frame to the HTTP layer
use crate::application::dashboard_service::RenderSink;
use crate::domain::view::RenderedView;
use tokio::sync::watch;

/// Production rendering collaborator: keeps only the latest view, which
/// `GET /view` serves as JSON.
pub struct ChannelRenderSink {
    tx: watch::Sender<Option<RenderedView>>,
}

impl ChannelRenderSink {
    pub fn channel() -> (Self, watch::Receiver<Option<RenderedView>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }
}

impl RenderSink for ChannelRenderSink {
    fn render(&self, view: &RenderedView) {
        let _ = self.tx.send(Some(view.clone()));
    }
}

// Dashboard actor - Single owner of the mutable dashboard state
//
// Commands and playback ticks are serialized through one task, so every
// render corresponds to the most recently applied trigger.
use crate::application::playback::PlaybackController;
use crate::application::{map_composer, slice_resolver, stats_formatter};
use crate::domain::dataset::Dataset;
use crate::domain::map::{ColorBounds, Viewport};
use crate::domain::time_slice::{MONTH_ORDER, TimeSliceKey};
use crate::domain::view::RenderedView;
use crate::infrastructure::locale::Locales;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// Rendering collaborator: consumes a composed view, returns nothing.
pub trait RenderSink: Send + Sync {
    fn render(&self, view: &RenderedView);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectSlice(TimeSliceKey),
    TogglePlayback,
    ToggleStations,
    SetLanguage(String),
}

/// Cloneable handle used by the HTTP layer to issue commands.
#[derive(Clone)]
pub struct DashboardHandle {
    commands: mpsc::Sender<Command>,
}

impl DashboardHandle {
    pub async fn select_slice(&self, key: TimeSliceKey) -> anyhow::Result<()> {
        self.send(Command::SelectSlice(key)).await
    }

    pub async fn toggle_playback(&self) -> anyhow::Result<()> {
        self.send(Command::TogglePlayback).await
    }

    pub async fn toggle_stations(&self) -> anyhow::Result<()> {
        self.send(Command::ToggleStations).await
    }

    pub async fn set_language(&self, code: String) -> anyhow::Result<()> {
        self.send(Command::SetLanguage(code)).await
    }

    async fn send(&self, command: Command) -> anyhow::Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| anyhow::anyhow!("dashboard task has shut down"))
    }
}

/// The only mutable state in the system.
struct DashboardState {
    current: TimeSliceKey,
    stations_visible: bool,
    locale: String,
}

pub struct DashboardService {
    dataset: Arc<Dataset>,
    locales: Arc<Locales>,
    viewport: Viewport,
    tick_period: Duration,
    sink: Arc<dyn RenderSink>,
    state: DashboardState,
    playback: PlaybackController,
}

impl DashboardService {
    /// Spawns the actor and renders the initial slice (first month, idle,
    /// stations visible, fallback locale).
    pub fn spawn(
        dataset: Arc<Dataset>,
        locales: Arc<Locales>,
        viewport: Viewport,
        tick_period: Duration,
        sink: Arc<dyn RenderSink>,
    ) -> DashboardHandle {
        let (tx, rx) = mpsc::channel(32);
        let locale = locales.fallback_code().to_string();
        let service = Self {
            dataset,
            locales,
            viewport,
            tick_period,
            sink,
            state: DashboardState {
                current: MONTH_ORDER[0],
                stations_visible: true,
                locale,
            },
            playback: PlaybackController::new(),
        };
        tokio::spawn(service.run(rx));
        DashboardHandle { commands: tx }
    }

    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        let mut ticker = interval(self.tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.render_current();

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.apply(command, &mut ticker),
                    None => break,
                },
                _ = ticker.tick(), if self.playback.is_playing() => {
                    self.state.current = self.state.current.next_month();
                    self.render_current();
                }
            }
        }
    }

    fn apply(&mut self, command: Command, ticker: &mut Interval) {
        match command {
            Command::SelectSlice(key) => {
                // Resyncs the auto-play cycle position; the timer's cadence
                // is left alone, so the next tick advances from here.
                self.state.current = key;
                self.render_current();
            }
            Command::TogglePlayback => {
                if self.playback.is_playing() {
                    self.playback.stop();
                } else if self.playback.start() {
                    // First auto-advance fires one full period from now.
                    ticker.reset();
                }
                self.render_current();
            }
            Command::ToggleStations => {
                self.state.stations_visible = !self.state.stations_visible;
                self.render_current();
            }
            Command::SetLanguage(code) => {
                self.state.locale = self.locales.resolve_code(&code).to_string();
                self.render_current();
            }
        }
    }

    /// Resolves, composes and publishes the current slice. A slice that
    /// cannot be resolved leaves the previously published view untouched.
    fn render_current(&self) {
        let key = self.state.current;
        let resolved = match slice_resolver::resolve(&self.dataset, key) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(
                    "keeping previous view, slice {} unavailable: {}",
                    key.code(),
                    e
                );
                return;
            }
        };

        let catalog = self.locales.get(&self.state.locale);
        let layers = map_composer::compose(
            resolved.field,
            &resolved.stations,
            self.state.stations_visible,
            ColorBounds::GLOBAL,
        );
        let stats = stats_formatter::format(resolved.stats, catalog);

        let view = RenderedView {
            slice: key,
            slice_label: catalog.month_label(key),
            playing: self.playback.is_playing(),
            locale: self.state.locale.clone(),
            viewport: self.viewport.clone(),
            layers,
            stats,
        };
        self.sink.render(&view);
    }
}

//! Main application state and UI loop
//!
//! Contains the App struct, the reload entry point and key handling

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, MAX_ACTIVITY_LOGS, UI_POLL_INTERVAL_MS};
use crate::directory::ImageHost;
use crate::directory::error::ImageLoadError;
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event as ActivityEvent, EventType};
use crate::loader::{LoadState, ProfileLoader};
use crate::logging::LogLevel;
use crate::store::{LoadTicket, ProfileStore};
use crate::ui::renderer::render_dashboard;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Results reported back to the UI loop by spawned load tasks.
#[derive(Debug)]
enum LoadMessage {
    Finished(LoadTicket, LoadState),
    ImageFailed(LoadTicket, ImageLoadError),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The directory deployment profiles are read from.
    environment: Environment,

    loader: ProfileLoader,

    /// Probes the avatar of each loaded profile.
    image_host: Arc<dyn ImageHost>,

    /// The single state cell the view renders.
    store: ProfileStore,

    /// Receives activity events from the loader.
    event_receiver: mpsc::Receiver<ActivityEvent>,

    load_sender: mpsc::Sender<LoadMessage>,
    load_receiver: mpsc::Receiver<LoadMessage>,

    /// Activity logs for display, oldest first
    activity_logs: VecDeque<ActivityEvent>,

    error_classifier: ErrorClassifier,

    /// Number of loads issued, including the initial one.
    loads: u64,

    /// Animation tick counter
    tick: usize,

    /// Whether to paint a background color
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        loader: ProfileLoader,
        image_host: Arc<dyn ImageHost>,
        event_receiver: mpsc::Receiver<ActivityEvent>,
        ui_config: UIConfig,
    ) -> Self {
        let (load_sender, load_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            start_time: Instant::now(),
            environment,
            loader,
            image_host,
            store: ProfileStore::new(),
            event_receiver,
            load_sender,
            load_receiver,
            activity_logs: VecDeque::new(),
            error_classifier: ErrorClassifier::new(),
            loads: 0,
            tick: 0,
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Start a new load. Used on startup and for every user-triggered reload.
    ///
    /// Enters `Loading` immediately; the result arrives through [`App::update`].
    pub fn reload(&mut self) {
        let ticket = self.store.begin_load();
        self.loads += 1;
        self.add_to_activity_log(ActivityEvent::loader_with_level(
            format!("Requesting profile #{}", ticket.sequence()),
            EventType::Refresh,
            LogLevel::Info,
        ));

        let loader = self.loader.clone();
        let image_host = self.image_host.clone();
        let sender = self.load_sender.clone();
        tokio::spawn(async move {
            let state = loader.load_random_profile().await;
            let image_url = state.profile().map(|profile| profile.image_url.clone());
            if sender
                .send(LoadMessage::Finished(ticket, state))
                .await
                .is_err()
            {
                return;
            }
            if let Some(url) = image_url {
                if let Err(e) = image_host.check_image(&url).await {
                    let _ = sender.send(LoadMessage::ImageFailed(ticket, e)).await;
                }
            }
        });
    }

    /// Reload unless a load is already in flight (the control is disabled then).
    pub fn request_reload(&mut self) -> bool {
        if self.store.state().is_loading() {
            return false;
        }
        self.reload();
        true
    }

    /// Advance the animation and drain pending events and load results.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Ok(event) = self.event_receiver.try_recv() {
            self.add_to_activity_log(event);
        }

        while let Ok(message) = self.load_receiver.try_recv() {
            self.handle_load_message(message);
        }
    }

    fn handle_load_message(&mut self, message: LoadMessage) {
        match message {
            LoadMessage::Finished(ticket, state) => {
                if !self.store.complete(ticket, state) {
                    log::debug!("Discarded stale result of load #{}", ticket.sequence());
                }
            }
            LoadMessage::ImageFailed(ticket, error) => {
                if self.store.image_failed(ticket) {
                    let event = ActivityEvent::image_probe_with_level(
                        format!("Avatar unavailable ({}), showing placeholder", error),
                        EventType::Error,
                        self.error_classifier.classify_image_error(&error),
                    );
                    event.log();
                    self.add_to_activity_log(event);
                }
            }
        }
    }

    fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn activity_logs(&self) -> &VecDeque<ActivityEvent> {
        &self.activity_logs
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn loads(&self) -> u64 {
        self.loads
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn with_background_color(&self) -> bool {
        self.with_background_color
    }
}

/// Runs the application UI in a loop, handling key events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Initial mount
    app.reload();

    loop {
        app.update();
        terminal.draw(|f| render_dashboard(f, &app))?;

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') | KeyCode::Enter => {
                        app.request_reload();
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::error::DirectoryError;
    use crate::directory::{Directory, MockDirectory, MockImageHost};
    use crate::profile::DirectoryUser;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app_with(directory: MockDirectory, image_host: MockImageHost) -> App {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let directory: Arc<dyn Directory> = Arc::new(directory);
        let loader =
            ProfileLoader::with_rng(directory, StdRng::seed_from_u64(1)).with_events(event_sender);
        App::new(
            Environment::Production,
            loader,
            Arc::new(image_host),
            event_receiver,
            UIConfig::default(),
        )
    }

    /// Pump the app until `done` holds, or fail after two seconds.
    async fn update_until(app: &mut App, done: impl Fn(&App) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while !done(&*app) {
            assert!(Instant::now() < deadline, "app did not settle in time");
            tokio::time::sleep(Duration::from_millis(10)).await;
            app.update();
        }
    }

    #[tokio::test]
    async fn test_reload_resolves_to_directory_profile() {
        let mut directory = MockDirectory::new();
        directory.expect_fetch_users().returning(|| {
            Ok(vec![DirectoryUser {
                name: "Ada Lovelace".to_string(),
                email: "ada@x.com".to_string(),
                phone: "555-0001".to_string(),
            }])
        });
        let mut image_host = MockImageHost::new();
        image_host.expect_check_image().returning(|_| Ok(()));

        let mut app = app_with(directory, image_host);
        app.reload();
        assert!(app.store().state().is_loading());
        assert!(!app.request_reload(), "reload is disabled while loading");

        update_until(&mut app, |app| !app.store().state().is_loading()).await;
        let profile = app.store().state().profile().unwrap();
        assert_eq!(profile.email, "ada@x.com");
        assert_eq!(app.loads(), 1);
    }

    #[tokio::test]
    async fn test_broken_avatar_switches_to_placeholder() {
        let mut directory = MockDirectory::new();
        directory.expect_fetch_users().returning(|| {
            Ok(vec![DirectoryUser {
                name: "Zoe".to_string(),
                email: "zoe@x.com".to_string(),
                phone: "555-0002".to_string(),
            }])
        });
        let mut image_host = MockImageHost::new();
        image_host
            .expect_check_image()
            .times(1)
            .returning(|_| Err(ImageLoadError::Status(404)));

        let mut app = app_with(directory, image_host);
        app.reload();

        update_until(&mut app, |app| {
            app.store()
                .image()
                .is_some_and(|image| image.fallback_applied())
        })
        .await;
        assert_eq!(
            app.store().image().unwrap().src(),
            "https://via.placeholder.com/150?text=Zoe"
        );
        assert!(
            app.activity_logs()
                .iter()
                .any(|event| event.msg.contains("showing placeholder"))
        );
    }

    #[tokio::test]
    async fn test_directory_failure_is_logged_and_recovered() {
        let mut directory = MockDirectory::new();
        directory.expect_fetch_users().returning(|| {
            Err(DirectoryError::Http {
                status: 500,
                message: "down".to_string(),
            })
        });
        let mut image_host = MockImageHost::new();
        image_host.expect_check_image().returning(|_| Ok(()));

        let mut app = app_with(directory, image_host);
        app.reload();

        update_until(&mut app, |app| !app.store().state().is_loading()).await;
        assert!(matches!(
            app.store().state(),
            LoadState::Loaded {
                using_fallback: true,
                ..
            }
        ));

        update_until(&mut app, |app| {
            app.activity_logs()
                .iter()
                .any(|event| event.event_type == EventType::Fallback)
        })
        .await;
        assert!(app.request_reload());
        assert_eq!(app.loads(), 2);
    }
}

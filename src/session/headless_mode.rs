//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::directory::ImageHost;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::init_headless_logger;
use crate::store::ProfileStore;
use crate::ui::view::ProfileView;
use std::error::Error;

/// Runs the application in headless mode
///
/// Loads `count` profiles one after another and prints each rendered view,
/// interleaved with activity events.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `count` - Number of profiles to load
/// * `check_images` - Probe each avatar and substitute the placeholder on failure
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(
    mut session: SessionData,
    count: u32,
    check_images: bool,
) -> Result<(), Box<dyn Error>> {
    init_headless_logger();
    print_session_starting("headless", &session.environment);

    let error_classifier = ErrorClassifier::new();
    let mut store = ProfileStore::new();
    for _ in 0..count {
        let ticket = store.begin_load();
        let state = session.loader.load_random_profile().await;
        let image_url = state.profile().map(|profile| profile.image_url.clone());
        store.complete(ticket, state);

        if let (true, Some(url)) = (check_images, image_url) {
            if let Err(e) = session.client.check_image(&url).await {
                if store.image_failed(ticket) {
                    let event = Event::image_probe_with_level(
                        format!("Avatar unavailable ({}), showing placeholder", e),
                        EventType::Error,
                        error_classifier.classify_image_error(&e),
                    );
                    event.log();
                    if event.should_display() {
                        println!("{}", event);
                    }
                }
            }
        }

        // The loader publishes at most two events per load, well under the queue size
        while let Ok(event) = session.event_receiver.try_recv() {
            if event.should_display() {
                println!("{}", event);
            }
        }

        println!("{}\n", ProfileView::from_state(store.state(), store.image()));
    }

    print_session_exit_success();
    Ok(())
}

//! Session setup and initialization

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::directory::{Directory, DirectoryClient};
use crate::environment::Environment;
use crate::events::Event;
use crate::loader::ProfileLoader;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Directory deployment in use
    pub environment: Environment,
    /// HTTP client, shared by the loader and the image probe
    pub client: Arc<DirectoryClient>,
    /// Loader publishing into `event_receiver`
    pub loader: ProfileLoader,
    /// Activity events from the loader
    pub event_receiver: mpsc::Receiver<Event>,
}

/// Sets up a viewer session
///
/// # Arguments
/// * `environment` - Directory deployment to read from
/// * `request_timeout` - Whole-request timeout for directory calls
/// * `seed` - Fixed seed for reproducible selection; entropy when `None`
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(
    environment: Environment,
    request_timeout: Duration,
    seed: Option<u64>,
) -> Result<SessionData, Box<dyn Error>> {
    let client = Arc::new(DirectoryClient::new(environment.clone(), request_timeout)?);
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);

    let directory: Arc<dyn Directory> = client.clone();
    let loader = match seed {
        Some(seed) => ProfileLoader::with_rng(directory, StdRng::seed_from_u64(seed)),
        None => ProfileLoader::new(directory),
    }
    .with_events(event_sender);

    Ok(SessionData {
        environment,
        client,
        loader,
        event_receiver,
    })
}

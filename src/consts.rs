pub mod cli_consts {
    //! Viewer Configuration Constants
    //!
    //! Endpoints, timeouts and the fixed datasets used by the profile loader,
    //! organized by functional area.

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    /// Buffer size of the channel carrying load results back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 32;

    /// How long the UI loop waits for a key press before redrawing (milliseconds).
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod endpoints {
        /// Default remote directory returning a JSON array of users.
        pub const DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";

        /// Initials avatar service; the first name is appended followed by `.svg`.
        pub const AVATAR_BASE_URL: &str = "https://avatars.dicebear.com/api/initials/";

        /// Placeholder image service; the display name is appended as the `text` query.
        pub const PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com/150?text=";

        /// Environment variable overriding the directory URL.
        pub const DIRECTORY_URL_ENV: &str = "PROFILE_DIRECTORY_URL";
    }

    pub mod timeouts {
        use std::time::Duration;

        /// Whole-request timeout for directory calls (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Connection establishment timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Image probes are advisory, so they get a shorter budget (seconds)
        pub const IMAGE_PROBE_TIMEOUT_SECS: u64 = 5;

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn image_probe_timeout() -> Duration {
            Duration::from_secs(IMAGE_PROBE_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // USER-FACING TEXT
    // =============================================================================

    pub mod messages {
        /// Warning shown whenever the sample dataset replaces remote data.
        pub const FALLBACK_WARNING: &str =
            "JSONPlaceholder API is unavailable. Using local sample data instead.";

        /// Secondary notice rendered on the card of a sample profile.
        pub const SAMPLE_DATA_NOTICE: &str = "Note: Using sample data due to API unavailability";

        pub const LOADING: &str = "Loading...";
        pub const RELOAD_LABEL: &str = "Get New Employee";
    }

    // =============================================================================
    // FIXED DATASETS
    // =============================================================================

    /// City/country pairs assigned to remote users, whose own addresses are not realistic.
    pub const LOCATIONS: [(&str, &str); 10] = [
        ("New York", "USA"),
        ("London", "UK"),
        ("Paris", "France"),
        ("Tokyo", "Japan"),
        ("Sydney", "Australia"),
        ("Berlin", "Germany"),
        ("Toronto", "Canada"),
        ("Mumbai", "India"),
        ("São Paulo", "Brazil"),
        ("Cape Town", "South Africa"),
    ];

    /// A fully-formed sample employee, stored as static text.
    #[derive(Debug, Clone, Copy)]
    pub struct SampleEmployee {
        pub first: &'static str,
        pub last: &'static str,
        pub email: &'static str,
        pub phone: &'static str,
        pub city: &'static str,
        pub country: &'static str,
        pub image_url: &'static str,
    }

    /// Local dataset used when the remote directory cannot be used.
    pub const SAMPLE_EMPLOYEES: [SampleEmployee; 4] = [
        SampleEmployee {
            first: "John",
            last: "Doe",
            email: "john.doe@example.com",
            phone: "(555) 123-4567",
            city: "New York",
            country: "United States",
            image_url: "https://via.placeholder.com/150?text=John",
        },
        SampleEmployee {
            first: "Jane",
            last: "Smith",
            email: "jane.smith@example.com",
            phone: "(555) 987-6543",
            city: "London",
            country: "United Kingdom",
            image_url: "https://via.placeholder.com/150?text=Jane",
        },
        SampleEmployee {
            first: "Michael",
            last: "Johnson",
            email: "michael.johnson@example.com",
            phone: "(555) 246-8135",
            city: "Sydney",
            country: "Australia",
            image_url: "https://via.placeholder.com/150?text=Michael",
        },
        SampleEmployee {
            first: "Emily",
            last: "Williams",
            email: "emily.williams@example.com",
            phone: "(555) 369-1472",
            city: "Toronto",
            country: "Canada",
            image_url: "https://via.placeholder.com/150?text=Emily",
        },
    ];
}

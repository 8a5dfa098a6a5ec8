//! CLI command messaging system
//!
//! Consistent output for one-shot commands such as `set-directory` and `reset`.

const COLOR_INFO: &str = "\x1b[1;33m";
const COLOR_WARN: &str = "\x1b[1;91m";
const COLOR_ERROR: &str = "\x1b[1;31m";
const COLOR_SUCCESS: &str = "\x1b[1;32m";
const COLOR_RESET: &str = "\x1b[0m";

fn print_tagged(color: &str, tag: &str, title: &str, details: &str) {
    print!("{}[{}]{} {}", color, tag, COLOR_RESET, title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

pub fn print_info(title: &str, details: &str) {
    print_tagged(COLOR_INFO, "INFO", title, details);
}

pub fn print_warn(title: &str, details: &str) {
    print_tagged(COLOR_WARN, "WARN", title, details);
}

/// Errors go to stderr so scripted callers can tell them apart.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}[ERROR]{} {}", COLOR_ERROR, COLOR_RESET, title);
    if let Some(details) = details {
        eprintln!("{}[ERROR]{} Details: {}", COLOR_ERROR, COLOR_RESET, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_tagged(COLOR_SUCCESS, "SUCCESS", title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

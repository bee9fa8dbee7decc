use std::fs::OpenOptions;
use std::io::Write;
use chrono::Utc;

/// Append one line per chat request to the request log.
/// The log is an operator convenience, a write failure never fails the request.
pub fn log_request(outcome: &str, model: &str, elapsed_ms: u128) {

    // Use /app/requests.log in Docker, ./requests.log locally
    let log_path = std::env::var("LOG_PATH")
        .unwrap_or_else(|_| "./requests.log".to_string());

    let line = format!(
        "{} | {:14} | {:30} | {:6} ms\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S"),
        outcome,
        model,
        elapsed_ms
    );

    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(mut file) => {
            let _ = file.write_all(line.as_bytes());
        }
        Err(e) => eprintln!("Failed to write to log file {}: {}", log_path, e),
    }

}

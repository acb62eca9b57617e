//! `issuedeck` (deck) - Issue-tracking dashboard over an in-memory mock store
//!
//! Everything is memory-resident: each run seeds the same sample data,
//! applies one operation, and exits. The single-threaded runtime mirrors
//! the cooperative event loop the dashboard runs on.

use issuedeck::run;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Global Tokio runtime.
//!
//! eframe owns the main thread and does not run an async executor. The binary
//! enters this runtime before creating the window so that [`tokio::spawn`]
//! from the UI thread (view sync, hold ticker) lands here:
//!
//! ```rust,no_run
//! use swap_terminal::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! tokio::spawn(async {
//!     // runs on the worker threads
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for background tasks")
});

#![doc(test(attr(deny(warnings))))]

//! Trip Core implements the state, content, and step orchestration layer of
//! a multi-step trip planner wizard. The rendering/event layer (modal chrome,
//! animations, widget initialization) lives outside this crate and drives it
//! through [`session::WizardSession`].

pub mod catalog;
pub mod config;
pub mod content;
pub mod errors;
pub mod session;
pub mod state;
pub mod steps;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Trip Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

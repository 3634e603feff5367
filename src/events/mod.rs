//! Structured game events for presentation layers.
//!
//! The engine never formats text. It emits [`GameEvent`]s to an
//! [`EventSink`], and the caller decides how (or whether) to render them.
//!
//! ## Example Usage
//!
//! ```
//! use color_war::core::GameConfig;
//! use color_war::events::{EventLog, GameEvent};
//! use color_war::rules::GameEngine;
//!
//! let mut engine = GameEngine::new(GameConfig::new().with_seed(42), "ada", "bob");
//! let mut log = EventLog::new();
//! engine.run(&|_: &str| true, &mut log).unwrap();
//!
//! assert!(matches!(log.events().first(), Some(GameEvent::GameStarted { .. })));
//! assert_eq!(log.rounds().count(), 15);
//! ```

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink};

//! poker-freq: parallel poker hand frequency simulation
//!
//! Draws random 5-card hands until every one of the ten hand categories has
//! been seen at least once, counting per-category frequencies along the
//! way. The search is split across independent draw workers coordinated by
//! a single polling aggregator; the classifier is a pure function usable on
//! its own.
//!
//! ## Quick start: classify a hand
//! ```
//! use poker_freq::classifier::{classify, Category};
//! use poker_freq::hand::Hand;
//!
//! let hand: Hand = "2s 2h 2d 5c 5s".parse().unwrap();
//! assert_eq!(classify(&hand), Category::FullHouse);
//! ```
//!
//! ## Run a simulation
//! ```no_run
//! use poker_freq::sim::{run_parallel, SimConfig};
//!
//! let report = run_parallel(&SimConfig { workers: 4, seed: Some(7) }).unwrap();
//! println!("{report}");
//! ```

pub mod cards;
pub mod classifier;
pub mod coordinator;
pub mod deck;
pub mod hand;
pub mod protocol;
pub mod report;
pub mod sim;
pub mod table;
pub mod worker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! examtrack-core: exam score computation and derived statistics.
//!
//! This crate turns raw per-subject answer counts into nets, track raw
//! scores, merit credit and a composite placement score, and derives trend
//! and strength analysis over a history of results. Everything here is a pure
//! function over plain data; storage and presentation belong to callers.

pub mod composite;
pub mod engine;
pub mod error;
pub mod merit;
pub mod model;
pub mod requirement;
pub mod scoring;
pub mod statistics;
pub mod track;
pub mod trend;

pub use engine::{evaluate, EvaluationBundle, MeritInput};
pub use error::ConfigError;
pub use model::{AnswerSheet, Half, Subject, SubjectAnswerCount};
pub use track::{Selector, TrackKind};

//! Failure analysis for API exchanges.

pub mod problem_classifier;

pub use problem_classifier::{ExchangeSignals, ProblemClassifier, ProblemClassifierImpl};

// Rating module - score calculation and severity classification

pub mod calculator;
pub mod severity;

pub use calculator::{ScoreCalculator, Scores};
pub use severity::Severity;

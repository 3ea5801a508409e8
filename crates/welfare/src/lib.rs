//! Muse Welfare Analyzer
//!
//! Turns a solved equilibrium into welfare components and market
//! characteristics:
//!
//! ```text
//! creator rent     = mean(π_i)
//! platform profit  = η · W
//! consumer surplus = κ · mean(s_i · v_i),   s_i = w_i / W
//! total welfare    = rent + profit + surplus
//! ```

pub mod analysis;
pub mod inequality;

pub use analysis::{WelfareReport, analyze};
pub use inequality::gini;

//! # Statistics
//!
//! Everything behind the statistics panel:
//!
//! - [`descriptive`] - Mean, median, mode, variance, standard deviation
//! - [`data_input`] - Parsing pasted data lists into samples
//! - [`combinatorics`] - Factorial, permutations, combinations
//! - [`probability`] - Normal distribution PDF, CDF and inverse CDF
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::statistics::{calculate_statistics, parse_data_input};
//!
//! let values = parse_data_input("4, 8; 15 16\n23 42");
//! let summary = calculate_statistics(&values);
//! assert_eq!(summary.count, 6);
//! assert_eq!(summary.sum, 108.0);
//! assert_eq!(summary.median, 15.5);
//! ```

pub mod combinatorics;
pub mod data_input;
pub mod descriptive;
pub mod probability;

pub use combinatorics::{combinations, factorial, permutations};
pub use data_input::parse_data_input;
pub use descriptive::{
    calculate_statistics,
    count,
    max,
    mean,
    median,
    min,
    mode,
    population_std_dev,
    population_variance,
    range,
    sample_std_dev,
    sample_variance,
    sum,
    StatisticsSummary,
};
pub use probability::{normal_cdf, normal_inverse_cdf, normal_pdf, NormalDistribution};

//! Weight inference
//!
//! A file without a weight inherits a base weight from its neighbourhood and adds
//! its own ordinal times a step:
//!
//! 1. the largest weight in its own directory, else
//! 2. the weight of the highest-ordinal weighted file in the highest-ordinal
//!    sibling directory that has any weighted file, else
//! 3. zero.
//!
//! Resolution never writes; failures degrade to a configured fallback weight.

pub mod resolver;
pub mod strategies;

pub use resolver::{WeightExplanation, WeightResolver, WeightSettings};
pub use strategies::{
    default_strategies, BaseWeight, LocalMaximum, Resolution, ResolutionContext,
    SiblingDirectory, WeightSource, WeightStrategy, ZeroBase,
};

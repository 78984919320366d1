//! Unit tests for the weighting and pathfinding core.

mod exposure;
mod helpers;
mod solver;

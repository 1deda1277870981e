//! This module contains algorithm building blocks used by the solution containers.

pub mod hypervolume;

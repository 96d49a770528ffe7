//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel segmenters.

mod rayon_segmenter;

pub use rayon_segmenter::ParallelRayonSegmenter;

//! # Parallel Segmenter

use crate::encoders::LineSegmenter;

/// Batch-Level Parallel Segmenter Wrapper.
///
/// Enables ``rayon`` segmentation of batches when available.
/// Output order always matches input order.
#[derive(Clone)]
pub struct ParallelRayonSegmenter<D: LineSegmenter> {
    /// Wrapped segmenter.
    pub inner: D,
}

impl<D: LineSegmenter> ParallelRayonSegmenter<D> {
    /// Create a new parallel segmenter.
    ///
    /// ## Arguments
    /// * `inner` - The line segmenter to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonSegmenter` instance.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: LineSegmenter> LineSegmenter for ParallelRayonSegmenter<D> {
    fn segment_tokens(
        &self,
        line: &str,
    ) -> Vec<String> {
        self.inner.segment_tokens(line)
    }

    fn segment_batch(
        &self,
        lines: &[String],
    ) -> Vec<String> {
        use rayon::prelude::*;

        lines
            .par_iter()
            .map(|line| self.inner.segment_text_line(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MergeTable,
        encoders::SubwordEncoderOptions,
        symbols::MergeFormatVersion,
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_segmenter() {
        let table = MergeTable::from_pairs(
            MergeFormatVersion::V0_2,
            [("l", "o"), ("lo", "w"), ("e", "r</w>")]
                .into_iter()
                .map(|(a, b)| (a.into(), b.into())),
        );
        let encoder = SubwordEncoderOptions::default().init(table);

        let segmenter = ParallelRayonSegmenter::new(encoder);
        check_is_send(&segmenter);
        check_is_sync(&segmenter);

        let lines: Vec<String> = (0..64)
            .map(|i| format!("lower slow {i}\n"))
            .collect();

        let expected: Vec<String> = lines
            .iter()
            .map(|line| segmenter.inner.segment_text_line(line))
            .collect();

        let batch = segmenter.segment_batch(&lines);
        assert_eq!(batch, expected);
        assert_eq!(batch[0], "low@@ er s@@ lo@@ w 0\n");
    }
}

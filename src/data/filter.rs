use std::collections::BTreeSet;

use crate::sed::classify::YsoClass;
use crate::sed::pipeline::ClassificationResult;

// ---------------------------------------------------------------------------
// Class filter: which YSO classes are currently shown
// ---------------------------------------------------------------------------

/// Selected classes. An empty set hides everything.
pub type ClassFilter = BTreeSet<YsoClass>;

/// Initialise a [`ClassFilter`] with every class selected.
pub fn init_class_filter() -> ClassFilter {
    YsoClass::ALL.into_iter().collect()
}

/// Return indices of results whose class is selected, in input order.
pub fn filtered_indices(results: &[ClassificationResult], filter: &ClassFilter) -> Vec<usize> {
    results
        .iter()
        .enumerate()
        .filter(|(_, r)| filter.contains(&r.class))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PhotometryRecord;
    use crate::sed::pipeline::Pipeline;

    fn results() -> Vec<ClassificationResult> {
        Pipeline::default().run_sequential(&[
            PhotometryRecord::from_bands("a", [Some(8.0), Some(7.5), Some(6.0), Some(4.0)]),
            PhotometryRecord::from_bands("b", [Some(9.0), Some(9.2), Some(9.5), Some(9.8)]),
            PhotometryRecord::from_bands("c", [None, Some(9.2), Some(9.5), Some(9.8)]),
            PhotometryRecord::from_bands("d", [Some(8.1), Some(7.6), Some(6.1), Some(4.1)]),
        ])
    }

    #[test]
    fn all_selected_shows_everything() {
        assert_eq!(filtered_indices(&results(), &init_class_filter()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn single_class() {
        let filter: ClassFilter = [YsoClass::ClassII].into_iter().collect();
        assert_eq!(filtered_indices(&results(), &filter), vec![0, 3]);
    }

    #[test]
    fn empty_filter_hides_everything() {
        assert!(filtered_indices(&results(), &ClassFilter::new()).is_empty());
    }

    #[test]
    fn unclassified_can_be_isolated() {
        let filter: ClassFilter = [YsoClass::NotClassified].into_iter().collect();
        assert_eq!(filtered_indices(&results(), &filter), vec![2]);
    }
}

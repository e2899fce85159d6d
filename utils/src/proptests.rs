use proptest::prelude::*;

use crate::{express_list_of_sections, is_sorted_section, sort_section};

proptest! {
    #[test]
    fn test_sort_is_idempotent(entries in proptest::collection::vec("[a-zA-Z]{0,6}", 0..20)) {
        let once = sort_section(entries.clone());
        let twice = sort_section(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_output_is_sorted(entries in proptest::collection::vec("\\PC{0,8}", 0..20)) {
        let sorted = sort_section(entries);
        prop_assert!(is_sorted_section(&sorted));
    }

    #[test]
    fn test_sort_is_a_permutation(entries in proptest::collection::vec("[a-cA-C]{0,3}", 0..20)) {
        let mut expected = entries.clone();
        let mut sorted = sort_section(entries);
        expected.sort();
        sorted.sort();
        prop_assert_eq!(expected, sorted);
    }

    #[test]
    fn test_express_mentions_every_section(sections in proptest::collection::vec("[a-z]{1,8}", 1..6)) {
        let sentence = express_list_of_sections(&sections);
        for section in &sections {
            prop_assert!(sentence.contains(section.as_str()));
        }
        prop_assert!(sentence.starts_with("Section"));
    }
}

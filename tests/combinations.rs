mod common;

use attrgen::combinations::{format_identifier, generate_table};
use attrgen::datamodel::{AttributeSet, Prefix};
use attrgen::error::CombinationError;
use attrgen::session::AttributeFields;
use attrgen::test_utils::fixtures::{
    PADDED_COLORS, TWO_BY_TWO, attribute_set, attribute_set_from_texts,
};
use proptest::prelude::*;

/// Examples a user would type
mod scenario_tests {
    use super::*;

    #[test]
    fn test_two_by_two_with_prefix() {
        let set = attribute_set_from_texts(&TWO_BY_TWO);
        let table = generate_table(&set, &Prefix::new("BSB")).unwrap();

        assert_eq!(table.row_count(), 4);
        assert_eq!(table.header(), vec!["Attribute 1", "Attribute 2", "RESULT"]);
        assert_eq!(
            table.results(),
            &["BSB-A-X", "BSB-A-Y", "BSB-B-X", "BSB-B-Y"]
        );
    }

    #[test]
    fn test_single_attribute_without_prefix() {
        let set = attribute_set(&[("Color", &["Red", "Blue", "Green"])]);
        let table = generate_table(&set, &Prefix::new("")).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.results(), &["Red", "Blue", "Green"]);
    }

    #[test]
    fn test_padded_values_are_trimmed() {
        let set = attribute_set_from_texts(&[PADDED_COLORS]);
        let table = generate_table(&set, &Prefix::default()).unwrap();

        assert_eq!(table.results(), &["Red", "Blue", "Green"]);
        assert_eq!(table.rows()[1], vec!["Blue".to_string()]);
    }

    #[test]
    fn test_all_fields_empty() {
        let set = attribute_set_from_texts(&["", "   ", " , "]);
        let result = generate_table(&set, &Prefix::new("BSB"));
        assert!(matches!(result, Err(CombinationError::EmptyInput)));
    }

    #[test]
    fn test_empty_middle_field_is_skipped() {
        let set = attribute_set_from_texts(&["S,M", "", "Red"]);
        let table = generate_table(&set, &Prefix::new("SKU")).unwrap();

        assert_eq!(table.attribute_columns(), &["Attribute 1", "Attribute 3"]);
        assert_eq!(table.results(), &["SKU-S-Red", "SKU-M-Red"]);
    }

    #[test]
    fn test_duplicate_values_are_kept() {
        let set = attribute_set_from_texts(&["A,A", "X"]);
        let table = generate_table(&set, &Prefix::default()).unwrap();
        assert_eq!(table.results(), &["A-X", "A-X"]);
    }

    #[test]
    fn test_field_count_floor() {
        let mut fields = AttributeFields::new(1);
        fields.remove_field();
        assert_eq!(fields.count(), 1);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let set = attribute_set_from_texts(&["1,2,3", "a,b", "x"]);
        let prefix = Prefix::new("ID");
        assert_eq!(
            generate_table(&set, &prefix).unwrap(),
            generate_table(&set, &prefix).unwrap()
        );
    }
}

fn value_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z0-9]{1,4}", 1..5), 1..5)
}

fn to_attribute_set(lists: &[Vec<String>]) -> AttributeSet {
    lists
        .iter()
        .enumerate()
        .map(|(idx, values)| (format!("Attribute {}", idx + 1), values.clone()))
        .collect()
}

proptest! {
    #[test]
    fn prop_row_count_is_product_of_sizes(lists in value_lists()) {
        let table = generate_table(&to_attribute_set(&lists), &Prefix::new("P")).unwrap();
        let expected: usize = lists.iter().map(Vec::len).product();
        prop_assert_eq!(table.row_count(), expected);
        prop_assert_eq!(table.results().len(), expected);
    }

    #[test]
    fn prop_first_and_last_rows(lists in value_lists()) {
        let table = generate_table(&to_attribute_set(&lists), &Prefix::default()).unwrap();
        let first: Vec<String> = lists.iter().map(|values| values[0].clone()).collect();
        let last: Vec<String> = lists.iter().map(|values| values[values.len() - 1].clone()).collect();
        prop_assert_eq!(&table.rows()[0], &first);
        prop_assert_eq!(&table.rows()[table.row_count() - 1], &last);
    }

    #[test]
    fn prop_result_is_prefixed_join(
        values in prop::collection::vec("[A-Za-z0-9]{1,6}", 1..6),
        prefix in "[A-Z]{0,4}",
    ) {
        let identifier = format_identifier(&values, &Prefix::new(&prefix));
        let joined = values.join("-");
        if prefix.is_empty() {
            prop_assert_eq!(identifier, joined);
        } else {
            prop_assert_eq!(identifier, format!("{}-{}", prefix, joined));
        }
    }
}

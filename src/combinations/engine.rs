use crate::datamodel::{AttributeSet, CombinationRow};
use crate::error::CombinationError;
use crate::exporters::xlsx::EXCEL_MAX_ROWS;

/// Most combination rows a generation may produce: one worksheet minus its header row.
pub const MAX_COMBINATIONS: usize = EXCEL_MAX_ROWS - 1;

/// Combination rows before the identifier column is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations {
    pub columns: Vec<String>,
    pub rows: Vec<CombinationRow>,
}

/// Number of tuples in the Cartesian product of lists of the given lengths.
///
/// Returns `None` on overflow.
pub fn product_len<I: IntoIterator<Item = usize>>(lengths: I) -> Option<usize> {
    lengths
        .into_iter()
        .try_fold(1usize, |acc, len| acc.checked_mul(len))
}

/// Cartesian product over any number of lists.
///
/// Tuples come out in odometer order: the first list changes slowest and the
/// last list changes fastest. No list at all yields a single empty tuple; any
/// empty list yields no tuple.
///
/// The whole product is materialized. Check its size with [`product_len`] first.
pub fn cartesian_product<T: Clone>(lists: &[&[T]]) -> Vec<Vec<T>> {
    if lists.iter().any(|list| list.is_empty()) {
        return Vec::new();
    }

    let capacity = product_len(lists.iter().map(|list| list.len())).unwrap_or(0);
    let mut tuples = Vec::with_capacity(capacity);
    let mut digits = vec![0usize; lists.len()];

    loop {
        tuples.push(
            digits
                .iter()
                .zip(lists.iter())
                .map(|(idx, list)| list[*idx].clone())
                .collect(),
        );

        // Advance the odometer, rightmost digit first
        let mut position = lists.len();
        loop {
            if position == 0 {
                return tuples;
            }
            position -= 1;
            digits[position] += 1;
            if digits[position] < lists[position].len() {
                break;
            }
            digits[position] = 0;
        }
    }
}

/// Expand an attribute set into every combination of its values.
///
/// Fails without allocating anything when there would be more than
/// [`MAX_COMBINATIONS`] rows.
pub fn generate_combinations(attributes: &AttributeSet) -> Result<Combinations, CombinationError> {
    generate_combinations_with_limit(attributes, MAX_COMBINATIONS)
}

/// Same as [`generate_combinations`] with a custom row limit.
pub fn generate_combinations_with_limit(
    attributes: &AttributeSet,
    limit: usize,
) -> Result<Combinations, CombinationError> {
    if attributes.is_empty() {
        return Err(CombinationError::EmptyInput);
    }

    let value_lists = attributes.value_lists();
    match product_len(value_lists.iter().map(|list| list.len())) {
        Some(len) if len <= limit => {}
        _ => return Err(CombinationError::TooManyCombinations { limit }),
    }

    Ok(Combinations {
        columns: attributes.names(),
        rows: cartesian_product(&value_lists),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_odometer_order() {
        let a = strings(&["a1", "a2"]);
        let b = strings(&["b1", "b2"]);
        let tuples = cartesian_product(&[&a[..], &b[..]]);

        assert_eq!(
            tuples,
            vec![
                strings(&["a1", "b1"]),
                strings(&["a1", "b2"]),
                strings(&["a2", "b1"]),
                strings(&["a2", "b2"]),
            ]
        );
    }

    #[test]
    fn test_three_lists_last_varies_fastest() {
        let tuples = cartesian_product(&[&[1, 2][..], &[3][..], &[4, 5, 6][..]]);
        assert_eq!(
            tuples,
            vec![
                vec![1, 3, 4],
                vec![1, 3, 5],
                vec![1, 3, 6],
                vec![2, 3, 4],
                vec![2, 3, 5],
                vec![2, 3, 6],
            ]
        );
    }

    #[test]
    fn test_edge_cases() {
        let none: Vec<Vec<u8>> = cartesian_product::<u8>(&[]);
        assert_eq!(none, vec![Vec::<u8>::new()]);

        let with_empty = cartesian_product(&[&[1, 2][..], &[][..]]);
        assert!(with_empty.is_empty());
    }

    #[test]
    fn test_product_len() {
        assert_eq!(product_len([2, 3, 4]), Some(24));
        assert_eq!(product_len([]), Some(1));
        assert_eq!(product_len([usize::MAX, 2]), None);
    }

    #[test]
    fn test_generate_combinations_columns() {
        let set: AttributeSet = vec![
            ("Attribute 1", strings(&["A", "B"])),
            ("Attribute 2", strings(&["X", "Y", "Z"])),
        ]
        .into_iter()
        .collect();

        let combinations = generate_combinations(&set).unwrap();
        assert_eq!(combinations.columns, strings(&["Attribute 1", "Attribute 2"]));
        assert_eq!(combinations.rows.len(), 6);
        assert_eq!(combinations.rows[0], strings(&["A", "X"]));
        assert_eq!(combinations.rows[5], strings(&["B", "Z"]));
    }

    #[test]
    fn test_generate_combinations_empty_set() {
        let result = generate_combinations(&AttributeSet::new());
        assert!(matches!(result, Err(CombinationError::EmptyInput)));
    }

    fn repeated_set(fields: usize, values: &[&str]) -> AttributeSet {
        (1..=fields)
            .map(|idx| (format!("Attribute {}", idx), strings(values)))
            .collect()
    }

    #[test]
    fn test_oversized_product_is_rejected() {
        // 8^12 rows, far beyond a worksheet
        let set = repeated_set(12, &["a", "b", "c", "d", "e", "f", "g", "h"]);
        let result = generate_combinations(&set);
        assert!(matches!(
            result,
            Err(CombinationError::TooManyCombinations { limit: MAX_COMBINATIONS })
        ));
    }

    #[test]
    fn test_overflowing_product_is_rejected() {
        // 10^40 overflows usize
        let set = repeated_set(40, &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        assert!(matches!(
            generate_combinations(&set),
            Err(CombinationError::TooManyCombinations { .. })
        ));
    }

    #[test]
    fn test_limit_is_inclusive() {
        let set = repeated_set(2, &["a", "b"]);
        assert_eq!(generate_combinations_with_limit(&set, 4).unwrap().rows.len(), 4);
        assert!(matches!(
            generate_combinations_with_limit(&set, 3),
            Err(CombinationError::TooManyCombinations { limit: 3 })
        ));
    }
}

use std::cmp::Ordering;

use feruca::Collator;

/// Orders product labels alphabetically using the Unicode Collation Algorithm.
///
/// Accents and case only matter once the base letters are equal, so `"Éclair"`
/// sorts between `"apple"` and `"Zebra"`. Lowercase precedes uppercase on ties.
/// Labels the collator considers equal fall back to code-point order, so
/// distinct labels never compare equal.
pub struct LabelCollator {
    collator: Collator
}

impl LabelCollator {
    pub fn new() -> Self {
        Self {
            collator: Collator::default()
        }
    }

    pub fn compare(&mut self, left: &str, right: &str) -> Ordering {
        self.collator.collate(left, right)
            .then_with(|| left.cmp(right))
    }
}

impl Default for LabelCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares two labels with a fresh [`LabelCollator`].
///
/// Sorting many labels should reuse one collator instead.
pub fn compare_labels(left: &str, right: &str) -> Ordering {
    LabelCollator::new().compare(left, right)
}

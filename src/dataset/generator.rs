//! Name list generators.

use super::DatasetVariant;

/// The original five names.
const FIVE_NAMES: [&str; 5] = ["Java", "Node", "JavaScript", "Rust", "Go"];

const FIRST_NAMES: [&str; 10] = [
    "Alice",
    "Bob",
    "Charles",
    "Dora",
    "Emanuel",
    "Fabienne",
    "George",
    "Hannelore",
    "Igor",
    "Janice",
];

const MIDDLE_NAMES: [&str; 10] = [
    "Kim", "Landry", "Maria", "Nikita", "Oakley", "Perry", "Quin", "Robin", "Skyler", "Taylen",
];

const SURNAMES: [&str; 10] = [
    "Underhill",
    "Vaccanti",
    "Wilson",
    "Xanders",
    "Yallopp",
    "Zabawa",
    "Anderson",
    "Bell",
    "Carter",
    "Diaz",
];

/// Materialize the name list for a variant.
///
/// Deterministic: insertion order is the declared order of the literals and,
/// for [`DatasetVariant::AutoGeneratedNames`], the nested-loop order of the
/// Cartesian product (first name outer, middle name middle, surname inner).
pub fn generate(variant: DatasetVariant) -> Vec<String> {
    match variant {
        DatasetVariant::FiveNames => FIVE_NAMES.iter().map(|s| s.to_string()).collect(),
        DatasetVariant::AutoGeneratedNames => {
            let mut names = Vec::with_capacity(expected_len(variant));
            for first in FIRST_NAMES {
                for middle in MIDDLE_NAMES {
                    for surname in SURNAMES {
                        names.push(format!("{first} {middle} {surname}"));
                    }
                }
            }
            names
        }
    }
}

/// Number of entries [`generate`] produces for a variant.
pub fn expected_len(variant: DatasetVariant) -> usize {
    match variant {
        DatasetVariant::FiveNames => FIVE_NAMES.len(),
        DatasetVariant::AutoGeneratedNames => {
            FIRST_NAMES.len() * MIDDLE_NAMES.len() * SURNAMES.len()
        }
    }
}

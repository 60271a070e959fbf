//! Property-based tests for the set-field mutator.
//!
//! These tests use proptest to generate random entries and initial sets and
//! verify that the registration laws hold for all inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::manifest::{Manifest, ManifestFormat};
    use crate::set_field::{normalize_dir_entry, SetField};
    use proptest::prelude::*;
    use serde_json::json;

    /// Entries that survive YAML/JSON round trips and normalization
    /// untouched: path-ish strings without a leading dot segment.
    fn entry_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,12}(/[a-z0-9-]{1,8}){0,2}"
    }

    fn set_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(entry_strategy(), 0..8)
    }

    fn manifest_with(packages: &[String]) -> Manifest {
        Manifest::from_value(
            "pnpm-workspace.yaml",
            ManifestFormat::Yaml,
            json!({ "packages": packages }),
        )
    }

    proptest! {
        /// Property: add(add(S, e), e) == add(S, e)
        #[test]
        fn add_is_idempotent(initial in set_strategy(), entry in entry_strategy()) {
            let field = SetField::new("packages");
            let mut manifest = manifest_with(&initial);

            field.add(&mut manifest, &entry).unwrap();
            let once = field.entries(&manifest).unwrap();

            field.add(&mut manifest, &entry).unwrap();
            let twice = field.entries(&manifest).unwrap();

            prop_assert_eq!(once, twice);
        }

        /// Property: after add, the entry is a member and set size grew by
        /// at most one.
        #[test]
        fn add_grows_by_at_most_one(initial in set_strategy(), entry in entry_strategy()) {
            let field = SetField::new("packages");
            let mut manifest = manifest_with(&initial);
            let before = field.entries(&manifest).unwrap().len();

            let inserted = field.add(&mut manifest, &entry).unwrap();
            let after = field.entries(&manifest).unwrap();

            prop_assert!(after.contains(&entry));
            prop_assert_eq!(after.len(), if inserted { before + 1 } else { before });
        }

        /// Property: normalized fields treat `foo` and `./foo` as one entry.
        #[test]
        fn normalization_equivalence(initial in set_strategy(), entry in entry_strategy()) {
            let field = SetField::dirs("eslint.workingDirectories");

            let mut plain = Manifest::from_value(
                "settings.json",
                ManifestFormat::Json,
                json!({ "eslint.workingDirectories": initial }),
            );
            let mut dotted = plain.clone();

            field.add(&mut plain, &entry).unwrap();
            field.add(&mut dotted, &format!("./{}", entry)).unwrap();

            prop_assert_eq!(
                field.entries(&plain).unwrap(),
                field.entries(&dotted).unwrap()
            );
        }

        /// Property: deleting an absent entry leaves membership unchanged
        /// and does not error.
        #[test]
        fn delete_of_absent_entry_is_safe(initial in set_strategy(), entry in entry_strategy()) {
            let field = SetField::new("packages");
            let mut manifest = manifest_with(&initial);
            field.delete(&mut manifest, &entry).unwrap();
            let before = field.entries(&manifest).unwrap();

            let removed = field.delete(&mut manifest, &entry).unwrap();
            let after = field.entries(&manifest).unwrap();

            prop_assert!(!removed);
            prop_assert_eq!(before, after);
        }

        /// Property: delete after add restores the original membership.
        #[test]
        fn delete_undoes_add(initial in set_strategy(), entry in entry_strategy()) {
            let field = SetField::new("packages");
            let mut manifest = manifest_with(&initial);
            // Scrub duplicates and the entry itself for a clean baseline.
            field.delete(&mut manifest, &entry).unwrap();
            let baseline = field.entries(&manifest).unwrap();

            field.add(&mut manifest, &entry).unwrap();
            field.delete(&mut manifest, &entry).unwrap();

            prop_assert_eq!(field.entries(&manifest).unwrap(), baseline);
        }

        /// Property: normalize_dir_entry is idempotent and always yields a
        /// `./` prefix.
        #[test]
        fn normalize_is_idempotent(entry in entry_strategy()) {
            let normalized = normalize_dir_entry(&entry);
            prop_assert!(normalized.starts_with("./"));
            prop_assert_eq!(normalize_dir_entry(&normalized), normalized.clone());
        }
    }
}

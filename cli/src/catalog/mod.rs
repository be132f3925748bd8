//! # svcctl Operation Catalog
//!
//! File: cli/src/catalog/mod.rs
//!
//! ## Overview
//!
//! The table of every service operation svcctl exposes. Each entry is a
//! `OperationDescriptor` (see `engine::descriptor`); there is no per-operation
//! code anywhere else. Adding an operation means adding a descriptor to the
//! matching area module.
//!
//! ## Areas
//!
//! - `connections`: connection definitions (list/get/create/update/delete)
//! - `images`: machine images (describe/copy/deregister)
//! - `jobs`: jobs and job runs
//!
use crate::engine::descriptor::OperationDescriptor;

mod connections;
mod images;
mod jobs;

/// Every operation, grouped by area.
pub fn all() -> impl Iterator<Item = &'static OperationDescriptor> {
    connections::OPERATIONS
        .iter()
        .chain(images::OPERATIONS)
        .chain(jobs::OPERATIONS)
}

/// Looks an operation up by command name (`list-jobs`) or, ignoring case, by
/// service operation name (`ListJobs`).
pub fn find(name: &str) -> Option<&'static OperationDescriptor> {
    all().find(|d| d.command == name || d.operation.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::descriptor::{OutputShape, COMMON_FLAGS};
    use std::collections::HashSet;

    /// Variable names used in a `{{ ... }}` template.
    fn template_variables(template: &str) -> Vec<String> {
        template
            .split("{{")
            .skip(1)
            .filter_map(|part| part.split("}}").next())
            .map(|expr| {
                expr.split('|')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_lookup_by_command_and_operation() {
        assert_eq!(find("list-jobs").map(|d| d.operation), Some("ListJobs"));
        assert_eq!(find("copyimage").map(|d| d.command), Some("copy-image"));
        assert!(find("list-widgets").is_none());
    }

    #[test]
    fn test_command_names_are_unique() {
        let mut seen = HashSet::new();
        for descriptor in all() {
            assert!(seen.insert(descriptor.command), "duplicate {}", descriptor.command);
        }
    }

    #[test]
    fn test_fields_are_well_formed() {
        for descriptor in all() {
            let mut flags = HashSet::new();
            let mut paths = HashSet::new();
            for field in descriptor.fields {
                assert!(
                    flags.insert(field.flag),
                    "{}: duplicate flag --{}",
                    descriptor.command,
                    field.flag
                );
                assert!(
                    paths.insert(field.path),
                    "{}: duplicate path {}",
                    descriptor.command,
                    field.path
                );
                assert!(
                    !COMMON_FLAGS.contains(&field.flag),
                    "{}: --{} collides with a common flag",
                    descriptor.command,
                    field.flag
                );
            }
            // No field may sit at a prefix of another field's path.
            for a in descriptor.fields {
                for b in descriptor.fields {
                    let prefix = format!("{}.", a.path);
                    assert!(
                        !b.path.starts_with(&prefix),
                        "{}: {} is nested under {}",
                        descriptor.command,
                        b.path,
                        a.path
                    );
                }
            }
        }
    }

    #[test]
    fn test_paginated_operations_output_their_items() {
        for descriptor in all() {
            if let Some(paging) = descriptor.pagination {
                assert_eq!(descriptor.output, OutputShape::Field(paging.items));
                assert!(paging.max_page_size > 0);
                assert!(descriptor
                    .fields
                    .iter()
                    .all(|f| f.path != paging.input_token && f.path != paging.limit));
            }
        }
    }

    #[test]
    fn test_confirmation_templates_reference_own_fields() {
        for descriptor in all() {
            let Some(confirmation) = descriptor.confirmation else {
                continue;
            };
            assert!(!confirmation.label.is_empty());
            let keys: HashSet<String> =
                descriptor.fields.iter().map(|f| f.template_key()).collect();
            for variable in template_variables(confirmation.target) {
                assert!(
                    keys.contains(&variable),
                    "{}: template references unknown '{}'",
                    descriptor.command,
                    variable
                );
            }
        }
    }

    #[test]
    fn test_mutating_operations_are_not_paginated() {
        for descriptor in all().filter(|d| d.is_mutating()) {
            assert!(descriptor.pagination.is_none(), "{}", descriptor.command);
        }
    }
}

//! Property tests for the parser/formatter pair.

use arn::{parse, validate, ArnError, ResourceName};
use proptest::prelude::*;

/// Strings dense in both delimiters so every branch of the split is hit.
fn arn_like() -> impl Strategy<Value = String> {
    "[a-z0-9:/-]{0,48}"
}

/// A top-level segment other than the last one.
fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9-]{0,12}"
}

fn resource_name() -> impl Strategy<Value = ResourceName> {
    (
        segment(),
        segment(),
        segment(),
        segment(),
        segment(),
        prop_oneof![
            Just(None),
            ("[a-z0-9-]{1,12}", prop_oneof![Just(":"), Just("/")]).prop_map(Some),
        ],
        "[a-z0-9:/-]{0,24}",
    )
        .prop_filter(
            "an untyped resource must not start with a delimiter-split type",
            |(_, _, _, _, _, typed, resource)| {
                typed.is_some() || !resource.find([':', '/']).is_some_and(|at| at > 0)
            },
        )
        .prop_map(
            |(scheme, partition, service, region, account_id, typed, resource)| {
                let (resource_type, resource_delimiter) = match typed {
                    Some((ty, delimiter)) => (ty, delimiter.to_string()),
                    None => (String::new(), String::new()),
                };
                ResourceName {
                    scheme,
                    partition,
                    service,
                    region,
                    account_id,
                    resource_type,
                    resource_delimiter,
                    resource,
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_valid_iff_five_colons(input in arn_like()) {
        let colons = input.matches(':').count();
        prop_assert_eq!(validate(&input).is_ok(), colons >= 5);
        prop_assert_eq!(parse(&input).is_ok(), colons >= 5);
    }

    #[test]
    fn prop_error_reports_segment_count(input in arn_like()) {
        if let Err(ArnError::TooFewSegments { found }) = validate(&input) {
            prop_assert_eq!(found, input.matches(':').count() + 1);
        }
    }

    #[test]
    fn prop_format_inverts_parse(input in arn_like()) {
        if let Ok(name) = parse(&input) {
            prop_assert_eq!(name.to_string(), input);
        }
    }

    #[test]
    fn prop_parse_inverts_format(name in resource_name()) {
        let formatted = name.to_string();
        prop_assert_eq!(parse(&formatted), Ok(name));
    }

    #[test]
    fn prop_delimiter_present_iff_type_present(input in arn_like()) {
        if let Ok(name) = parse(&input) {
            prop_assert_eq!(name.resource_type.is_empty(), name.resource_delimiter.is_empty());
        }
    }

    #[test]
    fn prop_first_delimiter_wins(
        ty in "[a-z0-9-]{1,8}",
        first in prop_oneof![Just(':'), Just('/')],
        rest in "[a-z0-9:/-]{0,16}",
    ) {
        let input = format!("arn:aws:svc:region:123:{ty}{first}{rest}");
        let name = parse(&input).unwrap();
        prop_assert_eq!(&name.resource_type, &ty);
        prop_assert_eq!(name.resource_delimiter, first.to_string());
        prop_assert_eq!(&name.resource, &rest);
    }

    #[test]
    fn prop_resource_value_composition(name in resource_name()) {
        let expected = if name.resource_type.is_empty() {
            name.resource.clone()
        } else {
            format!("{}{}{}", name.resource_type, name.resource_delimiter, name.resource)
        };
        prop_assert_eq!(name.resource_value(), expected);
    }
}

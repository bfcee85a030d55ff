//! The parsed ARN record and its parser/formatter.
//!
//! An ARN has six top-level segments separated by `:`:
//!
//! ```text
//! scheme:partition:service:region:account-id:resource-value
//! ```
//!
//! The last segment may carry an optional resource type, separated from the
//! resource body by whichever of `:` or `/` appears first in it.

use std::fmt;
use std::str::FromStr;

use crate::ArnError;

/// Number of top-level segments in an ARN.
const SEGMENT_COUNT: usize = 6;

/// Separator between top-level segments.
const SEPARATOR: char = ':';

/// Characters that may separate the resource type from the resource body.
const RESOURCE_DELIMITERS: [char; 2] = [':', '/'];

/// A parsed ARN.
///
/// Every field may be empty. Parsing only checks that the six segments are
/// present, so `":::::"` yields a record with all fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceName {
    /// Format literal, conventionally `arn`.
    pub scheme: String,

    /// Partition the resource lives in.
    pub partition: String,

    /// Service that owns the resource.
    pub service: String,

    /// Region the resource resides in. Often empty for global resources.
    pub region: String,

    /// Account that owns the resource. May be empty when the resource is
    /// unique on its own.
    pub account_id: String,

    /// Optional resource type. Empty when the resource value has no type.
    pub resource_type: String,

    /// Delimiter between `resource_type` and `resource` (`:` or `/`).
    ///
    /// Stored so that formatting reproduces the original string exactly.
    pub resource_delimiter: String,

    /// The resource itself. May contain further `:` or `/` characters.
    pub resource: String,
}

/// Borrowed view of the fields of a structurally valid ARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Components<'a> {
    scheme: &'a str,
    partition: &'a str,
    service: &'a str,
    region: &'a str,
    account_id: &'a str,
    resource_type: &'a str,
    resource_delimiter: &'a str,
    resource: &'a str,
}

impl<'a> Components<'a> {
    fn into_owned(self) -> ResourceName {
        ResourceName {
            scheme: self.scheme.to_owned(),
            partition: self.partition.to_owned(),
            service: self.service.to_owned(),
            region: self.region.to_owned(),
            account_id: self.account_id.to_owned(),
            resource_type: self.resource_type.to_owned(),
            resource_delimiter: self.resource_delimiter.to_owned(),
            resource: self.resource.to_owned(),
        }
    }
}

/// Splits an ARN into its fields without allocating.
///
/// This is the only place that decides structural validity; both [`parse`]
/// and [`validate`] go through it.
fn split(input: &str) -> Result<Components<'_>, ArnError> {
    let mut segments = [""; SEGMENT_COUNT];
    let mut found = 0;

    for (slot, segment) in segments
        .iter_mut()
        .zip(input.splitn(SEGMENT_COUNT, SEPARATOR))
    {
        *slot = segment;
        found += 1;
    }

    if found < SEGMENT_COUNT {
        return Err(ArnError::TooFewSegments { found });
    }

    let [scheme, partition, service, region, account_id, value] = segments;
    let (resource_type, resource_delimiter, resource) = split_resource_value(value);

    Ok(Components {
        scheme,
        partition,
        service,
        region,
        account_id,
        resource_type,
        resource_delimiter,
        resource,
    })
}

/// Splits the last segment into `(resource_type, delimiter, resource)`.
///
/// The first `:` or `/` wins. Without either, the whole segment is the
/// resource and the type and delimiter are empty. A delimiter in first
/// position would produce an empty type, so the segment is kept whole
/// instead; the delimiter is only recorded alongside a non-empty type.
fn split_resource_value(value: &str) -> (&str, &str, &str) {
    match value.find(RESOURCE_DELIMITERS) {
        // Both delimiters are ASCII, so `at + 1` is a char boundary.
        Some(at) if at > 0 => (&value[..at], &value[at..at + 1], &value[at + 1..]),
        _ => ("", "", value),
    }
}

/// Parses an ARN into a [`ResourceName`].
pub fn parse(input: &str) -> Result<ResourceName, ArnError> {
    split(input).map(Components::into_owned)
}

/// Checks whether the input is a structurally valid ARN.
///
/// Only the segment count is checked; field contents are never inspected.
pub fn validate(input: &str) -> Result<(), ArnError> {
    split(input).map(|_| ())
}

impl ResourceName {
    /// Parses an ARN. Same as [`parse`].
    pub fn parse(input: &str) -> Result<Self, ArnError> {
        parse(input)
    }

    /// Returns true if the resource value carries a resource type.
    #[must_use]
    pub fn has_resource_type(&self) -> bool {
        !self.resource_type.is_empty()
    }

    /// Returns the last segment of the ARN.
    ///
    /// This is `resource` alone when there is no resource type, and
    /// `resource_type`, `resource_delimiter` and `resource` concatenated
    /// otherwise.
    #[must_use]
    pub fn resource_value(&self) -> String {
        if !self.has_resource_type() {
            return self.resource.clone();
        }

        let mut value = String::with_capacity(
            self.resource_type.len() + self.resource_delimiter.len() + self.resource.len(),
        );
        value.push_str(&self.resource_type);
        value.push_str(&self.resource_delimiter);
        value.push_str(&self.resource);
        value
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:",
            self.scheme, self.partition, self.service, self.region, self.account_id
        )?;

        if self.has_resource_type() {
            f.write_str(&self.resource_type)?;
            f.write_str(&self.resource_delimiter)?;
        }

        f.write_str(&self.resource)
    }
}

impl FromStr for ResourceName {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for ResourceName {
    type Error = ArnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl TryFrom<String> for ResourceName {
    type Error = ArnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.to_string()
    }
}

impl From<&ResourceName> for String {
    fn from(name: &ResourceName) -> Self {
        name.to_string()
    }
}

impl serde::Serialize for ResourceName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ResourceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn name(resource_type: &str, resource_delimiter: &str, resource: &str) -> ResourceName {
        ResourceName {
            scheme: "arn".to_string(),
            partition: "partition".to_string(),
            service: "service".to_string(),
            region: "region".to_string(),
            account_id: "account-id".to_string(),
            resource_type: resource_type.to_string(),
            resource_delimiter: resource_delimiter.to_string(),
            resource: resource.to_string(),
        }
    }

    #[rstest]
    #[case::empty("", 1)]
    #[case::four_colons("::::", 5)]
    #[case::missing_resource("arn:partition:service:region:", 5)]
    #[case::no_separator("arn", 1)]
    fn test_too_few_segments(#[case] input: &str, #[case] found: usize) {
        assert_eq!(validate(input), Err(ArnError::TooFewSegments { found }));
        assert_eq!(parse(input), Err(ArnError::TooFewSegments { found }));
    }

    #[test]
    fn test_five_colons_is_all_empty() {
        assert_eq!(validate(":::::"), Ok(()));
        assert_eq!(parse(":::::").unwrap(), ResourceName::default());
    }

    #[test]
    fn test_scheme_only() {
        let parsed = parse("arn:::::").unwrap();
        assert_eq!(
            parsed,
            ResourceName {
                scheme: "arn".to_string(),
                ..Default::default()
            }
        );
    }

    #[rstest]
    #[case::untyped("resource", name("", "", "resource"))]
    #[case::slash("resource-type/resource", name("resource-type", "/", "resource"))]
    #[case::colon("resource-type:resource", name("resource-type", ":", "resource"))]
    #[case::slash_then_colon(
        "resource-type/resource:path",
        name("resource-type", "/", "resource:path")
    )]
    #[case::colon_then_slash(
        "resource-type:resource/path",
        name("resource-type", ":", "resource/path")
    )]
    #[case::leading_slash("/resource", name("", "", "/resource"))]
    #[case::nested("role/service-role/my-role", name("role", "/", "service-role/my-role"))]
    #[case::trailing_colon("resource-type:", name("resource-type", ":", ""))]
    fn test_resource_value_split(#[case] value: &str, #[case] expected: ResourceName) {
        let input = format!("arn:partition:service:region:account-id:{value}");
        let parsed = parse(&input).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), input);
    }

    #[rstest]
    #[case("arn:p:s:r:a:/resource")]
    #[case("arn:p:s:r:a::resource/path")]
    #[case("arn:p:s:r:a:/")]
    fn test_leading_delimiter_is_not_a_type(#[case] input: &str) {
        let parsed = parse(input).unwrap();
        assert!(!parsed.has_resource_type());
        assert_eq!(parsed.resource_delimiter, "");
        assert_eq!(parsed.to_string(), input);
    }

    #[rstest]
    #[case("arn:partition:service::account-id:resource-type:resource")]
    #[case("arn:partition:service:::resource-type:resource")]
    #[case("arn:partition::::resource-type:resource")]
    fn test_empty_middle_segments(#[case] input: &str) {
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.resource_type, "resource-type");
        assert_eq!(parsed.resource_delimiter, ":");
        assert_eq!(parsed.resource, "resource");
        assert_eq!(parsed.to_string(), input);
    }

    #[test]
    fn test_real_world_arn() {
        let parsed: ResourceName = "arn:aws:rds:eu-west-1:123456789012:db:mysql-db"
            .parse()
            .unwrap();
        assert_eq!(parsed.partition, "aws");
        assert_eq!(parsed.service, "rds");
        assert_eq!(parsed.region, "eu-west-1");
        assert_eq!(parsed.account_id, "123456789012");
        assert_eq!(parsed.resource_type, "db");
        assert_eq!(parsed.resource, "mysql-db");
        assert_eq!(
            parsed.to_string(),
            "arn:aws:rds:eu-west-1:123456789012:db:mysql-db"
        );
    }

    #[rstest]
    #[case("type", ":", "resource", "type:resource")]
    #[case("type", "/", "resource", "type/resource")]
    #[case("type", ":", "resource/path", "type:resource/path")]
    #[case("type", "/", "resource:path", "type/resource:path")]
    #[case("", ":", "resource/path", "resource/path")]
    #[case("", "/", "resource:path", "resource:path")]
    fn test_resource_value(
        #[case] resource_type: &str,
        #[case] delimiter: &str,
        #[case] resource: &str,
        #[case] expected: &str,
    ) {
        let name = ResourceName {
            scheme: "arn".to_string(),
            partition: "partition".to_string(),
            service: "service".to_string(),
            resource_type: resource_type.to_string(),
            resource_delimiter: delimiter.to_string(),
            resource: resource.to_string(),
            ..Default::default()
        };
        assert_eq!(name.resource_value(), expected);
        assert_eq!(name.to_string(), format!("arn:partition:service:::{expected}"));
    }

    #[test]
    fn test_try_from_variants_agree() {
        let input = "arn:aws:s3:::my-bucket/my-key";
        let from_str = ResourceName::try_from(input).unwrap();
        let from_string = ResourceName::try_from(input.to_string()).unwrap();
        assert_eq!(from_str, from_string);
        assert_eq!(String::from(&from_str), input);
        assert_eq!(String::from(from_string), input);
    }

    #[test]
    fn test_json_roundtrip() {
        let name = parse("arn:aws:iam::123456789012:user/testuser").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"arn:aws:iam::123456789012:user/testuser\"");
        let parsed: ResourceName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let result: Result<ResourceName, _> = serde_json::from_str("\"arn:aws\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }
}

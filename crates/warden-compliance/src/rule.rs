//! Compliance rule definitions.

use std::fmt;

use warden_types::Resource;

/// Descriptive metadata carried by every compliance rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleMetadata {
    pub name: String,
    pub version: String,
    pub author: String,
    /// Reported verbatim in violation messages.
    pub description: String,
}

impl RuleMetadata {
    /// Creates metadata with version "1.0" and an empty author.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0".to_string(),
            author: String::new(),
            description: description.into(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Formats the violation message for this rule: `[name] description`.
    pub fn violation(&self) -> String {
        format!("[{}] {}", self.name, self.description)
    }
}

/// A named, stateless predicate over a resource.
///
/// `check` returns `true` when the resource complies.
pub trait ComplianceRule: Send + Sync {
    fn metadata(&self) -> &RuleMetadata;

    fn check(&self, resource: &Resource) -> bool;

    fn name(&self) -> &str {
        &self.metadata().name
    }
}

impl<R: ComplianceRule + ?Sized> ComplianceRule for Box<R> {
    fn metadata(&self) -> &RuleMetadata {
        (**self).metadata()
    }

    fn check(&self, resource: &Resource) -> bool {
        (**self).check(resource)
    }
}

/// A compliance rule backed by a closure.
pub struct FnRule<F> {
    metadata: RuleMetadata,
    predicate: F,
}

impl<F> FnRule<F>
where
    F: Fn(&Resource) -> bool + Send + Sync,
{
    pub fn new(metadata: RuleMetadata, predicate: F) -> Self {
        Self {
            metadata,
            predicate,
        }
    }
}

impl<F> ComplianceRule for FnRule<F>
where
    F: Fn(&Resource) -> bool + Send + Sync,
{
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, resource: &Resource) -> bool {
        (self.predicate)(resource)
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_format() {
        let meta = RuleMetadata::new("RequiresRegionTag", "Resource must have a 'region' tag.");
        assert_eq!(
            meta.violation(),
            "[RequiresRegionTag] Resource must have a 'region' tag."
        );
    }

    #[test]
    fn test_fn_rule() {
        let rule = FnRule::new(
            RuleMetadata::new("RequiresRegionTag", "Resource must have a 'region' tag.")
                .with_author("infra"),
            |r: &Resource| r.has_tag("region"),
        );

        let tagged = Resource::new("db-1", "database", "restricted").with_tag("region", "eu-1");
        let untagged = Resource::new("db-2", "database", "restricted");

        assert_eq!(rule.name(), "RequiresRegionTag");
        assert_eq!(rule.metadata().author, "infra");
        assert!(rule.check(&tagged));
        assert!(!rule.check(&untagged));
    }
}

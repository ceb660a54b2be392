use super::Rule;
use std::path::Path;

/// Transform rules in configuration order.
///
/// The first rule whose test matches and whose exclusion does not match
/// decides the transform chain of a file. Rules are never combined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn find(&self, path: &Path) -> Option<&Rule> {
        let path = path.to_string_lossy();

        self.rules.iter().find(|rule| rule.matches(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Pattern;
    use std::sync::Arc;

    fn rule(name: &str, test: &str, exclude: Option<&str>, transforms: &[&str]) -> Rule {
        Rule::new(
            name,
            Pattern::new(test).unwrap(),
            exclude.map(|exclude| Pattern::new(exclude).unwrap()),
            transforms.iter().copied().map(Arc::from).collect(),
        )
    }

    #[test]
    fn find_nothing_in_empty_rules() {
        assert_eq!(RuleSet::default().find(Path::new("/src/foo.js")), None);
    }

    #[test]
    fn find_first_matching_rule() {
        let rules = RuleSet::new(vec![
            rule("script", r"\.js$", None, &["script"]),
            rule("text", r"\.(js|txt)$", None, &["text"]),
        ]);

        assert_eq!(
            rules.find(Path::new("/src/foo.js")).map(Rule::name),
            Some("script")
        );
        assert_eq!(
            rules.find(Path::new("/src/foo.txt")).map(Rule::name),
            Some("text")
        );
    }

    #[test]
    fn keep_transform_order_in_rule() {
        let rules = RuleSet::new(vec![rule("svg", r"\.svg$", None, &["text", "asset"])]);

        assert_eq!(
            rules.find(Path::new("/src/logo.svg")).unwrap().transforms(),
            &[Arc::from("text"), Arc::from("asset")]
        );
    }

    #[test]
    fn exclude_matching_file() {
        let rules = RuleSet::new(vec![rule(
            "script",
            r"\.js$",
            Some("node_modules"),
            &["script"],
        )]);

        assert_eq!(rules.find(Path::new("/node_modules/lib/index.js")), None);
        assert!(rules.find(Path::new("/src/index.js")).is_some());
    }

    #[test]
    fn fall_through_excluded_rule() {
        let rules = RuleSet::new(vec![
            rule("script", r"\.js$", Some("vendor"), &["script"]),
            rule("text", r"\.js$", None, &["text"]),
        ]);

        assert_eq!(
            rules.find(Path::new("/vendor/foo.js")).map(Rule::name),
            Some("text")
        );
    }
}

use super::{
    DescriptorDeriver, Identifier, ModuleName, NamedDescriptor, Result,
};
use crate::graph::CodeClass;

/// Naming configuration for derived module names.
///
/// With a template, every `$i` / `${i}` placeholder is substituted with the
/// i-th identifier part. Without one, the default naming
/// `Module [part1:part2:…]` applies.
#[derive(Debug, Clone, Default)]
pub struct NamePattern {
    template: Option<String>,
}

impl NamePattern {
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
        }
    }

    pub fn format(&self, identifier: &Identifier) -> String {
        match &self.template {
            Some(template) => substitute(template, identifier.parts()),
            None => format!("Module [{}]", identifier.parts().join(":")),
        }
    }
}

impl DescriptorDeriver<NamedDescriptor> for NamePattern {
    fn derive(&self, identifier: &Identifier, _members: &[CodeClass]) -> Result<NamedDescriptor> {
        Ok(NamedDescriptor::new(ModuleName::new(
            self.format(identifier),
        )?))
    }
}

/// Replace every `$i` and `${i}` placeholder (1-indexed) with the i-th part.
/// Indices beyond the part count are left verbatim.
pub fn substitute(template: &str, parts: &[String]) -> String {
    let mut result = template.to_string();
    for (i, part) in parts.iter().enumerate() {
        let index = i + 1;
        result = result
            .replace(&format!("${index}"), part)
            .replace(&format!("${{{index}}}"), part);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_template_without_placeholders_is_unchanged() {
        assert_eq!(substitute("Backend", &parts(&["x"])), "Backend");
    }

    #[test]
    fn test_both_placeholder_forms() {
        assert_eq!(substitute("$1", &parts(&["x"])), "x");
        assert_eq!(substitute("${1}", &parts(&["x"])), "x");
    }

    #[test]
    fn test_placeholder_beyond_parts_left_verbatim() {
        assert_eq!(substitute("$1 and $2", &parts(&["x"])), "x and $2");
    }

    #[test]
    fn test_default_naming() {
        let pattern = NamePattern::default();
        assert_eq!(
            pattern.format(&Identifier::from_parts(["module1", "sub1"])),
            "Module [module1:sub1]"
        );
    }

    #[test]
    fn test_custom_template() {
        let pattern = NamePattern::from_template("MyModule [$1][${2}]");
        assert_eq!(
            pattern.format(&Identifier::from_parts(["module1", "sub1"])),
            "MyModule [module1][sub1]"
        );
    }
}

use super::{Identifier, Result};
use crate::graph::{CodeClass, PackagePattern};

/// Maps each class to the identifier of the module it belongs to.
///
/// Returning [`Identifier::ignore`] excludes the class from partitioning.
/// Classification only fails for configuration errors (see
/// [`RootClassifier`](super::RootClassifier)); pattern- and function-based
/// classifiers are infallible.
pub trait Classifier {
    fn classify(&self, class: &CodeClass) -> Result<Identifier>;
}

impl<F> Classifier for F
where
    F: Fn(&CodeClass) -> Identifier,
{
    fn classify(&self, class: &CodeClass) -> Result<Identifier> {
        Ok(self(class))
    }
}

/// Classifies by matching the class's package against a package pattern;
/// the captured groups become the identifier parts.
///
/// Classes whose package does not match are ignored, as are matches of a
/// pattern without capture groups (nothing to identify the module by).
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    pattern: PackagePattern,
}

impl PatternClassifier {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: PackagePattern::new(pattern)?,
        })
    }

    pub fn from_pattern(pattern: PackagePattern) -> Self {
        Self { pattern }
    }
}

impl Classifier for PatternClassifier {
    fn classify(&self, class: &CodeClass) -> Result<Identifier> {
        Ok(self
            .pattern
            .capture(class.package())
            .map(Identifier::from_parts)
            .unwrap_or_else(Identifier::ignore))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_classifier_captures_identifier() {
        let classifier = PatternClassifier::new("p.(*).(*)").expect("valid pattern");

        let class = CodeClass::new("p.module1.sub1.SomeClass");
        assert_eq!(
            classifier.classify(&class).expect("classifies"),
            Identifier::from_parts(["module1", "sub1"])
        );
    }

    #[test]
    fn test_pattern_classifier_ignores_non_matching() {
        let classifier = PatternClassifier::new("p.(*).(*)").expect("valid pattern");

        let class = CodeClass::new("q.module1.sub1.SomeClass");
        assert!(classifier.classify(&class).expect("classifies").is_ignore());
    }

    #[test]
    fn test_function_classifier() {
        let classifier = |class: &CodeClass| {
            if class.package().starts_with("app") {
                Identifier::from_parts(["app"])
            } else {
                Identifier::ignore()
            }
        };

        assert_eq!(
            classifier
                .classify(&CodeClass::new("app.core.X"))
                .expect("classifies"),
            Identifier::from_parts(["app"])
        );
        assert!(classifier
            .classify(&CodeClass::new("lib.Y"))
            .expect("classifies")
            .is_ignore());
    }
}

use super::{Identifier, ModuleError, ModuleName, Result};
use crate::graph::CodeClass;

/// Per-module metadata. Every descriptor exposes at least a display name;
/// implementations attach whatever extra payload they need.
pub trait Descriptor {
    fn name(&self) -> &ModuleName;
}

/// The minimal descriptor: a name and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDescriptor {
    name: ModuleName,
}

impl NamedDescriptor {
    pub fn new(name: ModuleName) -> Self {
        Self { name }
    }
}

impl Descriptor for NamedDescriptor {
    fn name(&self) -> &ModuleName {
        &self.name
    }
}

/// A descriptor carrying an arbitrary caller-supplied payload next to the
/// name, e.g. the parsed annotation of a module's root class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadDescriptor<A> {
    name: ModuleName,
    payload: A,
}

impl<A> PayloadDescriptor<A> {
    pub fn new(name: impl Into<String>, payload: A) -> Result<Self> {
        Ok(Self {
            name: ModuleName::new(name)?,
            payload,
        })
    }

    pub fn payload(&self) -> &A {
        &self.payload
    }
}

impl<A> Descriptor for PayloadDescriptor<A> {
    fn name(&self) -> &ModuleName {
        &self.name
    }
}

/// Derives one descriptor per module from its identifier and member classes.
pub trait DescriptorDeriver<D: Descriptor> {
    fn derive(&self, identifier: &Identifier, members: &[CodeClass]) -> Result<D>;
}

impl<D, F> DescriptorDeriver<D> for F
where
    D: Descriptor,
    F: Fn(&Identifier, &[CodeClass]) -> Result<D>,
{
    fn derive(&self, identifier: &Identifier, members: &[CodeClass]) -> Result<D> {
        self(identifier, members)
    }
}

/// Derives a module's descriptor from the exactly-one member class the
/// extractor recognizes as the module's root.
///
/// Zero or several recognized roots in one group is a configuration error;
/// the build fails with the offending count.
pub struct RootDescriptorDeriver<F> {
    extract: F,
}

impl<F> RootDescriptorDeriver<F> {
    pub fn new(extract: F) -> Self {
        Self { extract }
    }
}

impl<D, F> DescriptorDeriver<D> for RootDescriptorDeriver<F>
where
    D: Descriptor,
    F: Fn(&CodeClass) -> Option<D>,
{
    fn derive(&self, identifier: &Identifier, members: &[CodeClass]) -> Result<D> {
        let mut descriptors = members.iter().filter_map(|class| (self.extract)(class));
        match (descriptors.next(), descriptors.next()) {
            (Some(descriptor), None) => Ok(descriptor),
            (None, _) => Err(ModuleError::DescriptorDerivationFailed {
                identifier: identifier.clone(),
                found: 0,
            }),
            (Some(_), Some(_)) => Err(ModuleError::DescriptorDerivationFailed {
                identifier: identifier.clone(),
                found: 2 + descriptors.count(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(name: &str) -> Option<NamedDescriptor> {
        ModuleName::new(name).ok().map(NamedDescriptor::new)
    }

    #[test]
    fn test_root_deriver_picks_single_root() {
        let deriver = RootDescriptorDeriver::new(|class: &CodeClass| {
            (class.simple_name() == "Root").then(|| marked("The Root").expect("valid"))
        });

        let members = vec![CodeClass::new("a.Root"), CodeClass::new("a.Other")];
        let descriptor = deriver
            .derive(&Identifier::from_parts(["a"]), &members)
            .expect("derivation succeeds");
        assert_eq!(descriptor.name().as_str(), "The Root");
    }

    #[test]
    fn test_root_deriver_fails_without_root() {
        let deriver =
            RootDescriptorDeriver::new(|_: &CodeClass| None::<NamedDescriptor>);

        let members = vec![CodeClass::new("a.Other")];
        match deriver.derive(&Identifier::from_parts(["a"]), &members) {
            Err(ModuleError::DescriptorDerivationFailed { found: 0, .. }) => {}
            other => panic!("expected DescriptorDerivationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_root_deriver_fails_on_multiple_roots() {
        let deriver = RootDescriptorDeriver::new(|class: &CodeClass| {
            marked(class.simple_name())
        });

        let members = vec![
            CodeClass::new("a.First"),
            CodeClass::new("a.Second"),
            CodeClass::new("a.Third"),
        ];
        match deriver.derive(&Identifier::from_parts(["a"]), &members) {
            Err(ModuleError::DescriptorDerivationFailed { found: 3, .. }) => {}
            other => panic!("expected DescriptorDerivationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_descriptor() {
        let descriptor =
            PayloadDescriptor::new("Billing", vec!["allowed.dep"]).expect("valid name");
        assert_eq!(descriptor.name().as_str(), "Billing");
        assert_eq!(descriptor.payload(), &vec!["allowed.dep"]);
    }
}

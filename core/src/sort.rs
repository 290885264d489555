//! Feature classification.

use std::fmt;

/// The sort of a resolved feature.
///
/// Every element the resolution pipeline visits is classified into exactly
/// one sort. Fields become properties or collections depending on their
/// declared type; methods that are not support methods become actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSort {
    /// The domain type itself.
    Object,
    /// Single-valued field.
    Property,
    /// Multi-valued field.
    Collection,
    /// Invokable method.
    Action,
    /// Parameter of an action.
    Parameter,
}

impl FeatureSort {
    /// Returns true for sorts that appear in a type's member catalog.
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            FeatureSort::Property | FeatureSort::Collection | FeatureSort::Action
        )
    }

    /// Returns the lowercase name of this sort.
    pub fn name(&self) -> &'static str {
        match self {
            FeatureSort::Object => "object",
            FeatureSort::Property => "property",
            FeatureSort::Collection => "collection",
            FeatureSort::Action => "action",
            FeatureSort::Parameter => "parameter",
        }
    }
}

impl fmt::Display for FeatureSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

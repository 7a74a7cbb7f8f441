//! Rule evaluation context
//!
//! Rules are pure functions of the attribute set and this context: the
//! product catalog for availability checks, the teeth quantity table, and
//! how strictly unknown type values are treated.

use forgebom_database::ProductCatalog;
use forgebom_models::{ComponentList, ProductFamily};
use forgebom_utils::{ForgeError, ForgeResult, TeethTable};

pub struct RuleContext<'a> {
    pub catalog: &'a dyn ProductCatalog,
    pub teeth_table: Option<&'a TeethTable>,
    /// Fail on unknown type values instead of yielding an empty BOM.
    pub strict_types: bool,
}

impl<'a> RuleContext<'a> {
    pub fn new(catalog: &'a dyn ProductCatalog) -> Self {
        Self {
            catalog,
            teeth_table: None,
            strict_types: true,
        }
    }

    pub fn with_teeth_table(mut self, table: &'a TeethTable) -> Self {
        self.teeth_table = Some(table);
        self
    }

    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    /// Outcome for an attribute value no rule handles.
    pub fn unsupported(
        &self,
        family: ProductFamily,
        attribute: &str,
        value: &str,
    ) -> ForgeResult<ComponentList> {
        if self.strict_types {
            return Err(ForgeError::unsupported_type(
                family.template_name(),
                attribute,
                value,
            ));
        }

        tracing::warn!(
            family = %family,
            attribute,
            value,
            "Unsupported attribute value, no components derived"
        );
        Ok(ComponentList::new())
    }
}

/// Declares a closed set of attribute values.
///
/// Generates the enum, `parse` (exact match on the attribute value) and
/// `as_str`.
macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn parse(value: &str) -> Option<Self> {
                match value.trim() {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use attribute_enum;

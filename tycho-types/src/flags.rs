//! Combinable marker flags for properties and resource types.

use std::ops::{BitOr, BitOrAssign};

use serde::Serialize;

/// Markers attached to an object property.
///
/// Flags are independent bits and combine with `|`; a property may be
/// both required and read-only. Serialized as the raw bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PropertyFlags(u8);

impl PropertyFlags {
    pub const NONE: Self = Self(0);
    /// The property must be supplied.
    pub const REQUIRED: Self = Self(1);
    /// The property is set by the platform, never by the author.
    pub const READ_ONLY: Self = Self(1 << 1);
    /// The property identifies the resource.
    pub const IDENTIFIER: Self = Self(1 << 2);
    /// The property's value is fixed at deployment time.
    pub const DEPLOY_TIME_CONSTANT: Self = Self(1 << 3);

    /// Check whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no flag is set.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The raw bit value.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Names of the set flags, for human-readable output.
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::REQUIRED) {
            names.push("Required");
        }
        if self.contains(Self::READ_ONLY) {
            names.push("ReadOnly");
        }
        if self.contains(Self::IDENTIFIER) {
            names.push("Identifier");
        }
        if self.contains(Self::DEPLOY_TIME_CONSTANT) {
            names.push("DeployTimeConstant");
        }
        names
    }
}

impl BitOr for PropertyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PropertyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Markers attached to a resource type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ResourceFlags(u8);

impl ResourceFlags {
    pub const NONE: Self = Self(0);
    /// The resource can be referenced but not deployed.
    pub const READ_ONLY: Self = Self(1);

    /// Check whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no flag is set.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ResourceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ResourceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let flags = PropertyFlags::REQUIRED | PropertyFlags::READ_ONLY;
        assert!(flags.contains(PropertyFlags::REQUIRED));
        assert!(flags.contains(PropertyFlags::READ_ONLY));
        assert!(!flags.contains(PropertyFlags::IDENTIFIER));
    }

    #[test]
    fn test_none_contains_nothing() {
        assert!(PropertyFlags::NONE.is_none());
        assert!(!PropertyFlags::NONE.contains(PropertyFlags::REQUIRED));
        // NONE is a subset of anything.
        assert!(PropertyFlags::REQUIRED.contains(PropertyFlags::NONE));
    }

    #[test]
    fn test_bitor_assign() {
        let mut flags = PropertyFlags::NONE;
        flags |= PropertyFlags::IDENTIFIER;
        flags |= PropertyFlags::REQUIRED;
        assert_eq!(flags, PropertyFlags::REQUIRED | PropertyFlags::IDENTIFIER);
    }

    #[test]
    fn test_names() {
        assert!(PropertyFlags::NONE.names().is_empty());
        assert_eq!(
            (PropertyFlags::READ_ONLY | PropertyFlags::DEPLOY_TIME_CONSTANT).names(),
            vec!["ReadOnly", "DeployTimeConstant"]
        );
    }

    #[test]
    fn test_serializes_as_bits() {
        let flags = PropertyFlags::REQUIRED | PropertyFlags::IDENTIFIER;
        assert_eq!(serde_json::to_value(flags).unwrap(), serde_json::json!(5));
        assert_eq!(
            serde_json::to_value(ResourceFlags::NONE).unwrap(),
            serde_json::json!(0)
        );
    }
}

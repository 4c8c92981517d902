use std::fmt::Display;
use thiserror::Error;

/// Result type alias for value conversion
pub type Result<T> = std::result::Result<T, ValueError>;

// ========== Violation Facility ==========

/// Canonical violation kind taxonomy
///
/// Every assertion failure falls into exactly one of these kinds. Each kind
/// maps to a stable code that shows up in log events and can be matched on
/// in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Wrong number of comparison values, or a value that could not be inspected
    Misuse,
    /// A sequence, record or map was required but something else was supplied
    TypeShape,
    /// Key-indexed input is malformed (nil items, missing/nil/incomparable/duplicate keys)
    DataQuality,
    /// The values are well-formed but structurally different
    Mismatch,
}

impl ViolationKind {
    /// Get the stable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Misuse => "ERR_MISUSE",
            ViolationKind::TypeShape => "ERR_TYPE_SHAPE",
            ViolationKind::DataQuality => "ERR_DATA_QUALITY",
            ViolationKind::Mismatch => "ERR_MISMATCH",
        }
    }
}

/// Cause of a failed assertion
///
/// The `Display` output of each variant is the exact cause text placed in
/// the failure message, so the wording here is part of the public contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    // ===== Misuse =====
    /// Assertion called with the wrong number of comparison values
    #[error(
        "This assertion requires exactly {required} comparison values (you provided {provided})."
    )]
    ArgumentCount { required: usize, provided: usize },

    /// A value could not be converted for inspection
    #[error("Could not inspect value: {reason}")]
    Uninspectable { reason: String },

    // ===== Type shape =====
    /// One of the two values is not a sequence
    #[error("Both must be slice")]
    NotSlices,

    /// Sequence elements cannot carry a key
    #[error("Both must be slice of struct, *struct, map or interface")]
    UnkeyedElements,

    /// Record type has no field with the key name, but a field differing only in case
    #[error("Key `{key}` not found in struct (but it has `{similar}`)")]
    KeyNotFoundSimilar { key: String, similar: String },

    /// Record type has no field with the key name
    #[error("Key `{key}` not found in struct")]
    KeyNotFound { key: String },

    // ===== Data quality =====
    /// An element of the named sequence is nil
    #[error("All items must not be nil ({name}[{index}] is nil)")]
    NilItem { name: &'static str, index: usize },

    /// The key could not be read from an element
    #[error("Could not get key from {name}[{index}]")]
    KeyUnavailable { name: &'static str, index: usize },

    /// The key of an element is nil
    #[error("All item keys must not be nil ({name}[{index}].{key} is nil)")]
    NilKey {
        name: &'static str,
        index: usize,
        key: String,
    },

    /// The key of an element cannot be hashed
    #[error("All item keys must be comparable ({name}[{index}].{key} is not, type is `{type_name}`)")]
    IncomparableKey {
        name: &'static str,
        index: usize,
        key: String,
        type_name: String,
    },

    /// Two elements of the same sequence share a key
    #[error("{name}[{first}] and {name}[{second}] has duplicated keys: `{value}`")]
    DuplicateKey {
        name: &'static str,
        first: usize,
        second: usize,
        value: String,
    },

    // ===== Mismatch =====
    /// Sequence lengths differ
    #[error("Length not equal")]
    LengthMismatch,

    /// No actual item carries an expected key
    #[error("Expected item with {key}=`{value}` but not found")]
    MissingItem { key: String, value: String },

    /// Items sharing a key are structurally different
    #[error("Item with {key}=`{value}` is different: {rendered_diff}")]
    ItemDiffers {
        key: String,
        value: String,
        rendered_diff: String,
    },

    /// Structural differences were found
    #[error("Not match {count} {}: {rendered_diff}", item_noun(.count))]
    NotMatch { count: usize, rendered_diff: String },

    /// Every element matched but the consumed count disagrees with the length
    #[error("Slices are not equal")]
    SlicesNotEqual,
}

fn item_noun(count: &usize) -> &'static str {
    if *count == 1 {
        "item"
    } else {
        "items"
    }
}

impl Violation {
    /// Classify this violation
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::ArgumentCount { .. } | Violation::Uninspectable { .. } => {
                ViolationKind::Misuse
            }
            Violation::NotSlices
            | Violation::UnkeyedElements
            | Violation::KeyNotFoundSimilar { .. }
            | Violation::KeyNotFound { .. } => ViolationKind::TypeShape,
            Violation::NilItem { .. }
            | Violation::KeyUnavailable { .. }
            | Violation::NilKey { .. }
            | Violation::IncomparableKey { .. }
            | Violation::DuplicateKey { .. } => ViolationKind::DataQuality,
            Violation::LengthMismatch
            | Violation::MissingItem { .. }
            | Violation::ItemDiffers { .. }
            | Violation::NotMatch { .. }
            | Violation::SlicesNotEqual => ViolationKind::Mismatch,
        }
    }

    /// Get the stable code of this violation's kind
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

// ========== End Violation Facility ==========

/// Errors raised while converting a `Serialize` value into a [`Value`](crate::value::Value)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A 128-bit integer does not fit in 64 bits
    #[error("Integer out of range: {value}")]
    IntegerOutOfRange { value: String },

    /// A map value was serialized before its key
    #[error("Map value serialized without a key")]
    MapValueWithoutKey,

    /// Error reported by a `Serialize` implementation
    #[error("{message}")]
    Custom { message: String },
}

impl serde::ser::Error for ValueError {
    fn custom<T: Display>(msg: T) -> Self {
        ValueError::Custom {
            message: msg.to_string(),
        }
    }
}

impl From<ValueError> for Violation {
    fn from(err: ValueError) -> Self {
        Violation::Uninspectable {
            reason: err.to_string(),
        }
    }
}

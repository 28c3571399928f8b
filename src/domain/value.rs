// ============================================================================
// Inspected Value Model
// Type descriptors and storage words captured from an inspected object
// ============================================================================

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Descriptor
// ============================================================================

/// Declared type of an inspected object.
///
/// Mirrors what a debugger exposes: the spelled type name, the type a typedef
/// resolves to, and the pointee for pointer types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeDescriptor {
    pub name: String,
    /// Target of a typedef/alias, if this type is one
    pub typedef_target: Option<Box<TypeDescriptor>>,
    /// Pointee, if this is a pointer type
    pub pointee: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// A plain named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typedef_target: None,
            pointee: None,
        }
    }

    /// `alias` declared as a typedef of `target`.
    pub fn typedef(alias: impl Into<String>, target: TypeDescriptor) -> Self {
        Self {
            name: alias.into(),
            typedef_target: Some(Box::new(target)),
            pointee: None,
        }
    }

    /// Pointer to `target`.
    pub fn pointer_to(target: TypeDescriptor) -> Self {
        Self {
            name: format!("{} *", target.name),
            typedef_target: None,
            pointee: Some(Box::new(target)),
        }
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.pointee.is_some()
    }

    /// Pointee type, if any.
    pub fn target(&self) -> Option<&TypeDescriptor> {
        self.pointee.as_deref()
    }

    /// Follow typedef chains down to the underlying type.
    pub fn strip_typedefs(&self) -> &TypeDescriptor {
        let mut current = self;
        while let Some(next) = current.typedef_target.as_deref() {
            current = next;
        }
        current
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Storage words of an inspected object.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Storage {
    /// One fixed-point value, one word
    Scalar(u64),
    /// Array of fixed-point values, first word of each element
    Array(SmallVec<[u64; 4]>),
    /// Memory could not be read (optimized out, bad address)
    Unavailable,
}

impl Storage {
    /// Number of fixed-point elements held.
    pub fn len(&self) -> usize {
        match self {
            Storage::Scalar(_) => 1,
            Storage::Array(words) => words.len(),
            Storage::Unavailable => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The words to decode from, in element order.
    pub fn words(&self) -> &[u64] {
        match self {
            Storage::Scalar(word) => std::slice::from_ref(word),
            Storage::Array(words) => words.as_slice(),
            Storage::Unavailable => &[],
        }
    }
}

impl From<&[u64]> for Storage {
    fn from(words: &[u64]) -> Self {
        Storage::Array(SmallVec::from_slice(words))
    }
}

// ============================================================================
// Inspected Value
// ============================================================================

/// One object handed to the printer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InspectedValue {
    /// Symbol or expression the value was read from
    pub symbol: String,
    pub ty: TypeDescriptor,
    pub storage: Storage,
}

impl InspectedValue {
    pub fn new(symbol: impl Into<String>, ty: TypeDescriptor, storage: Storage) -> Self {
        Self {
            symbol: symbol.into(),
            ty,
            storage,
        }
    }

    /// Scalar value with a single storage word.
    pub fn scalar(symbol: impl Into<String>, type_name: impl Into<String>, word: u64) -> Self {
        Self::new(
            symbol,
            TypeDescriptor::named(type_name),
            Storage::Scalar(word),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_typedef_chain() {
        let base = TypeDescriptor::named("hls::ap_fixpt<16, 6>");
        let inner = TypeDescriptor::typedef("angle_t", base.clone());
        let outer = TypeDescriptor::typedef("phase_t", inner);

        assert_eq!(outer.strip_typedefs(), &base);
        assert_eq!(base.strip_typedefs(), &base);
    }

    #[test]
    fn test_pointer() {
        let ptr = TypeDescriptor::pointer_to(TypeDescriptor::named("hls::ap_ufixpt<8, 4>"));
        assert!(ptr.is_pointer());
        assert_eq!(ptr.name, "hls::ap_ufixpt<8, 4> *");
        assert_eq!(ptr.target().unwrap().name, "hls::ap_ufixpt<8, 4>");
    }

    #[test]
    fn test_storage_words() {
        assert_eq!(Storage::Scalar(7).words(), &[7]);
        assert_eq!(Storage::from(&[1u64, 2, 3][..]).words(), &[1, 2, 3]);
        assert!(Storage::Unavailable.is_empty());
        assert_eq!(Storage::from(&[1u64, 2][..]).len(), 2);
    }
}

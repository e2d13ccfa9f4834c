use super::{literal, MappingKind, StoreTypeName, StoreTypePostfix, TypeMappingParameters, ValueComparer};
use crate::{stmt::Type, stmt::Value, Error, Result};

use std::fmt;
use std::sync::Arc;

/// Binds a semantic type to a PostgreSQL store type.
///
/// A mapping decides how values of its type are rendered as SQL literals,
/// coerced before being bound as parameters, and compared for change
/// tracking. Mappings are immutable and cheap to clone; deriving a variant
/// with a different size or store type builds a new mapping and leaves the
/// original untouched.
///
/// ```
/// # use pgtranslate_core::{Options, TypeMappingSource};
/// let source = TypeMappingSource::new(&Options::default());
/// let character = source.find_mapping_by_store_type("character(10)").unwrap();
///
/// let wider = character.with_size(20).unwrap();
/// assert_eq!(character.store_type(), "character(10)");
/// assert_eq!(wider.store_type(), "character(20)");
/// ```
#[derive(Clone)]
pub struct TypeMapping {
    inner: Arc<Inner>,
}

struct Inner {
    kind: MappingKind,
    params: TypeMappingParameters,
}

impl TypeMapping {
    /// Builds a mapping, rejecting parameters the store type cannot
    /// represent.
    pub fn new(kind: MappingKind, params: TypeMappingParameters) -> Result<TypeMapping> {
        let params = normalize(&kind, params);
        validate(&params)?;
        Ok(TypeMapping::new_unchecked(kind, params))
    }

    /// Builds one of the known-valid mappings the source registers.
    pub(super) fn new_unchecked(kind: MappingKind, params: TypeMappingParameters) -> TypeMapping {
        TypeMapping {
            inner: Arc::new(Inner {
                params: normalize(&kind, params),
                kind,
            }),
        }
    }

    pub fn kind(&self) -> &MappingKind {
        &self.inner.kind
    }

    pub fn params(&self) -> &TypeMappingParameters {
        &self.inner.params
    }

    /// The semantic type of values using this mapping.
    pub fn ty(&self) -> &Type {
        &self.inner.params.ty
    }

    /// The store type name including facets, `character(10)`.
    pub fn store_type(&self) -> String {
        self.inner.params.full_store_type()
    }

    /// The store type name without facets, `character`.
    pub fn store_type_base(&self) -> &str {
        &self.inner.params.store_type
    }

    pub fn size(&self) -> Option<u32> {
        self.inner.params.size
    }

    pub fn precision(&self) -> Option<u32> {
        self.inner.params.precision
    }

    pub fn scale(&self) -> Option<u32> {
        self.inner.params.scale
    }

    pub fn is_fixed_length(&self) -> bool {
        self.inner.params.fixed_length
    }

    pub fn element(&self) -> Option<&TypeMapping> {
        self.inner.kind.element()
    }

    /// Renders `value` as a SQL literal of this store type. Null renders as
    /// `NULL`. Values the mapping has no literal form for are an error.
    pub fn generate_literal(&self, value: &Value) -> Result<String> {
        literal::generate(self, value)
    }

    /// Coerces a value before it is bound as a parameter.
    ///
    /// `character(n)` columns are blank-padded by the database, so strings
    /// bound to them have trailing whitespace removed.
    pub fn configure_parameter(&self, value: Value) -> Value {
        match (&self.inner.kind, value) {
            (MappingKind::Character, Value::String(value)) => {
                let trimmed = value.trim_end();
                if trimmed.len() == value.len() {
                    Value::String(value)
                } else {
                    Value::String(trimmed.to_string())
                }
            }
            (_, value) => value,
        }
    }

    /// Equality used for change tracking.
    pub fn comparer(&self) -> ValueComparer {
        match (&self.inner.kind, &self.inner.params.ty) {
            (MappingKind::Character, Type::String) => ValueComparer::CHARACTER,
            _ => ValueComparer::DEFAULT,
        }
    }

    /// Equality used for key lookups. Always agrees with [`comparer`].
    ///
    /// [`comparer`]: TypeMapping::comparer
    pub fn key_comparer(&self) -> ValueComparer {
        self.comparer()
    }

    /// Derives a mapping of the same kind from new parameters.
    pub fn clone_with(&self, params: TypeMappingParameters) -> Result<TypeMapping> {
        TypeMapping::new(self.inner.kind.clone(), params)
    }

    pub fn with_size(&self, size: u32) -> Result<TypeMapping> {
        self.clone_with(self.params().clone().size(size))
    }

    pub fn with_precision_scale(&self, precision: u32, scale: Option<u32>) -> Result<TypeMapping> {
        self.clone_with(self.params().clone().precision(precision).scale(scale))
    }

    /// Derives a mapping for a store type name of the same kind, applying
    /// any facets the name carries: `character(20)`, `numeric(10,2)`.
    pub fn with_store_type(&self, store_type: &str) -> Result<TypeMapping> {
        let name = StoreTypeName::parse(store_type)?;
        let mut params = self.params().clone();
        params.store_type = name.unfaceted();

        match (params.postfix, name.facets.as_slice()) {
            (_, []) => {}
            (StoreTypePostfix::Size, [size]) => params.size = Some(*size),
            (StoreTypePostfix::Precision, [precision]) => params.precision = Some(*precision),
            (StoreTypePostfix::PrecisionAndScale, [precision]) => {
                params.precision = Some(*precision);
                params.scale = None;
            }
            (StoreTypePostfix::PrecisionAndScale, [precision, scale]) => {
                params.precision = Some(*precision);
                params.scale = Some(*scale);
            }
            _ => {
                return Err(Error::invalid_type_mapping(
                    store_type,
                    "facets are not supported",
                ))
            }
        }

        self.clone_with(params)
    }

    /// Returns a copy of this mapping for a different semantic type.
    pub fn with_ty(&self, ty: Type) -> TypeMapping {
        let mut params = self.params().clone();
        params.ty = ty;
        TypeMapping::new_unchecked(self.inner.kind.clone(), params)
    }
}

/// Kind-specific parameter rules that hold for every derived variant.
fn normalize(kind: &MappingKind, mut params: TypeMappingParameters) -> TypeMappingParameters {
    if let MappingKind::Character = kind {
        params.postfix = StoreTypePostfix::Size;
        params.fixed_length = true;
    }

    params
}

fn validate(params: &TypeMappingParameters) -> Result<()> {
    let store_type = params.full_store_type();
    let invalid = |message: &str| Err(Error::invalid_type_mapping(&store_type, message));

    if params.scale.is_some() && params.precision.is_none() {
        return invalid("scale requires a precision");
    }

    match params.postfix {
        StoreTypePostfix::None | StoreTypePostfix::Size if params.precision.is_some() => {
            return invalid("precision is not supported");
        }
        StoreTypePostfix::Precision if params.scale.is_some() => {
            return invalid("scale is not supported");
        }
        StoreTypePostfix::Precision if params.precision.is_some_and(|p| p > 6) => {
            return invalid("precision must be between 0 and 6");
        }
        StoreTypePostfix::PrecisionAndScale
            if params.precision.is_some_and(|p| p == 0 || p > 1000) =>
        {
            return invalid("precision must be between 1 and 1000");
        }
        _ => {}
    }

    match params.size {
        Some(_) if params.postfix != StoreTypePostfix::Size => invalid("size is not supported"),
        Some(0) => invalid("size must be at least 1"),
        _ => Ok(()),
    }
}

impl PartialEq for TypeMapping {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.kind == other.inner.kind && self.inner.params == other.inner.params)
    }
}

impl fmt::Debug for TypeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMapping")
            .field("store_type", &self.store_type())
            .field("ty", self.ty())
            .finish()
    }
}

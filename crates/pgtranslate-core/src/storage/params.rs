use crate::stmt::Type;

/// The parameters a [`TypeMapping`](super::TypeMapping) is built from.
///
/// Deriving a variant of a mapping means building a new mapping from an
/// edited copy of its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeMappingParameters {
    /// Semantic type of values using the mapping
    pub ty: Type,

    /// Store type name without facets, `character`, `numeric`, `integer[]`
    pub store_type: String,

    /// Which facets the store type takes
    pub postfix: StoreTypePostfix,

    pub size: Option<u32>,

    pub precision: Option<u32>,

    pub scale: Option<u32>,

    /// Values are padded to `size`
    pub fixed_length: bool,

    pub unicode: bool,
}

/// Facets appended to the store type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreTypePostfix {
    /// The store type takes no facets, `boolean`
    None,

    /// `character(n)`
    Size,

    /// `timestamp(p)`
    Precision,

    /// `numeric(p,s)`
    PrecisionAndScale,
}

impl TypeMappingParameters {
    pub fn new(ty: impl Into<Type>, store_type: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            store_type: store_type.into(),
            postfix: StoreTypePostfix::None,
            size: None,
            precision: None,
            scale: None,
            fixed_length: false,
            unicode: true,
        }
    }

    pub fn postfix(mut self, postfix: StoreTypePostfix) -> Self {
        self.postfix = postfix;
        self
    }

    pub fn size(mut self, size: impl Into<Option<u32>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn precision(mut self, precision: impl Into<Option<u32>>) -> Self {
        self.precision = precision.into();
        self
    }

    pub fn scale(mut self, scale: impl Into<Option<u32>>) -> Self {
        self.scale = scale.into();
        self
    }

    pub fn fixed_length(mut self, fixed_length: bool) -> Self {
        self.fixed_length = fixed_length;
        self
    }

    pub fn unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    /// The store type name with its facets, `character(10)` or
    /// `timestamp(3) with time zone`.
    pub fn full_store_type(&self) -> String {
        let facets = match self.postfix {
            StoreTypePostfix::None => None,
            StoreTypePostfix::Size => self.size.map(|size| size.to_string()),
            StoreTypePostfix::Precision => self.precision.map(|precision| precision.to_string()),
            StoreTypePostfix::PrecisionAndScale => match (self.precision, self.scale) {
                (Some(precision), Some(scale)) => Some(format!("{precision},{scale}")),
                (Some(precision), None) => Some(precision.to_string()),
                _ => None,
            },
        };

        let Some(facets) = facets else {
            return self.store_type.clone();
        };

        // Array suffixes follow the facets: `character(10)[]`
        let (base, suffix) = match self.store_type.strip_suffix("[]") {
            Some(base) => (base, "[]"),
            None => (self.store_type.as_str(), ""),
        };

        // Time zone qualifiers follow the facets: `timestamp(3) with time zone`
        match base
            .find(" with time zone")
            .or_else(|| base.find(" without time zone"))
        {
            Some(at) => format!("{}({facets}){}{suffix}", &base[..at], &base[at..]),
            None => format!("{base}({facets}){suffix}"),
        }
    }
}

//! Store-type rules: how semantic values are stored, rendered as literals,
//! coerced before binding and compared.

mod comparer;
pub use comparer::ValueComparer;

mod kind;
pub use kind::MappingKind;

mod literal;

mod params;
pub use params::{StoreTypePostfix, TypeMappingParameters};

mod source;
pub use source::TypeMappingSource;

mod store_type;
pub use store_type::StoreTypeName;

mod type_mapping;
pub use type_mapping::TypeMapping;

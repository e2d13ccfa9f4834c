use crate::{
    call::{Member, MemberAccess},
    MemberTranslator, SqlExpressionFactory, Translation,
};

use pgtranslate_core::{
    diagnostics::Logger,
    stmt::{Expr, ExprJsonTraversal, Type},
    TypeMapping,
};

/// Translates property access and array length on documents mapped to
/// `json` or `jsonb` columns.
pub struct JsonPocoTranslator {
    factory: SqlExpressionFactory,
    text: Option<TypeMapping>,
}

impl JsonPocoTranslator {
    pub fn new(factory: &SqlExpressionFactory) -> Self {
        JsonPocoTranslator {
            factory: factory.clone(),
            text: factory.type_mapping_source().find_mapping_by_store_type("text"),
        }
    }

    /// `doc->'name'` for documents, `doc->>'name'` for scalars. Scalars other
    /// than strings are cast from the extracted text.
    fn property(&self, instance: &Expr, name: &str, return_type: &Type) -> Expr {
        let factory = &self.factory;
        let step = factory.constant(name);

        if !is_scalar(return_type) {
            let mapping = instance.type_mapping().cloned();
            return traverse(factory, instance, step, false, return_type.clone(), mapping);
        }

        let text = traverse(factory, instance, step, true, Type::String, self.text.clone());

        if return_type.is_string() {
            text
        } else {
            factory.convert(text, return_type.clone(), None)
        }
    }

    fn array_length(&self, instance: &Expr, mapping: &TypeMapping) -> Expr {
        let name = if mapping.store_type_base() == "jsonb" {
            "jsonb_array_length"
        } else {
            "json_array_length"
        };

        self.factory.function(
            name,
            vec![instance.clone()],
            true,
            vec![true],
            Type::I32,
            self.factory.find_mapping(&Type::I32),
        )
    }

    /// `length(doc->>'name')`. A string property still carrying the document
    /// mapping has to be extracted as text first.
    fn string_length(&self, traversal: &ExprJsonTraversal) -> Expr {
        let text = Expr::from(ExprJsonTraversal {
            returns_text: true,
            ty: Type::String,
            type_mapping: self.text.clone(),
            ..traversal.clone()
        });

        self.factory.function(
            "length",
            vec![text],
            true,
            vec![true],
            Type::I32,
            self.factory.find_mapping(&Type::I32),
        )
    }
}

impl MemberTranslator for JsonPocoTranslator {
    fn translate(&self, access: &MemberAccess, _logger: &Logger) -> Translation {
        let Some(instance) = &access.instance else {
            return Translation::NotApplicable;
        };

        let Some(mapping) = instance.type_mapping().filter(|mapping| mapping.kind().is_json()) else {
            return Translation::NotApplicable;
        };

        match &access.member {
            Member::Property(name) => self.property(instance, name, &access.return_type).into(),
            Member::Length | Member::Count => match (instance, instance.ty()) {
                (Expr::JsonTraversal(traversal), Type::String) => {
                    self.string_length(traversal).into()
                }
                (_, Type::Array(_) | Type::Json) => self.array_length(instance, mapping).into(),
                _ => Translation::NotApplicable,
            },
            _ => Translation::NotApplicable,
        }
    }
}

/// Documents and collections stay JSON; everything else is extracted as text.
fn is_scalar(ty: &Type) -> bool {
    !matches!(ty, Type::Json | Type::Array(_) | Type::Record(_))
}

/// Extends an existing `->` traversal rather than nesting a new one.
fn traverse(
    factory: &SqlExpressionFactory,
    instance: &Expr,
    step: Expr,
    returns_text: bool,
    ty: Type,
    mapping: Option<TypeMapping>,
) -> Expr {
    match instance {
        Expr::JsonTraversal(traversal) if !traversal.returns_text => {
            traversal.append(step, returns_text, ty, mapping).into()
        }
        _ => factory.json_traversal(instance.clone(), vec![step], returns_text, ty, mapping),
    }
}

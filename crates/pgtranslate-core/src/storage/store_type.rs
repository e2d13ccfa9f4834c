use crate::{err, Result};

/// A store type name split into its base name, facets and array suffix.
///
/// ```
/// # use pgtranslate_core::storage::StoreTypeName;
/// let name = StoreTypeName::parse("numeric(10, 2)[]").unwrap();
/// assert_eq!(name.base, "numeric");
/// assert_eq!(name.facets, vec![10, 2]);
/// assert!(name.is_array);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreTypeName {
    /// Lowercase base name with inner whitespace normalized
    pub base: String,

    /// Numeric facets in declaration order
    pub facets: Vec<u32>,

    pub is_array: bool,
}

impl StoreTypeName {
    pub fn parse(name: &str) -> Result<StoreTypeName> {
        let mut rest = name.trim();

        let is_array = match rest.strip_suffix("[]") {
            Some(element) => {
                rest = element.trim_end();
                true
            }
            None => false,
        };

        // Facets sit at the end or before a qualifier: `timestamp(3) with time zone`
        let (base, facets) = match rest.find('(') {
            Some(open) => {
                let close = match rest.find(')') {
                    Some(close) if close > open => close,
                    _ => return Err(err!("unbalanced facets in store type `{name}`")),
                };

                let qualifier = &rest[close + 1..];

                if qualifier.contains(['(', ')']) {
                    return Err(err!("unbalanced facets in store type `{name}`"));
                }

                let facets = rest[open + 1..close]
                    .split(',')
                    .map(|facet| facet.trim().parse::<u32>())
                    .collect::<core::result::Result<Vec<_>, _>>()?;

                (format!("{} {qualifier}", &rest[..open]), facets)
            }
            None => (rest.to_string(), vec![]),
        };

        let base = base.split_whitespace().collect::<Vec<_>>().join(" ");

        if base.is_empty() {
            return Err(err!("empty store type name"));
        }

        Ok(StoreTypeName {
            base: base.to_ascii_lowercase(),
            facets,
            is_array,
        })
    }

    /// The base name with the array suffix, without facets.
    pub fn unfaceted(&self) -> String {
        if self.is_array {
            format!("{}[]", self.base)
        } else {
            self.base.clone()
        }
    }
}

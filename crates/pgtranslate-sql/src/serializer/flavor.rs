use super::Serializer;

#[derive(Debug)]
pub(super) enum Flavor {
    Postgresql,
    Redshift,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    /// Amazon Redshift has no `FILTER` clause on aggregates; filters are
    /// folded into the first aggregate argument instead.
    pub fn redshift() -> Serializer {
        Serializer {
            flavor: Flavor::Redshift,
        }
    }

    pub(super) fn is_redshift(&self) -> bool {
        matches!(self.flavor, Flavor::Redshift)
    }
}

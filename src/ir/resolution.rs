use super::Alias;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    aliases: Vec<Alias>,
    extensions: Vec<String>,
}

impl Resolution {
    pub fn new(mut aliases: Vec<Alias>, extensions: Vec<String>) -> Self {
        aliases.sort_by(|one, other| {
            other
                .prefix()
                .len()
                .cmp(&one.prefix().len())
                .then_with(|| one.prefix().cmp(other.prefix()))
        });

        Self {
            aliases,
            extensions,
        }
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

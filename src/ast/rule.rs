use super::VariableDefinition;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<'a> {
    name: &'a str,
    variable_definitions: Vec<VariableDefinition<'a>>,
}

impl<'a> Rule<'a> {
    pub fn new(name: &'a str, variable_definitions: Vec<VariableDefinition<'a>>) -> Self {
        Self {
            name,
            variable_definitions,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition<'a>] {
        &self.variable_definitions
    }
}

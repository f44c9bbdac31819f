// Limits for the line-numbered interpreter

/// Maximum number of variables a program may declare
pub const MAX_VARIABLES: usize = 1000;

/// Maximum length of a variable name, in characters
pub const MAX_VARIABLE_NAME_LEN: usize = 10;

/// Rows and columns of the character screen; `print` outside it is dropped
pub const SCREEN_SIZE: usize = 200;

/// Parse-time limits, overridable for embedding and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_variables: usize,
    pub max_name_len: usize,
}

impl Limits {
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_variables: MAX_VARIABLES,
            max_name_len: MAX_VARIABLE_NAME_LEN,
        }
    }
}

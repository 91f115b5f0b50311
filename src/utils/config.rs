// Rendering pass output format
pub mod render {
    // Spaces emitted per nesting level
    pub const INDENT_WIDTH: usize = 2;

    pub const CREATE_PREFIX: &str = "Create ";
    pub const END_PREFIX: &str = "End ";

    // Fixed marker lines
    pub const PARAMETERS_HEADER: &str = "Parameters:";
    pub const ARGUMENTS_HEADER: &str = "Arguments are:";
    pub const LOOP_BODY_MARKER: &str = "Create Loop Body";
    pub const ELSE_BODY_MARKER: &str = "Create Else Body";
}

// Tree interchange
pub mod input {
    // Trees built by the external parser are handed over as JSON documents
    pub const TREE_EXTENSION: &str = "json";
}

// Slot names reported in structural errors
pub mod slots {
    pub const EXPRESSION: &str = "expression";
    pub const OPERAND: &str = "operand";
    pub const LEFT: &str = "left operand";
    pub const RIGHT: &str = "right operand";
    pub const CONDITION: &str = "condition";
    pub const BODY: &str = "body";
    pub const INITIALIZER: &str = "initializer";
    pub const UPDATE: &str = "update";
}

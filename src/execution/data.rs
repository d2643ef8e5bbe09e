use std::path::PathBuf;

/// One program invocation: `program_name args... [> output_file]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    pub program_name: String,
    pub args: Vec<String>,
    pub output_file: Option<PathBuf>,
}

impl SimpleCommand {
    pub fn new(program_name: String) -> Self {
        Self {
            program_name,
            args: Vec::new(),
            output_file: None,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }
}

/// Binary operator joining the two halves of a compound command.
///
/// The second operand lives inside the operator, so a compound command
/// without an operator has nowhere to keep one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    None,
    And(SimpleCommand),
    Or(SimpleCommand),
    Pipe(SimpleCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundCommand {
    pub cmd1: SimpleCommand,
    pub operator: Operator,
}

impl CompoundCommand {
    pub fn single(cmd1: SimpleCommand) -> Self {
        Self {
            cmd1,
            operator: Operator::None,
        }
    }

    pub fn cmd2(&self) -> Option<&SimpleCommand> {
        match &self.operator {
            Operator::None => None,
            Operator::And(cmd) | Operator::Or(cmd) | Operator::Pipe(cmd) => Some(cmd),
        }
    }
}

/// The parsed plan for one input line.
///
/// `in_parallel` is set when the compound commands were separated by `&`.
/// Commands still run one after another; the flag only means a failing
/// command does not stop the rest of the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence {
    pub commands: Vec<CompoundCommand>,
    pub in_parallel: bool,
}

impl CommandSequence {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

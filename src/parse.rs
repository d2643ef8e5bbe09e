mod token;

pub use token::{MAX_TOKEN_LEN, MAX_TOKENS, is_operator, tokenize};

use log::debug;

use crate::{
    execution::data::{CommandSequence, CompoundCommand, Operator, SimpleCommand},
    result::{Result, ShellError},
};

pub const MAX_ARGS: usize = 10;
pub const MAX_COMMANDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Sequential,
    Parallel,
}

/// Parses one `program args... [> file]`.
///
/// Returns the command and the number of tokens consumed. Parsing stops before
/// the first operator token, or right after a redirection target.
pub fn parse_simple_command(tokens: &[String]) -> Result<(SimpleCommand, usize)> {
    let program = match tokens.first() {
        None => return Err(ShellError::EmptyOperand(String::from("end of line"))),
        Some(t) if is_operator(t) => return Err(ShellError::EmptyOperand(t.clone())),
        Some(t) => t,
    };

    let mut command = SimpleCommand::new(program.clone());
    let mut consumed = 1;

    while let Some(token) = tokens.get(consumed) {
        if token == token::REDIRECT_OUT {
            let target = tokens
                .get(consumed + 1)
                .ok_or(ShellError::MissingRedirectTarget)?;
            command.output_file = Some(target.into());
            consumed += 2;
            break;
        }
        if is_operator(token) {
            break;
        }
        if command.args.len() == MAX_ARGS {
            return Err(ShellError::TooManyArgs {
                program: command.program_name,
                max: MAX_ARGS,
            });
        }
        command.args.push(token.clone());
        consumed += 1;
    }

    Ok((command, consumed))
}

/// Parses `simple [(&& | || | |) simple]`.
pub fn parse_compound_command(tokens: &[String]) -> Result<(CompoundCommand, usize)> {
    let (cmd1, mut consumed) = parse_simple_command(tokens)?;

    let next = tokens.get(consumed).map(String::as_str);
    let make_operator: fn(SimpleCommand) -> Operator = match next {
        Some(token::AND) => Operator::And,
        Some(token::OR) => Operator::Or,
        Some(token::PIPE) => Operator::Pipe,
        _ => return Ok((CompoundCommand::single(cmd1), consumed)),
    };
    consumed += 1;

    let (cmd2, consumed_cmd2) = parse_simple_command(&tokens[consumed..])?;
    let command = CompoundCommand {
        cmd1,
        operator: make_operator(cmd2),
    };
    Ok((command, consumed + consumed_cmd2))
}

/// Parses a whole tokenized line.
///
/// Compound commands are separated by `;` or `&`, and one line may only use
/// one kind of separator. Returns the plan and the number of tokens consumed,
/// which on success is always every token.
pub fn parse(tokens: &[String]) -> Result<(CommandSequence, usize)> {
    let mut sequence = CommandSequence::default();
    let mut separator: Option<Separator> = None;
    let mut cursor = 0;

    while cursor < tokens.len() {
        if sequence.commands.len() == MAX_COMMANDS {
            return Err(ShellError::TooManyCommands(MAX_COMMANDS));
        }
        let (command, consumed) = parse_compound_command(&tokens[cursor..])?;
        sequence.commands.push(command);
        cursor += consumed;

        let Some(next) = tokens.get(cursor) else {
            break;
        };
        let kind = match next.as_str() {
            token::SEQUENTIAL => Separator::Sequential,
            token::PARALLEL => Separator::Parallel,
            _ => return Err(ShellError::UnexpectedToken(next.clone())),
        };
        match separator {
            Some(seen) if seen != kind => return Err(ShellError::MixedSeparators),
            _ => separator = Some(kind),
        }
        cursor += 1;
    }

    sequence.in_parallel = separator == Some(Separator::Parallel);
    debug!("parsed {} token(s) into {:?}", cursor, sequence);
    Ok((sequence, cursor))
}

/// Tokenizes and parses one raw line.
pub fn parse_line(line: &str) -> Result<CommandSequence> {
    let tokens = tokenize(line)?;
    debug!("tokens: {:?}", tokens);
    let (sequence, _) = parse(&tokens)?;
    Ok(sequence)
}

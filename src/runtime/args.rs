use std::path::PathBuf;

pub const USAGE: &str = "\
usage: boxart <command> [args]

commands:
  fetch [CATALOG]        download box art and write the annotated game list
  sort [INPUT] [OUTPUT]  sort a game list by sales
  config                 print the effective settings
  help                   show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch { catalog: Option<PathBuf> },
    Sort {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    },
    Config,
    Help,
}

/// Parse the arguments that follow the program name.
pub fn parse<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let Some(cmd) = args.next() else {
        return Ok(Command::Help);
    };
    let rest: Vec<String> = args.collect();

    let max_args = match cmd.as_str() {
        "fetch" => 1,
        "sort" => 2,
        "config" | "help" | "-h" | "--help" => 0,
        other => return Err(format!("unknown command '{other}'")),
    };
    if rest.len() > max_args {
        return Err(format!("too many arguments for '{cmd}'"));
    }

    let mut paths = rest.into_iter().map(PathBuf::from);
    Ok(match cmd.as_str() {
        "fetch" => Command::Fetch {
            catalog: paths.next(),
        },
        "sort" => Command::Sort {
            input: paths.next(),
            output: paths.next(),
        },
        "config" => Command::Config,
        _ => Command::Help,
    })
}

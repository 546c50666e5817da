use church::{
    Term, app,
    boolean::{FALSE, TRUE},
    decode::{self, Decoded, Decoder},
    inspect::describe,
    lexer::TkTy,
    prelude::{self, DEFINITIONS},
    query::{self, Evaluator, Parser},
};
use log::debug;
use miette::{Diagnostic, NamedSource, Severity};
use rustyline::{DefaultEditor, error::ReadlineError};
use smallvec::{SmallVec, ToSmallVec};
use std::{fmt::Write, str::FromStr, time::Instant};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("can't read the next line")]
    #[diagnostic(
        code(repl::input::readline_error),
        help("are you really running this on interactive mode?")
    )]
    Input(ReadlineError),

    #[error("unknown command")]
    #[diagnostic(code(repl::command::unknown), help("`:help` lists the commands"))]
    UnknownCommand(String),

    #[error("missing argument")]
    #[diagnostic(
        code(repl::command::missing_arg),
        help("are you sure this is the command?")
    )]
    MissingArg(String),

    #[error("unknown definition `{0}`")]
    #[diagnostic(code(repl::command::unknown_definition), help("`:list` shows every definition"))]
    UnknownDefinition(String),

    #[error("invalid setting value: {0} doesn't accept {1:?}")]
    #[diagnostic(
        code(repl::command::set::invalid_valid),
        help("are you sure this is the setting?")
    )]
    InvalidValue(String, String),

    #[error("unknown {0:?} setting")]
    #[diagnostic(code(repl::command::set::unknown_setting), help("mistyping maybe?"))]
    UnknownSetting(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    QueryError(#[from] query::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    DecodeError(#[from] decode::Error),
}

pub struct Command<'a> {
    pub cmd: &'a str,
    pub desc: &'a str,
    pub alias: &'a str,
    pub func: fn(&mut Repl, &str) -> Result<()>,
}

fn quit_cmd(_r: &mut Repl, _input: &str) -> Result<()> {
    std::process::exit(0);
}

fn set_cmd(r: &mut Repl, input: &str) -> Result<()> {
    fn set<T: FromStr>(prop: &mut T, setting: &str, value: &str) -> Result<()> {
        *prop = value
            .parse()
            .map_err(|_| Error::InvalidValue(setting.to_string(), value.to_string()))?;
        Ok(())
    }

    let (setting, value) = input
        .split_once(' ')
        .ok_or_else(|| Error::MissingArg("setting".to_string()))?;
    match setting {
        "prompt" => set(&mut r.prompt, "prompt", value)?,
        "fuel" => set(&mut r.decoder.fuel, "fuel", value)?,
        "max_numeral" => set(&mut r.evaluator.max_numeral, "max_numeral", value)?,
        "bench" => {
            r.bench = BENCH_SETTING
                .parse_inspired(value)
                .map_err(|v| Error::InvalidValue(setting.to_string(), v.to_string()))?
        }
        "show" => {
            r.show = SHOW_SETTING
                .parse_inspired(value)
                .map_err(|v| Error::InvalidValue(setting.to_string(), v.to_string()))?
        }
        _ => return Err(Error::UnknownSetting(setting.to_string())),
    }
    Ok(())
}

fn list_cmd(_r: &mut Repl, _input: &str) -> Result<()> {
    let width = DEFINITIONS.iter().map(|d| d.name.len()).max().unwrap_or(0);
    for d in DEFINITIONS {
        println!("{:width$} = {}", d.name, d.lambda);
    }
    Ok(())
}

fn definition(input: &str) -> Result<&'static prelude::Definition> {
    let name = input.trim();
    if name.is_empty() {
        return Err(Error::MissingArg("definition".to_string()));
    }
    prelude::lookup(name).ok_or_else(|| Error::UnknownDefinition(name.to_string()))
}

fn describe_cmd(_r: &mut Repl, input: &str) -> Result<()> {
    let d = definition(input)?;
    println!("{}", describe(&d.term(), d.name));
    println!("{} = {}", d.name, d.lambda);
    Ok(())
}

fn table_cmd(r: &mut Repl, input: &str) -> Result<()> {
    let d = definition(input)?;
    let op = d.term();
    let row = |args: &[&Term]| -> Result<String> {
        let result = op.apply_all(args.iter().map(|a| Term::clone(a)));
        let mut line = String::new();
        for a in args {
            write!(line, "{:5} ", Decoded::Bool(r.decoder.decode_bool(a)?)).unwrap();
        }
        write!(line, "| {}", Decoded::Bool(r.decoder.decode_bool(&result)?)).unwrap();
        Ok(line)
    };
    if r.decoder.decode_bool(&app!(op, TRUE)).is_ok() {
        for x in [&*TRUE, &*FALSE] {
            println!("{}", row(&[x])?);
        }
    } else {
        for x in [&*TRUE, &*FALSE] {
            for y in [&*TRUE, &*FALSE] {
                println!("{}", row(&[x, y])?);
            }
        }
    }
    Ok(())
}

fn help_cmd(_r: &mut Repl, _input: &str) -> Result<()> {
    for c in COMMANDS {
        println!(":{:9} :{:2} {}", c.cmd, c.alias, c.desc);
    }
    println!("anything else is a query, e.g. `iszero (pred 3)`");
    Ok(())
}

pub const COMMANDS: &[Command] = &[
    Command {
        cmd: "quit",
        alias: "q",
        desc: "quits the terminal",
        func: quit_cmd,
    },
    Command {
        cmd: "set",
        alias: "s",
        desc: "manual settings",
        func: set_cmd,
    },
    Command {
        cmd: "list",
        alias: "l",
        desc: "lists every definition",
        func: list_cmd,
    },
    Command {
        cmd: "describe",
        alias: "d",
        desc: "shows how a definition looks from the outside",
        func: describe_cmd,
    },
    Command {
        cmd: "table",
        alias: "t",
        desc: "prints the truth table of a logical operator",
        func: table_cmd,
    },
    Command {
        cmd: "help",
        alias: "h",
        desc: "shows this help",
        func: help_cmd,
    },
];

#[derive(Default, Clone)]
pub struct Setting {
    all: &'static [&'static str],
    on: SmallVec<[&'static str; 8]>,
}

impl Setting {
    fn parse_inspired<'a>(&self, value: &'a str) -> std::result::Result<Self, &'a str> {
        if value == "all" {
            return Ok(Setting {
                all: self.all,
                on: self.all.to_smallvec(),
            });
        }
        let mut s = Self {
            all: self.all,
            on: SmallVec::new(),
        };
        if value == "none" {
            return Ok(s);
        }
        for v in value.split(',') {
            let trimmed = v.trim();
            if let Some(set) = self.all.iter().find(|&&a_v| a_v == trimmed) {
                s.on.push(set);
            } else {
                return Err(trimmed);
            }
        }
        Ok(s)
    }
}

pub const BENCH_SETTING: Setting = Setting {
    all: &["lexer", "parser", "eval", "decode", "command"],
    on: SmallVec::new_const(),
};

pub const SHOW_SETTING: Setting = Setting {
    all: &["lexer", "parser", "eval"],
    on: SmallVec::new_const(),
};

pub struct Repl {
    pub prompt: String,
    pub rl: DefaultEditor,
    pub warnings: usize,
    pub errors: usize,
    pub bench: Setting,
    pub show: Setting,
    pub decoder: Decoder,
    pub evaluator: Evaluator,
}

impl Repl {
    pub fn reset_diagnostics(&mut self) {
        self.warnings = 0;
        self.errors = 0;
    }

    pub fn bench<T>(&mut self, label: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        if !self.bench.on.contains(&label) {
            return f(self);
        }
        let start = Instant::now();
        let r = f(self);
        let elapsed = start.elapsed();
        println!("[{label}: {elapsed:?}]");
        r
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let input = self.input();
            self.reset_diagnostics();
            let input = match input {
                Ok(s) => s,
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(Error::Input(e)),
            };
            if input.trim().is_empty() {
                continue;
            }
            let result = if let Some(input) = input.strip_prefix(':') {
                self.cmd(input)
            } else {
                self.expression(&input)
            };
            if let Err(e) = result {
                self.report(e, input);
            }
        }
    }

    pub fn cmd(&mut self, input: &str) -> Result<()> {
        let (command, args) = input.split_once(' ').unwrap_or((input, ""));
        for c in COMMANDS {
            if command == c.alias || command == c.cmd {
                debug!("running :{} with {args:?}", c.cmd);
                return self.bench("command", |s| (c.func)(s, args));
            }
        }
        Err(Error::UnknownCommand(command.to_string()))
    }

    pub fn expression(&mut self, input: &str) -> Result<()> {
        let lexer: Vec<_> = self.bench("lexer", |_| TkTy::processed(input).collect());
        let lexer: Vec<_> = lexer
            .into_iter()
            .filter_map(|tk| match tk {
                Ok(tk) => Some(tk),
                Err(e) => {
                    self.report(e, input.to_string());
                    None
                }
            })
            .collect();
        if self.errors > 0 {
            return Ok(());
        }
        if self.show.on.contains(&"lexer") {
            let report = miette::MietteDiagnostic::new("lexer's output")
                .with_labels(lexer.iter().map(|tk| {
                    miette::LabeledSpan::new_with_span(Some(format!("{:?}", tk.item)), tk.at)
                }))
                .with_severity(Severity::Advice);
            self.report(report, input.to_string());
        }
        let q = self.bench("parser", |_| Parser::new(lexer).parse())?;
        if self.show.on.contains(&"parser") {
            query::display_node(&q, input);
        }
        let term = self.bench("eval", |s| s.evaluator.eval(&q, input))?;
        if self.show.on.contains(&"eval") {
            println!("{term:?}");
        }
        match self.bench("decode", |s| s.decoder.decode(&term)) {
            Decoded::Opaque => println!("{}", describe(&term, input.trim())),
            decoded => println!("{decoded}"),
        }
        Ok(())
    }

    pub fn input(&mut self) -> rustyline::Result<String> {
        let mut prefix = String::default();
        if self.warnings > 0 {
            write!(prefix, "{}  ", self.warnings).unwrap();
        }
        if self.errors > 0 {
            write!(prefix, "{}  ", self.errors).unwrap();
        }
        let input = if prefix.is_empty() {
            self.rl.readline(&self.prompt)?
        } else {
            prefix.push_str(&self.prompt);
            self.rl.readline(&prefix)?
        };

        self.rl.add_history_entry(&input)?;
        Ok(input)
    }

    pub fn report(&mut self, e: impl Diagnostic + Send + Sync + 'static, input: String) {
        match e.severity().unwrap_or_default() {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            _ => (),
        }
        println!(
            "{:?}",
            miette::Report::new(e).with_source_code(NamedSource::new("repl", input))
        );
    }

    fn new() -> Result<Self> {
        let s = Self {
            prompt: "λ> ".to_string(),
            rl: DefaultEditor::new().map_err(Error::Input)?,
            warnings: 0,
            errors: 0,
            bench: BENCH_SETTING.clone(),
            show: SHOW_SETTING.clone(),
            decoder: Decoder::default(),
            evaluator: Evaluator::default(),
        };
        Ok(s)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut r = Repl::new()?;
    r.run()
}

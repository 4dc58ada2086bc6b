use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cmdtree::logging::init_tracing;
use cmdtree::{
    Command, Config, DispatchError, Execute, Group, Handler, HandlerError, OptionDef, Resolver,
    Usage,
};

/// Exit status for a resolution miss (unknown or missing sub-command).
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "cmdtree")]
#[command(about = "Resolve and run a sub-command from a sample command tree")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/cmdtree/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overrides the config file (e.g. debug, cmdtree=trace)
    #[arg(long)]
    log: Option<String>,

    /// Tokens handed to the command tree
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Leaf handler that prints what it was called with.
struct Echo {
    label: &'static str,
    options: Vec<OptionDef>,
    usage: Option<&'static str>,
    min_args: usize,
}

impl Echo {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            options: Vec::new(),
            usage: None,
            min_args: 0,
        }
    }
}

impl Execute for Echo {
    fn execute(&mut self, args: &[String]) -> Result<(), HandlerError> {
        if args.len() < self.min_args {
            return Err(format!(
                "{}: expected at least {} argument(s), got {}",
                self.label,
                self.min_args,
                args.len()
            )
            .into());
        }
        if args.is_empty() {
            println!("{}", self.label);
        } else {
            println!("{}: {}", self.label, args.join(" "));
        }
        Ok(())
    }
}

impl Usage for Echo {
    fn usage(&self) -> String {
        self.usage.unwrap_or_default().to_string()
    }
}

impl Handler for Echo {
    fn options(&self) -> Vec<OptionDef> {
        self.options.clone()
    }

    fn as_execute(&mut self) -> Option<&mut dyn Execute> {
        Some(self)
    }

    fn as_usage(&self) -> Option<&dyn Usage> {
        self.usage.map(|_| self as &dyn Usage)
    }
}

/// Root handler: only declares the global options.
struct Root;

impl Handler for Root {
    fn options(&self) -> Vec<OptionDef> {
        vec![OptionDef::long("verbose")
            .short('v')
            .description("Verbose output")]
    }
}

fn build_tree() -> Result<Command, cmdtree::RegisterError> {
    let mut root = Command::root("cmdtree", Root)?;

    root.add_command(
        "serve",
        "Start the server",
        "Start the server and listen for requests.",
        Echo {
            options: vec![
                OptionDef::long("port").short('p').value().description("Port to bind"),
                OptionDef::long("host").value().description("Address to bind"),
            ],
            usage: Some("[--host ADDR] [--port PORT]"),
            ..Echo::new("serve")
        },
    )?;

    let cluster = root.add_command("cluster", "Manage the cluster", "", Group)?;
    let node = cluster.add_command("node", "Manage cluster nodes", "", Group)?;
    node.add_command("list", "List nodes", "", Echo::new("cluster node list"))?;
    node.add_command(
        "show",
        "Show one node",
        "",
        Echo {
            min_args: 1,
            ..Echo::new("cluster node show")
        },
    )?;

    root.add_command(
        "version",
        "Print the version",
        "",
        Echo::new(env!("CARGO_PKG_VERSION")),
    )?;

    Ok(root)
}

fn report_miss(root: &Command, err: &DispatchError) {
    eprintln!("Error: {}", err);

    let at = root.deepest_active();
    if let Some(usage) = at.usage() {
        eprintln!("Usage: {} {}", root.active_path().join(" "), usage);
    }
    if !at.commands().is_empty() {
        eprintln!("Available commands:");
        for command in at.commands() {
            eprintln!("  {:<10} {}", command.name(), command.short_description());
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    init_tracing(cli.log.as_deref().unwrap_or(&config.logging.filter));

    let mut root = build_tree().context("Failed to build command tree")?;
    let resolver = Resolver::new(config.resolver);
    resolver
        .check_tree(&root)
        .context("Command tree does not fit the resolver config")?;

    match resolver.dispatch(&mut root, &cli.args) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_resolution_miss() => {
            report_miss(&root, &e);
            Ok(ExitCode::from(EXIT_USAGE))
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

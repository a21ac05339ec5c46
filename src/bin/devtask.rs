// src/bin/devtask.rs

use anyhow::Result;
use clap::Parser;
use devtask::{
    cli::{
        Cli,
        handlers::{self, commons::TaskContext},
    },
    config::{self, Settings},
    core::color::{AnsiColor, Palette},
    system::{console::NativeConsole, executor::ExecutionError},
};

// --- Command Definition and Registry ---

/// An action, its aliases, and the handler that runs it.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>, &TaskContext<'_>) -> Result<()>,
}

static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "exec",
        aliases: &["run"],
        handler: handlers::exec::handle,
    },
    CommandDefinition {
        name: "format",
        aliases: &["fmt"],
        handler: handlers::format::handle,
    },
    CommandDefinition {
        name: "lint",
        aliases: &[],
        handler: handlers::lint::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Parses arguments, runs the requested action, and maps the first failure to
/// the process exit code. A failing child process exits with its own code.
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Read once; everything below receives it explicitly.
    let palette = Palette::new(config::color_from_env(cli.no_color));

    if let Err(e) = run_cli(cli, palette) {
        let code = e
            .downcast_ref::<ExecutionError>()
            .map_or(1, ExecutionError::exit_code);
        eprintln!(
            "\n{}: {:#}",
            palette.paint("Error", AnsiColor::Red),
            e
        );
        eprintln!("{}", palette.failed());
        std::process::exit(code);
    }
}

fn run_cli(cli: Cli, palette: Palette) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let command = find_command(&cli.action).ok_or_else(|| {
        let known: Vec<_> = COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect();
        anyhow::anyhow!(
            "Unknown action '{}'. Available actions: {}",
            cli.action,
            known.join(", ")
        )
    })?;

    let settings = Settings::load(palette.enabled(), cli.root.as_deref())?;
    let console = NativeConsole;
    let ctx = TaskContext::new(&settings, &console);

    (command.handler)(cli.args, &ctx)?;
    println!("{}", palette.ok());
    Ok(())
}

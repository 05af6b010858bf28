use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use danraku::{Flags, explain, transform};

mod cli;
use cli::{Cli, Commands, FlagArgs};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

/// Load the config for `file` and apply the command-line overrides on top.
fn resolve_flags(
    explicit: Option<&Path>,
    file: &Option<PathBuf>,
    overrides: &FlagArgs,
) -> io::Result<Flags> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = danraku::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    let mut flags = cfg.flags();
    flags.ignore_alphabet |= overrides.ignore_alphabet;
    flags.ignore_footnote |= overrides.ignore_footnote;
    log::debug!("Effective flags: {:?}", flags);
    Ok(flags)
}

fn print_diff(file_path: &str, original: &str, transformed: &str) {
    let diff = TextDiff::from_lines(original, transformed);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),
                };

                print!("{}{}{}", style, sign, change.value());

                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform { file, check, write } => {
            let flags = resolve_flags(cli.config.as_deref(), &file, &cli.flags)?;
            let input = read_all(file.as_ref())?;
            let output = transform(&input, &flags);

            if check {
                if input != output {
                    let file_name = file.as_ref().and_then(|p| p.to_str()).unwrap_or("<stdin>");
                    print_diff(file_name, &input, &output);
                    std::process::exit(1);
                }
                if file.is_some() {
                    println!("No paragraph breaks to insert");
                }
            } else if write && let Some(file_path) = &file {
                if input != output {
                    fs::write(file_path, &output)?;
                }
                println!("Transformed {}", file_path.display());
            } else {
                print!("{output}");
            }

            Ok(())
        }
        Commands::Explain { file } => {
            let flags = resolve_flags(cli.config.as_deref(), &file, &cli.flags)?;
            let input = read_all(file.as_ref())?;
            for report in explain(&input, &flags) {
                println!("{report}");
            }
            Ok(())
        }
    }
}

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use lumigen_codegen::{emit_header, GeneratedFile};
use lumigen_decl::{collect_declarations, parse_header, ParseConfig};
use lumigen_ir::{normalize_enums, ConversionKind, NamingPolicy, NormalizedSet};

#[derive(Parser)]
#[command(name = "lumigen", about = "lumigen – Vulkan enum binding generator")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the enum binding header
    Generate {
        /// Vulkan SDK root (defaults to $VULKAN_SDK)
        #[arg(short, long)]
        sdk: Option<PathBuf>,
        /// Output directory (defaults to the working directory)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Regenerate in memory and fail if the on-disk header drifted
    Check {
        /// Vulkan SDK root (defaults to $VULKAN_SDK)
        #[arg(short, long)]
        sdk: Option<PathBuf>,
        /// Directory holding the generated header
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate { sdk, output } => cmd_generate(sdk.as_deref(), &output),
        Command::Check { sdk, output } => cmd_check(sdk.as_deref(), &output),
    };

    match result {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

/// Resolve the SDK root before anything else runs; a missing root aborts
/// with no output written.
fn resolve_sdk(arg: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path.to_path_buf());
    }
    match std::env::var_os("VULKAN_SDK") {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => anyhow::bail!("VULKAN_SDK is not set and no --sdk was given"),
    }
}

/// Parse the header, collect declarations, and run the normalization
/// stages. Parser diagnostics are printed but never abort the run.
fn run_pipeline(sdk_root: &Path) -> Result<NormalizedSet> {
    let policy = NamingPolicy::default();
    let config = ParseConfig::vulkan(sdk_root);

    println!(
        "{} {}",
        "Parsing".bold(),
        config.header.display(),
    );

    let parsed = parse_header(&config)
        .with_context(|| format!("failed to parse '{}'", config.header.display()))?;

    for diagnostic in &parsed.diagnostics {
        println!("  {}", diagnostic.dimmed());
    }

    let collected = collect_declarations(&parsed.root, &config.include_dirs, policy.collect_excludes);
    let set = normalize_enums(collected, &policy);

    for warning in &set.warnings {
        println!("  {} {}", "warning:".yellow().bold(), warning);
    }

    Ok(set)
}

fn print_summary(set: &NormalizedSet) {
    let special = set
        .enums
        .iter()
        .filter(|e| e.kind == ConversionKind::Special)
        .count();
    println!(
        "  {} enums ({} tabled, {} special), {} vendor aliases dropped",
        set.enums.len(),
        set.correspondence.len(),
        special,
        set.dropped_vendor_aliases.len(),
    );
}

fn cmd_generate(sdk: Option<&Path>, output: &Path) -> Result<bool> {
    let sdk_root = resolve_sdk(sdk)?;
    let set = run_pipeline(&sdk_root)?;
    let header = emit_header(&set);

    header
        .write_to_disk(output)
        .with_context(|| format!("failed to write to '{}'", output.display()))?;

    print_summary(&set);
    println!(
        "{} Generated {}",
        "✓".green().bold(),
        output.join(&header.path).display(),
    );
    Ok(true)
}

fn cmd_check(sdk: Option<&Path>, output: &Path) -> Result<bool> {
    let sdk_root = resolve_sdk(sdk)?;
    let set = run_pipeline(&sdk_root)?;
    let header = emit_header(&set);

    print_summary(&set);
    if header_matches_disk(&header, output) {
        println!("{} {} is up to date", "✓".green().bold(), header.path);
        Ok(true)
    } else {
        println!(
            "{} {} is out of date, run `lumigen generate`",
            "✗".red().bold(),
            header.path,
        );
        Ok(false)
    }
}

fn header_matches_disk(header: &GeneratedFile, output: &Path) -> bool {
    match std::fs::read_to_string(output.join(&header.path)) {
        Ok(on_disk) => on_disk == header.content,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumigen_codegen::OUTPUT_FILE_NAME;

    #[test]
    fn explicit_sdk_argument_wins() {
        let sdk = resolve_sdk(Some(Path::new("/opt/vulkan"))).unwrap();
        assert_eq!(sdk, PathBuf::from("/opt/vulkan"));
    }

    #[test]
    fn check_detects_missing_and_drifted_headers() {
        let dir = tempfile::tempdir().unwrap();
        let header = GeneratedFile::new(OUTPUT_FILE_NAME, "#pragma once\n");

        assert!(!header_matches_disk(&header, dir.path()));

        header.write_to_disk(dir.path()).unwrap();
        assert!(header_matches_disk(&header, dir.path()));

        std::fs::write(dir.path().join(OUTPUT_FILE_NAME), "#pragma once\n// edited\n").unwrap();
        assert!(!header_matches_disk(&header, dir.path()));
    }
}

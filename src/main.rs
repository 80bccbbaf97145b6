//! decldoc — generate validated documentation from annotated declaration trees.
//!
//! An AST provider serializes each source module as a JSON declaration tree;
//! decldoc extracts the documented entities, enforces the documentation
//! policy, and renders markdown or JSON. Two modes:
//!
//! - **stdin mode**: `decldoc < module.json` — one tree, markdown to stdout
//! - **file mode**: `decldoc -o docs modules/*.json` — assemble the whole
//!   project and write one output file per module

mod decl;
mod model;
mod parser;
mod project;
mod render;
mod toc;
mod validate;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glob::Pattern;
use parser::Policy;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "decldoc",
    about = "Generate documentation from annotated declaration trees"
)]
struct Cli {
    /// Input declaration-tree JSON files (glob patterns supported).
    /// If omitted, reads a single tree from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Do not require @since tags
    #[arg(long)]
    no_enforce_version: bool,

    /// Require a description on every documented entity
    #[arg(long)]
    enforce_descriptions: bool,

    /// Require at least one @example on every non-module entity
    #[arg(long)]
    enforce_examples: bool,

    /// Skip modules whose path matches this glob. Can be repeated.
    #[arg(long)]
    exclude: Vec<String>,
}

impl Cli {
    fn policy(&self) -> Result<Policy> {
        let mut exclude = Vec::new();
        for pattern in &self.exclude {
            exclude.push(
                Pattern::new(pattern)
                    .with_context(|| format!("invalid exclude pattern: {pattern}"))?,
            );
        }
        Ok(Policy {
            enforce_version: !self.no_enforce_version,
            enforce_descriptions: self.enforce_descriptions,
            enforce_examples: self.enforce_examples,
            exclude,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one declaration tree, render to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let tree: decl::ModuleTree =
        serde_json::from_str(&input).context("failed to parse declaration tree")?;
    let policy = cli.policy()?;

    match parser::parse_module(&tree, &policy) {
        Ok(module) => {
            let renderer = render::create_renderer(&cli.format)?;
            print!("{}", renderer.render(&module));
            Ok(())
        }
        // All violations together, one per line
        Err(errors) => bail!("{}", errors.join("\n")),
    }
}

/// file mode: assemble the project, write one output file per module.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;
    let policy = cli.policy()?;
    let renderer = render::create_renderer(&cli.format)?;

    let input_files = expand_globs(&cli.files)?;
    let mut trees = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let tree: decl::ModuleTree = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse declaration tree: {}", path.display()))?;
        trees.push(tree);
    }

    let assembly = project::assemble(&trees, &policy);

    if !assembly.failures.is_empty() {
        for failure in &assembly.failures {
            for message in &failure.errors {
                eprintln!("error: {}: {}", failure.path, message);
            }
        }
        bail!(
            "{} module(s) failed documentation validation",
            assembly.failures.len()
        );
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    for module in &assembly.modules {
        let out_path = module_output_path(output_dir, &module.path, renderer.file_extension());
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&out_path, renderer.render(module))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Output path mirrors the module path under the output directory, with the
/// source extension swapped for the renderer's.
fn module_output_path(dir: &Path, segments: &[String], extension: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path.set_extension(extension);
    path
}

/// Expand glob patterns into a sorted, deduplicated list of input files.
/// Bare directories are scanned (non-recursive) for `.json` trees.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json") {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {pattern}");
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension() {
        let path = module_output_path(
            Path::new("docs"),
            &["src".to_string(), "string.ts".to_string()],
            "md",
        );
        assert_eq!(path, PathBuf::from("docs/src/string.md"));
    }

    #[test]
    fn output_path_appends_extension_when_missing() {
        let path = module_output_path(Path::new("docs"), &["Makefile".to_string()], "md");
        assert_eq!(path, PathBuf::from("docs/Makefile.md"));
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain layer may depend on. Anything else (logging, I/O,
/// async runtimes) belongs in the engine.
const DOMAIN_ALLOWED_DEPS: [&str; 5] = [
    "serde",
    "serde_json",
    "thiserror",
    "regex-lite",
    "tomebound-domain",
];

/// Internal layering: a crate may only depend on crates listed after it.
const LAYERS: [&str; 3] = ["tomebound-engine", "tomebound-shared", "tomebound-domain"];

const THEME_MODULE: &str = "crates/domain/src/types/theme.rs";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some("theme-check") => theme_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command>\n\nCommands:\n  arch-check\n  theme-check"
        ),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn cargo_metadata() -> anyhow::Result<Metadata> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")
}

fn arch_check() -> anyhow::Result<()> {
    let metadata = cargo_metadata()?;
    let mut violations = Vec::new();

    for package in &metadata.packages {
        // Dev-dependencies do not ship.
        let normal_deps = package
            .dependencies
            .iter()
            .filter(|dep| dep.kind.is_none())
            .map(|dep| dep.name.as_str());

        if package.name == "tomebound-domain" {
            for dep in normal_deps.clone() {
                if !DOMAIN_ALLOWED_DEPS.contains(&dep) {
                    violations.push(format!("tomebound-domain depends on '{dep}'"));
                }
            }
        }

        if let Some(rank) = LAYERS.iter().position(|layer| *layer == package.name) {
            for dep in normal_deps {
                if let Some(dep_rank) = LAYERS.iter().position(|layer| *layer == dep) {
                    if dep_rank <= rank {
                        violations.push(format!("{} depends on '{dep}'", package.name));
                    }
                }
            }
        }
    }

    report("arch-check", &violations)
}

fn theme_check() -> anyhow::Result<()> {
    let metadata = cargo_metadata()?;
    let violations = scan_theme_module(&metadata.workspace_root.join(THEME_MODULE))?;
    report("theme-check", &violations)
}

/// Style tokens must be complete literals; any runtime string assembly in
/// the theme module is a violation.
fn scan_theme_module(path: &Path) -> anyhow::Result<Vec<String>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let pattern = regex_lite::Regex::new(r"\b(format|concat|write|format_args)!\s*\(|\.push_str\(|\+\s*&")
        .context("compiling theme-check pattern")?;

    Ok(source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(index, line)| format!("{}:{}: {}", path.display(), index + 1, line.trim()))
        .collect())
}

fn report(check: &str, violations: &[String]) -> anyhow::Result<()> {
    if violations.is_empty() {
        println!("{check}: ok");
        return Ok(());
    }
    for violation in violations {
        eprintln!("{check}: {violation}");
    }
    anyhow::bail!("{check} failed with {} violation(s)", violations.len())
}

//! Ninja build-statement writer. Consumes evaluated property strings; the
//! rule bodies are fixed boilerplate and the interesting content is in the
//! per-statement variable bindings.

use std::fmt::Write;

use anyhow::Result;
use itertools::Itertools;

use super::GenerationRun;
use crate::model::{Target, TargetKind};

static RULES: &str = "\
rule compile
  command = $cc $DEFINES $INCLUDES $FLAGS -c $in -o $out
  description = CC $out

rule ar
  command = $ar qc $out $in
  description = AR $out

rule link
  command = $ld $in -o $out $LINK_LIBRARIES
  description = LINK $out

rule solink
  command = $ld -shared $in -o $out $LINK_LIBRARIES
  description = SOLINK $out

";

pub(crate) fn write_build_statements(run: &mut GenerationRun<'_>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "ninja_required_version = 1.5")?;
    writeln!(out)?;
    out.push_str(RULES);

    let project = run.project;
    let configs = run.configs.clone();
    for config in &configs {
        for target in project.targets() {
            if target.kind() == TargetKind::Interface {
                continue;
            }
            write_target(run, &mut out, target, config)?;
        }
    }
    Ok(out)
}

fn write_target(
    run: &mut GenerationRun<'_>,
    out: &mut String,
    target: &Target,
    config: &str,
) -> Result<()> {
    let defines = run
        .resolve_list(target, "COMPILE_DEFINITIONS", config)
        .iter()
        .map(|d| format!("-D{d}"))
        .join(" ");
    let includes = run
        .resolve_list(target, "INCLUDE_DIRECTORIES", config)
        .iter()
        .map(|i| format!("-I{i}"))
        .join(" ");
    let flags = run.resolve_list(target, "COMPILE_OPTIONS", config).join(" ");

    let mut objects = Vec::new();
    for source in run.resolve_list(target, "SOURCES", config) {
        let object = format!("{config}/obj/{}/{source}.o", target.name());
        writeln!(out, "build {object}: compile {source}")?;
        for (name, value) in [("DEFINES", &defines), ("INCLUDES", &includes), ("FLAGS", &flags)] {
            if !value.is_empty() {
                writeln!(out, "  {name} = {value}")?;
            }
        }
        objects.push(object);
    }

    let rule = match target.kind() {
        TargetKind::Executable => "link",
        TargetKind::StaticLibrary => "ar",
        TargetKind::SharedLibrary => "solink",
        TargetKind::Interface => unreachable!("interface targets emit no statements"),
    };
    let artifact = run.artifact_name(target, config);
    writeln!(out, "build {config}/{artifact}: {rule} {}", objects.join(" "))?;

    let libraries = run.resolve_list(target, "LINK_LIBRARIES", config).join(" ");
    if !libraries.is_empty() {
        writeln!(out, "  LINK_LIBRARIES = {libraries}")?;
    }
    writeln!(out)?;
    Ok(())
}

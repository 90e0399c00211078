//! Install-script generator: one `file(INSTALL ...)` line per artifact and
//! configuration, with the destination resolved through the engine.
//!
//! Unlike the Ninja writer, an unresolvable destination is fatal right away:
//! a script installing into the wrong place is worse than no script.

use std::fmt::Write;

use anyhow::{Context, Result};
use genmake_genex::EvalRequest;

use super::GenerationRun;
use crate::model::TargetKind;

pub(crate) fn write_install_script(run: &mut GenerationRun<'_>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Install script generated by genmake. Do not edit.")?;

    let project = run.project;
    let configs = run.configs.clone();
    for config in &configs {
        for target in project.targets() {
            if target.kind() == TargetKind::Interface {
                continue;
            }

            let rule = target
                .property("INSTALL_DESTINATION")
                .unwrap_or(default_destination(target.kind()));
            let destination = run
                .engine
                .evaluate_checked(
                    rule,
                    &EvalRequest {
                        head_target: Some(target.name()),
                        config,
                        language: None,
                    },
                )
                .with_context(|| {
                    format!(
                        "computing install destination of target `{}` for {config}",
                        target.name()
                    )
                })?;
            // An empty destination opts the target out for this config.
            if destination.is_empty() {
                continue;
            }

            let artifact = run.artifact_name(target, config);
            writeln!(
                out,
                "file(INSTALL \"{config}/{artifact}\" DESTINATION \"{destination}\")"
            )?;
        }
    }
    Ok(out)
}

fn default_destination(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Executable => "bin",
        _ => "lib",
    }
}

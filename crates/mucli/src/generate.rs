//! The `generate` subcommand: writes the help catalog of a document to disk.

use std::io::Write;

use anyhow::Context as _;
use mucli_core::{
    CatalogOptions, Emitter, JsonEmitter, RustSourceEmitter, clean_generated, generate_catalog,
    load_document, write_catalog,
};

use crate::cli::{EmitFormat, GenerateArgs};

pub fn run(args: &GenerateArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let document = load_document(&args.spec)
        .with_context(|| format!("failed to load {}", args.spec.display()))?;
    let catalog = generate_catalog(
        &document,
        &CatalogOptions {
            program_name: args.program_name.clone(),
        },
    );

    if args.clean {
        for path in clean_generated(&args.out_dir, catalog.subprograms())? {
            writeln!(out, "Removed {}", path.display())?;
        }
    }

    let emitter: &dyn Emitter = match args.format {
        EmitFormat::Json => &JsonEmitter,
        EmitFormat::Rust => &RustSourceEmitter,
    };
    let written = write_catalog(&catalog, emitter, &args.out_dir)?;
    for path in &written {
        writeln!(out, "Generated help at {}", path.display())?;
    }
    writeln!(
        out,
        "Help generation complete: {} commands in {} subprograms.",
        catalog.len(),
        written.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"
openapi: 3.0.0
info:
  title: Test
  version: "1"
paths:
  /genres:
    get:
      operationId: retrieveGenres
      tags: [genre]
      responses:
        200:
          description: ok
"#;

    #[test]
    fn run_writes_one_file_per_subprogram() {
        //* Given
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let spec = dir.path().join("api.yaml");
        std::fs::write(&spec, SPEC).expect("failed to write spec");
        let args = GenerateArgs {
            spec,
            out_dir: dir.path().join("out"),
            format: EmitFormat::Json,
            clean: true,
            program_name: "mucli".to_string(),
        };
        let mut out = Vec::new();

        //* When
        let result = run(&args, &mut out);

        //* Then
        assert!(result.is_ok(), "generation should succeed: {result:?}");
        assert!(dir.path().join("out/genre/genre_help.json").is_file());
        let out = String::from_utf8(out).expect("output should be UTF-8");
        assert!(
            out.ends_with("Help generation complete: 1 commands in 1 subprograms.\n"),
            "unexpected output:\n{out}"
        );
    }
}

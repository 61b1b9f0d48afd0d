//! `rewrite` command: run the link transform over JSON document trees.

use crate::{
    address::SiteContext,
    cli::RewriteArgs,
    core::Node,
    debug, log,
    pipeline::{TransformContext, rewrite_links},
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::{
    ffi::OsStr,
    fs,
    io::{Write, stdout},
    path::{Path, PathBuf},
};

/// Rewrite every input document, in parallel.
///
/// Results keep input order. The first failing document aborts the command
/// before anything is written.
pub fn rewrite_documents(args: &RewriteArgs, site: &dyn SiteContext) -> Result<()> {
    let targets = args
        .output
        .as_deref()
        .map(|dir| output_paths(dir, &args.inputs).map(|targets| (dir, targets)))
        .transpose()?;

    let outputs = args
        .inputs
        .par_iter()
        .map(|input| {
            let src_path = args.src.as_deref().unwrap_or(input);
            rewrite_file(input, src_path, site, args.pretty)
        })
        .collect::<Result<Vec<_>>>()?;

    match targets {
        Some((dir, targets)) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
            for ((input, target), json) in args.inputs.iter().zip(&targets).zip(&outputs) {
                fs::write(target, json)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                debug!("rewrite"; "{} -> {}", input.display(), target.display());
            }
            log!("rewrite"; "rewrote {} document{}", outputs.len(), if outputs.len() == 1 { "" } else { "s" });
        }
        None => {
            let mut stdout = stdout().lock();
            for json in &outputs {
                writeln!(stdout, "{json}")?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Read, rewrite and re-encode one document file.
fn rewrite_file(input: &Path, src_path: &Path, site: &dyn SiteContext, pretty: bool) -> Result<String> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    rewrite_str(&content, src_path, site, pretty)
        .with_context(|| format!("Failed to rewrite {}", input.display()))
}

/// Rewrite a JSON-encoded document tree.
pub fn rewrite_str(
    content: &str,
    src_path: &Path,
    site: &dyn SiteContext,
    pretty: bool,
) -> Result<String> {
    let mut doc: Node = serde_json::from_str(content).context("Invalid document tree")?;

    let ctx = TransformContext::new(src_path, site);
    rewrite_links(&mut doc, &ctx)?;

    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(json)
}

/// Map every input to `dir/<file name>`.
///
/// Two inputs sharing a file name would overwrite each other, so that is an error.
fn output_paths(dir: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: FxHashMap<&OsStr, &Path> = FxHashMap::default();
    let mut targets = Vec::with_capacity(inputs.len());

    for input in inputs {
        let name = input
            .file_name()
            .with_context(|| format!("Input {} has no file name", input.display()))?;
        if let Some(previous) = seen.insert(name, input.as_path()) {
            bail!(
                "Inputs {} and {} would both be written to {}",
                previous.display(),
                input.display(),
                dir.join(name).display()
            );
        }
        targets.push(dir.join(name));
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{PathIndex, Site};

    fn site() -> Site {
        Site::new(
            "/site/out",
            PathIndex::new().with_route("guide/start", "/docs/guide/start"),
        )
    }

    #[test]
    fn test_rewrite_str() {
        let out = rewrite_str(
            r##"["div",null,["a",{"href":"guide/start"},"Start"],["a",{"href":"#x"},"X"]]"##,
            Path::new("index.md"),
            &site(),
            false,
        )
        .unwrap();
        assert_eq!(
            out,
            r#"["div",null,["docs-internal-link",{"href":"/docs/guide/start"},"Start"],["docs-in-page-link",{"targetId":"x"},"X"]]"#
        );
    }

    #[test]
    fn test_rewrite_str_errors() {
        let site = site();
        let err = rewrite_str("{}", Path::new("index.md"), &site, false).unwrap_err();
        assert!(err.to_string().contains("Invalid document tree"));

        let err = rewrite_str(r#"["a", null]"#, Path::new("index.md"), &site, false).unwrap_err();
        assert!(err.to_string().contains("without required prop"));
    }

    #[test]
    fn test_rewrite_documents_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input_a = dir.path().join("a.json");
        let input_b = dir.path().join("b.json");
        fs::write(&input_a, r#"["a",{"href":"guide/start"},"x"]"#).unwrap();
        fs::write(&input_b, r#"["p",null,"plain"]"#).unwrap();

        let out_dir = dir.path().join("out");
        let args = RewriteArgs {
            inputs: vec![input_a, input_b],
            src: None,
            output: Some(out_dir.clone()),
            pretty: false,
        };
        rewrite_documents(&args, &site()).unwrap();

        assert_eq!(
            fs::read_to_string(out_dir.join("a.json")).unwrap(),
            r#"["docs-internal-link",{"href":"/docs/guide/start"},"x"]"#
        );
        assert_eq!(
            fs::read_to_string(out_dir.join("b.json")).unwrap(),
            r#"["p",null,"plain"]"#
        );
    }

    #[test]
    fn test_rewrite_documents_rejects_same_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en/index.json");
        let fr = dir.path().join("fr/index.json");
        for (path, text) in [(&en, "english"), (&fr, "french")] {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!(r#"["p",null,"{text}"]"#)).unwrap();
        }

        let out_dir = dir.path().join("out");
        let args = RewriteArgs {
            inputs: vec![en, fr],
            src: None,
            output: Some(out_dir.clone()),
            pretty: false,
        };
        let err = rewrite_documents(&args, &site()).unwrap_err().to_string();

        assert!(err.contains("en/index.json"), "{err}");
        assert!(err.contains("fr/index.json"), "{err}");
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_rewrite_documents_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, r#"["p",null]"#).unwrap();
        fs::write(&bad, r#"["docs-card",null]"#).unwrap();

        let out_dir = dir.path().join("out");
        let args = RewriteArgs {
            inputs: vec![good, bad],
            src: None,
            output: Some(out_dir.clone()),
            pretty: false,
        };
        assert!(rewrite_documents(&args, &site()).is_err());
        assert!(!out_dir.exists());
    }
}

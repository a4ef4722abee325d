use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::{fs, io, path::Path};
use structopt::StructOpt;
use walkdir::WalkDir;

/// Batch-normalizes Wavefront OBJ files: decodes every `.obj` under the
/// input folder and re-emits it with absolute 1-based indices and records
/// in canonical order, mirroring the folder structure into the output.
#[derive(StructOpt, Debug)]
#[structopt(name = "obj_tool")]
struct CliArgs {
    /// Folder to scan for `.obj` files
    input: String,
    /// Folder the normalized files are written to
    #[structopt(short = "o", long = "output")]
    output: String,
    /// Log every processed line
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
enum ToolError {
    #[error("input is not a folder: {0}")]
    InputNotAFolder(String),
    #[error("could not create output folder: {0}")]
    CreateOutputDir(#[from] io::Error),
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    if args.verbose {
        env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    run(&args)
}

fn run(args: &CliArgs) -> Result<()> {
    let input_root = Path::new(&args.input);
    let output_root = Path::new(&args.output);

    if !input_root.is_dir() {
        return Err(ToolError::InputNotAFolder(input_root.display().to_string()).into());
    }

    let mut normalized = 0usize;
    for entry in WalkDir::new(input_root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !has_obj_extension(path) {
            debug!("Not an OBJ file, skipping: {}", path.display());
            continue;
        }

        // mirror the input folder structure below the output root
        let target = output_root.join(path.strip_prefix(input_root).unwrap_or(path));
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir).map_err(ToolError::CreateOutputDir)?;
        }

        normalize(path, &target)?;
        normalized += 1;
    }

    info!("Normalized {} OBJ file(s)", normalized);
    Ok(())
}

fn has_obj_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map_or(false, |ext| ext.eq_ignore_ascii_case("obj"))
}

/// Decode one OBJ file and re-export it. Export always writes absolute
/// 1-based indices, so this flattens relative references.
fn normalize(path: &Path, target: &Path) -> Result<()> {
    info!("{} -> {}", path.display(), target.display());

    let obj = waveobj::decode_file(path)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    obj.export_to_file(target)
        .with_context(|| format!("failed to write {}", target.display()))?;

    Ok(())
}

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use ocr_project_core::constants::PROJECT_DIR_ENV_VAR;
use ocr_project_core::{validate_project_dir, ImageKind, ProjectConfiguration};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ocrproj")]
#[command(about = "Inspect the directory layout of an OCR project")]
struct Cli {
    /// Project directory (falls back to OCR_PROJECT_DIR, then to the bare schema)
    #[arg(long, global = true)]
    project_dir: Option<String>,
    /// Reject an empty or relative project directory before printing anything
    #[arg(long, global = true)]
    check: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every directory and extension of the project
    Layout {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the directory holding images of a kind
    Dir {
        /// Original, Binary, Gray or Despeckled
        kind: String,
    },
    /// Print the file extension for images of a kind
    Ext {
        /// Binary or Gray; anything else uses the default extension
        kind: String,
    },
    /// Print the path of one page image
    Image {
        /// Original, Binary, Gray or Despeckled
        kind: String,
        /// Page file name without extension, e.g. 0001
        page: String,
    },
    /// Print a single layout slot by name, e.g. ocr_pages or gray_image
    Slot { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

/// Entry point for the `ocrproj` binary.
///
/// # Environment Variables
/// - `OCR_PROJECT_DIR`: project directory used when `--project-dir` is not given
/// - `RUST_LOG`: log filter (default directive: `ocrproj=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ocrproj=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let env_dir = std::env::var(PROJECT_DIR_ENV_VAR).ok();
    let stdout = std::io::stdout();
    run(cli, env_dir, &mut stdout.lock())
}

fn run(cli: Cli, env_dir: Option<String>, out: &mut impl Write) -> anyhow::Result<()> {
    let project_dir = resolve_project_dir(cli.project_dir, env_dir);

    if cli.check {
        validate_project_dir(project_dir.as_deref().unwrap_or_default())
            .context("project directory failed validation")?;
    }

    let config = ProjectConfiguration::from_root(project_dir.as_deref());
    tracing::debug!(
        project_dir = config.root().unwrap_or("<schema only>"),
        "loaded project layout"
    );

    match cli.command {
        Some(Commands::Layout { format }) => {
            let layout = config.layout();
            match format {
                Format::Text => write!(out, "{layout}")?,
                Format::Json => writeln!(out, "{}", layout.to_json()?)?,
                Format::Yaml => write!(out, "{}", layout.to_yaml()?)?,
            }
        }
        Some(Commands::Dir { kind }) => match config.image_directory(&kind) {
            Some(dir) => writeln!(out, "{dir}")?,
            None => bail!(
                "no image directory for kind '{kind}' (expected one of: {})",
                known_kinds()
            ),
        },
        Some(Commands::Ext { kind }) => writeln!(out, "{}", config.image_extension(&kind))?,
        Some(Commands::Image { kind, page }) => {
            let kind: ImageKind = kind.parse()?;
            writeln!(out, "{}", config.image_path(kind, &page))?
        }
        Some(Commands::Slot { name }) => {
            let layout = config.layout();
            let Some(value) = layout.directory(&name).or_else(|| layout.extension(&name)) else {
                bail!("no layout slot named '{name}'");
            };
            writeln!(out, "{value}")?
        }
        None => writeln!(out, "Use 'ocrproj --help' for commands")?,
    }

    Ok(())
}

/// The explicit flag wins over the environment; an empty value counts as unset.
fn resolve_project_dir(explicit: Option<String>, env: Option<String>) -> Option<String> {
    explicit.or(env).filter(|dir| !dir.is_empty())
}

fn known_kinds() -> String {
    ImageKind::ALL
        .iter()
        .map(ImageKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use ocr_project_core::ProjectLayout;
    use std::path::MAIN_SEPARATOR_STR;

    fn run_args(args: &[&str], env_dir: Option<&str>) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("ocrproj").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, env_dir.map(str::to_owned), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_prints_resolved_directory() {
        let out = run_args(&["--project-dir", "/data/proj", "dir", "Gray"], None).unwrap();
        assert_eq!(out, "/data/proj/PreProc/Gray/\n");
    }

    #[test]
    fn test_dir_unknown_kind_fails() {
        let err = run_args(&["--project-dir", "/data/proj", "dir", "Cleaned"], None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Cleaned"));
        assert!(message.contains("Despeckled"));
    }

    #[test]
    fn test_ext_falls_back_to_default() {
        assert_eq!(run_args(&["ext", "xyz"], None).unwrap(), ".png\n");
        assert_eq!(run_args(&["ext", "Binary"], None).unwrap(), ".bin.png\n");
    }

    #[test]
    fn test_env_dir_used_without_flag() {
        let out = run_args(&["dir", "Original"], Some("/env/proj")).unwrap();
        assert!(out.starts_with("/env/proj"));
    }

    #[test]
    fn test_flag_overrides_env() {
        let out = run_args(
            &["dir", "Original", "--project-dir", "/flag/proj"],
            Some("/env/proj"),
        )
        .unwrap();
        assert!(out.starts_with("/flag/proj"));
    }

    #[test]
    fn test_schema_only_without_root() {
        let out = run_args(&["dir", "Despeckled"], None).unwrap();
        let expected = format!("PreProc{0}Despeckled{0}\n", MAIN_SEPARATOR_STR);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_check_rejects_relative_and_missing_roots() {
        assert!(run_args(&["--check", "--project-dir", "rel", "ext", "Gray"], None).is_err());
        assert!(run_args(&["--check", "ext", "Gray"], None).is_err());
        assert!(run_args(&["--check", "ext", "Gray"], Some("")).is_err());
    }

    #[test]
    fn test_layout_json_parses_back() {
        let out = run_args(&["layout", "--format", "json"], Some("/data/proj")).unwrap();
        let layout = ProjectLayout::from_json(&out).unwrap();
        assert_eq!(layout, ProjectConfiguration::new("/data/proj").layout());
    }

    #[test]
    fn test_layout_text_lists_all_slots() {
        let out = run_args(&["layout"], None).unwrap();
        assert_eq!(out.lines().count(), 14);
    }

    #[cfg(unix)]
    #[test]
    fn test_image_prints_page_path() {
        let out = run_args(&["image", "Binary", "0001"], Some("/data/proj")).unwrap();
        assert_eq!(out, "/data/proj/PreProc/Binary/0001.bin.png\n");
    }

    #[test]
    fn test_image_unknown_kind_fails() {
        let err = run_args(&["image", "Cleaned", "0001"], None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ocr_project_core::ProjectError>(),
            Some(ocr_project_core::ProjectError::UnknownImageKind(kind)) if kind == "Cleaned"
        ));
    }

    #[test]
    fn test_slot_prints_directory_or_extension() {
        let config = ProjectConfiguration::new("/data/proj");
        let out = run_args(&["slot", "ocr_pages"], Some("/data/proj")).unwrap();
        assert_eq!(out, format!("{}\n", config.pages_dir()));
        assert_eq!(run_args(&["slot", "gray_image"], None).unwrap(), ".nrm.png\n");
        assert!(run_args(&["slot", "nope"], None).is_err());
    }

    #[test]
    fn test_resolve_project_dir_treats_empty_as_unset() {
        assert_eq!(resolve_project_dir(Some(String::new()), None), None);
        assert_eq!(
            resolve_project_dir(None, Some("/env".into())).as_deref(),
            Some("/env")
        );
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::info;

use swagmark_core::config::{self, CONFIG_FILE_NAME, GroupBy, SwagmarkConfig};
use swagmark_core::ir::ApiDoc;
use swagmark_core::markup::MarkupLanguage;
use swagmark_core::parse::{self, spec::SwaggerSpec};
use swagmark_core::transform;
use swagmark_core::{DocumentGenerator, GeneratedFile};
use swagmark_docs::generator::non_blank_path;
use swagmark_docs::{DocsGenerator, RenderOptions};

#[derive(Parser)]
#[command(
    name = "swagmark",
    about = "Swagger 2.0 to AsciiDoc/Markdown documentation generator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation from a Swagger spec
    Generate {
        /// Path to the Swagger spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Markup language of the generated documents
        #[arg(long)]
        markup: Option<MarkupArg>,

        /// How operations are grouped in the paths document
        #[arg(long)]
        group_by: Option<GroupByArg>,

        /// Folder with hand-written request and response examples
        #[arg(long)]
        examples: Option<String>,

        /// Folder with hand-written descriptions
        #[arg(long)]
        descriptions: Option<String>,
    },

    /// Validate a Swagger spec
    Validate {
        /// Path to the Swagger spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new swagmark configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MarkupArg {
    Asciidoc,
    Markdown,
}

impl From<MarkupArg> for MarkupLanguage {
    fn from(arg: MarkupArg) -> Self {
        match arg {
            MarkupArg::Asciidoc => MarkupLanguage::Asciidoc,
            MarkupArg::Markdown => MarkupLanguage::Markdown,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupByArg {
    AsIs,
    ByTag,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::AsIs => GroupBy::AsIs,
            GroupByArg::ByTag => GroupBy::ByTag,
        }
    }
}

/// Command-line values that take precedence over the config file.
struct GenerateArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    markup: Option<MarkupArg>,
    group_by: Option<GroupByArg>,
    examples: Option<String>,
    descriptions: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            markup,
            group_by,
            examples,
            descriptions,
        } => cmd_generate(GenerateArgs {
            input,
            output,
            markup,
            group_by,
            examples,
            descriptions,
        }),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swagmark", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SwagmarkConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let cfg = config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
    if cfg.is_some() {
        info!("Loaded config from {}", config_path.display());
    }
    Ok(cfg)
}

fn parse_spec(path: &Path) -> Result<SwaggerSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => parse::from_json(&content),
        _ => parse::from_yaml(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(parsed)
}

fn load_spec(path: &Path) -> Result<ApiDoc> {
    let parsed = parse_spec(path)?;
    Ok(transform::transform(&parsed))
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Config values with command-line overrides applied. Blank folder flags
/// count as not given.
fn render_options(cfg: &SwagmarkConfig, args: &GenerateArgs) -> RenderOptions {
    let mut options = RenderOptions::from_config(cfg);
    if let Some(markup) = args.markup {
        options.markup_language = markup.into();
    }
    if let Some(group_by) = args.group_by {
        options.paths_group_by = group_by.into();
    }
    if let Some(examples) = non_blank_path(args.examples.as_deref()) {
        options.examples_folder = Some(examples);
    }
    if let Some(descriptions) = non_blank_path(args.descriptions.as_deref()) {
        options.descriptions_folder = Some(descriptions);
    }
    options
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = args.input.clone().unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from(&cfg.output));

    let options = render_options(&cfg, &args);

    let doc = load_spec(&input)?;

    eprintln!(
        "Generating {} → {}",
        options.markup_language.as_str(),
        output_dir.display()
    );
    let files = DocsGenerator.generate(&doc, &options);

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    eprintln!(
        "Generated {} files in {}",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let parsed = parse_spec(&input)?;

    eprintln!(
        "Valid Swagger {} spec: {}",
        parsed.swagger, parsed.info.title
    );
    eprintln!("  Version: {}", parsed.info.version);
    eprintln!("  Paths: {}", parsed.paths.len());
    eprintln!("  Definitions: {}", parsed.definitions.len());

    let doc = transform::transform(&parsed);
    eprintln!("  Operations: {}", doc.operation_count());
    eprintln!("  Tags: {}", doc.tags.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

//! CLI for Plan Studio: plan table, image editor, image generator.

use clap::{Args, Parser, Subcommand};
use plan_studio::pricing::render::render_text;
use plan_studio::{
    EditorForm, FormState, GeminiModel, GeneratorForm, GoogleStudio, ImageFormat, ImagenModel,
    PlanCatalog, SourceImage,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plan-studio")]
#[command(about = "Training plans, Gemini image editing and Imagen generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// API key for the Google Generative Language API
    #[arg(long, global = true, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the API root (for proxies and tests)
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the plan comparison table
    Plans,

    /// Edit an image following an instruction
    Edit(EditArgs),

    /// Generate an image from a text prompt
    Generate(GenerateArgs),
}

#[derive(Args)]
struct EditArgs {
    /// Image to edit
    input: PathBuf,

    /// What to change, e.g. "Añadir un filtro retro"
    #[arg(short, long)]
    prompt: String,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// MIME type of the input (detected when omitted)
    #[arg(long)]
    mime_type: Option<String>,

    /// Use Gemini 3 Pro Image instead of 2.5 Flash Image
    #[arg(long)]
    pro: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// The text prompt describing the image
    prompt: String,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// Use Imagen 4 Fast
    #[arg(long)]
    fast: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plan_studio=info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Plans => show_plans(cli.json)?,
        Commands::Edit(args) => edit_image(&cli, args).await?,
        Commands::Generate(args) => generate_image(&cli, args).await?,
    }

    Ok(())
}

fn show_plans(json_output: bool) -> anyhow::Result<()> {
    let catalog = PlanCatalog::load();
    if json_output {
        println!("{}", serde_json::to_string_pretty(catalog.table())?);
    } else {
        print!("{}", render_text(catalog.table()));
    }
    Ok(())
}

fn studio(
    cli: &Cli,
    edit_model: GeminiModel,
    generate_model: ImagenModel,
) -> anyhow::Result<GoogleStudio> {
    let mut builder = GoogleStudio::builder()
        .edit_model(edit_model)
        .generate_model(generate_model);
    if let Some(key) = &cli.api_key {
        builder = builder.api_key(key);
    }
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url);
    }
    Ok(builder.build()?)
}

async fn edit_image(cli: &Cli, args: &EditArgs) -> anyhow::Result<()> {
    let mut image = SourceImage::from_path(&args.input)?;
    if let Some(mime) = &args.mime_type {
        image.mime_type = mime.clone();
    }

    let model = if args.pro {
        GeminiModel::ProImage
    } else {
        GeminiModel::FlashImage
    };
    let studio = studio(cli, model, ImagenModel::default())?;

    let mut form = EditorForm::new();
    form.set_image(image);
    form.set_prompt(&args.prompt);
    let state = form.submit(&studio).await;

    report(state, &args.output, "edit", cli.json)
}

async fn generate_image(cli: &Cli, args: &GenerateArgs) -> anyhow::Result<()> {
    let model = if args.fast {
        ImagenModel::Imagen4Fast
    } else {
        ImagenModel::Imagen4
    };
    let studio = studio(cli, GeminiModel::default(), model)?;

    let mut form = GeneratorForm::new();
    form.set_prompt(&args.prompt);
    let state = form.submit(&studio).await;

    report(state, &args.output, "generate", cli.json)
}

fn report(state: &FormState, output: &Path, kind: &str, json_output: bool) -> anyhow::Result<()> {
    let image = match state {
        FormState::Ready(image) => image,
        FormState::Failed(message) => anyhow::bail!("{message}"),
        FormState::Idle | FormState::Loading => anyhow::bail!("no request was made"),
    };

    let size = image.save(output)?;
    let format = image.format().map(|f| f.extension()).unwrap_or("bin");
    if output
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ImageFormat::from_extension)
        .is_some_and(|f| Some(f) != image.format())
    {
        tracing::warn!(
            output = %output.display(),
            mime_type = image.mime_type(),
            "output extension does not match the returned image"
        );
    }

    if json_output {
        let result = serde_json::json!({
            "type": kind,
            "success": true,
            "output": output.display().to_string(),
            "size_bytes": size,
            "mime_type": image.mime_type(),
            "format": format,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Saved image: {} ({} bytes, {})",
            output.display(),
            size,
            image.mime_type()
        );
    }

    Ok(())
}

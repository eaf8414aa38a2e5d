use anyhow::{Context, Result};
use avatar_kit::{HashAlgorithm, avatar, color, gravatar, initials, storage};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "avatar",
    version,
    about = "Derive avatar initials, label colors & Gravatar URLs"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initials for a label.
    Initials {
        label: String,
    },
    /// Print the background-color declaration for a label.
    Color(ColorArgs),
    /// Print the Gravatar hash of an identity (email).
    Hash {
        identity: String,
        /// Digest algorithm (md5 or sha256).
        #[arg(long, default_value = "md5")]
        algorithm: String,
    },
    /// Print the Gravatar image URL for an email.
    Url(UrlArgs),
    /// Derive all parts for the avatars described in a JSON file.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ColorArgs {
    label: String,
    /// Saturation in percent.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    saturation: i32,
    /// Lightness in percent.
    #[arg(long, default_value_t = 40, allow_negative_numbers = true)]
    lightness: i32,
    /// Alpha in percent.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    alpha: i32,
}

#[derive(Args, Debug)]
struct UrlArgs {
    email: String,
    /// Query string appended verbatim (e.g. "s=80&d=identicon").
    #[arg(long)]
    config: Option<String>,
    /// Use "d=blank" when no --config is given.
    #[arg(long, default_value_t = false)]
    fallback: bool,
    /// Digest algorithm (md5 or sha256).
    #[arg(long, default_value = "md5")]
    algorithm: String,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON file with one avatar object or an array of them.
    #[arg(long)]
    spec: PathBuf,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Initials { label } => {
            println!("{}", initials::extract_initials(Some(&label)).unwrap_or_default());
            Ok(())
        }
        Command::Color(args) => {
            println!(
                "{}",
                color::derive_background_color(&args.label, args.saturation, args.lightness, args.alpha)
            );
            Ok(())
        }
        Command::Hash { identity, algorithm } => {
            println!("{}", gravatar::hash_identity_with(&identity, &algorithm)?);
            Ok(())
        }
        Command::Url(args) => cmd_url(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_url(args: UrlArgs) -> Result<()> {
    let algorithm: HashAlgorithm = args.algorithm.parse()?;
    let url = gravatar::gravatar_url_with(&args.email, args.config.as_deref(), args.fallback, algorithm)?;
    println!("{url}");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let specs = storage::load_specs(&args.spec)?;
    let parts = specs
        .iter()
        .enumerate()
        .map(|(i, s)| avatar::derive_parts(s).with_context(|| format!("avatar #{i}")))
        .collect::<Result<Vec<_>>>()?;

    match args.out.as_ref() {
        Some(path) => {
            let fmt = match args.format {
                Some(OutFormat::Csv) => "csv",
                Some(OutFormat::Json) => "json",
                None => path.extension().and_then(|e| e.to_str()).unwrap_or("json"),
            }
            .to_ascii_lowercase();
            match fmt.as_str() {
                "csv" => storage::save_csv(&parts, path)?,
                "json" => storage::save_json(&parts, path)?,
                other => anyhow::bail!("unsupported format: {}", other),
            }
            eprintln!("Saved {} avatars to {}", parts.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&parts)?),
    }
    Ok(())
}

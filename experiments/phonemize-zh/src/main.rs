use {
    anyhow::{Context, Result},
    clap::{Args, Parser, Subcommand},
    std::{
        io::{self, Read},
        path::PathBuf,
    },
    zhphon::{ChinesePhonemizer, PhonemeIdMap, PhonemizerConfig, ensure_model},
};

#[derive(Debug, Parser)]
#[command(name = "phonemize-zh")]
#[command(about = "Chinese text to pinyin phonemes and model input ids")]
struct Cli {
    /// JSON phonemizer configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the phonemes of each sentence.
    Phonemes(PhonemesArgs),
    /// Print the id sequence of each sentence.
    Ids(IdsArgs),
    /// Download the converter model if it is missing.
    Fetch(FetchArgs),
}

#[derive(Debug, Args)]
struct PhonemesArgs {
    /// Text to phonemize, or `-` to read stdin.
    text: String,
    /// Print all sentences as one JSON array of arrays.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct IdsArgs {
    /// Text to encode, or `-` to read stdin.
    text: String,
    /// Override the configured id map.
    #[arg(long)]
    id_map: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct FetchArgs {
    /// Defaults to `model_dir` from the config.
    #[arg(long)]
    model_dir: Option<PathBuf>,
    #[arg(long)]
    url: Option<String>,
}

fn read_text(text: String) -> Result<String> {
    if text != "-" {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf)
}

fn load_config(path: Option<&PathBuf>) -> Result<PhonemizerConfig> {
    match path {
        Some(path) => PhonemizerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(PhonemizerConfig::default()),
    }
}

fn main() {
    zhphon_base::init_stderr_logger();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        zhphon_base::log_fatal!("{:#}", e);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Phonemes(args) => {
            let phonemizer = ChinesePhonemizer::from_config(&config);
            let text = read_text(args.text)?;
            let sentences = phonemizer.phonemize(&text)?;
            if args.json {
                println!("{}", serde_json::to_string(&sentences)?);
            } else {
                for sentence in &sentences {
                    println!("{}", sentence.join(" "));
                }
            }
        }
        Commands::Ids(args) => {
            let phonemizer = ChinesePhonemizer::from_config(&config);
            let id_map = match &args.id_map {
                Some(path) => PhonemeIdMap::load(path)
                    .with_context(|| format!("failed to load id map {}", path.display()))?,
                None => config.load_id_map().context("failed to load id map")?,
            };
            let text = read_text(args.text)?;
            for sentence in phonemizer.phonemize(&text)? {
                println!("{}", serde_json::to_string(&id_map.encode(&sentence))?);
            }
        }
        Commands::Fetch(args) => {
            let url = args.url.as_deref().unwrap_or(&config.model_url);
            let model_dir = args
                .model_dir
                .or_else(|| config.model_dir.clone())
                .context("no model directory given and none configured")?;
            let model_path = ensure_model(&model_dir, url)
                .with_context(|| format!("failed to fetch model into {}", model_dir.display()))?;
            log::info!("Model ready at {}", model_path.display());
            println!("{}", model_path.display());
        }
    }

    Ok(())
}

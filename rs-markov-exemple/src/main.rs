use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{MarkovModel, ModelConfig, TokenMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Word,
    Character,
}

impl From<Mode> for TokenMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Word => TokenMode::Word,
            Mode::Character => TokenMode::Character,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rs-markov-exemple")]
#[command(about = "Train a Markov model on a text file and generate text from it")]
struct Args {
    /// Training corpus (text)
    #[arg(short, long, default_value = "data/paul.txt")]
    file: String,

    /// JSON model configuration, inline (e.g. {"degree": 2, "mode": "word"}) or a path to a JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Context length, overrides the configuration
    #[arg(short, long)]
    degree: Option<usize>,

    /// Token mode, overrides the configuration
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Number of words or characters to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the trained table before generating
    #[arg(long)]
    dump: bool,
}

/// Parses `--config`: an inline JSON object, otherwise a path to a JSON file.
fn load_config(value: &str) -> Result<ModelConfig, Box<dyn std::error::Error>> {
    let json = if value.trim_start().starts_with('{') {
        value.to_owned()
    } else {
        std::fs::read_to_string(value)?
    };
    Ok(ModelConfig::from_json(&json)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Start from the JSON configuration (or defaults), then apply overrides
    let mut config = match &args.config {
        Some(value) => load_config(value)?,
        None => ModelConfig::default(),
    };
    if let Some(degree) = args.degree {
        config.degree = degree;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    let mut model = MarkovModel::from_config(&config)?;
    model.train_from_file(&args.file)?;
    info!("{} contexts learned (degree {}, {:?})", model.len(), model.degree(), model.mode());

    if args.dump {
        print!("{model}");
    }

    // A fixed seed makes the output reproducible
    let text = match args.seed {
        Some(seed) => model.generate_with(args.count, &mut StdRng::seed_from_u64(seed))?,
        None => model.generate(args.count)?,
    };
    println!("{text}");

    Ok(())
}

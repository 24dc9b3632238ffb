use std::io;
use std::path::PathBuf;

use clap::Subcommand;
use rand::rngs::OsRng;
use tracing::debug;
use zeroize::Zeroizing;

use crate::*;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a mnemonic and derive its account address
    Generate {
        #[arg(short, long, help = "TOML config file")]
        config: Option<PathBuf>,
        #[arg(short, long, env = "HDADDR_WORDS", conflicts_with = "entropy_bits", help = "Number of mnemonic words (12, 15, 18, 21 or 24)")]
        words: Option<usize>,
        #[arg(short = 'b', long, env = "HDADDR_ENTROPY_BITS", help = "Entropy size in bits (128, 160, 192, 224 or 256)")]
        entropy_bits: Option<usize>,
        #[arg(short, long, env = "HDADDR_PASSPHRASE", hide_env_values = true, help = "Passphrase mixed into the seed")]
        passphrase: Option<String>,
        #[arg(short, long, env = "HDADDR_CHILD_INDEX", help = "Child index (0-255)")]
        index: Option<u32>,
        #[arg(long, env = "HDADDR_WORDLIST", help = "Word list file (JSON array or one word per line)")]
        wordlist: Option<PathBuf>,
        #[arg(long, help = "Log secret intermediate values (seed, keys)")]
        reveal_secrets: bool,
        #[arg(short, long, value_enum, help = "Output format")]
        output: Option<OutputFormat>,
    },
    /// Print the address of a private key
    Address {
        #[arg(short, long, env = "HDADDR_PRIVATE_KEY", hide_env_values = true, help = "Private key as 64 hex characters")]
        key: String,
        #[arg(short, long, value_enum, default_value = "text", help = "Output format")]
        output: OutputFormat,
    },
    /// Check that a word list file has 2048 distinct words
    Wordlist {
        #[arg(help = "Word list file (JSON array or one word per line)")]
        path: PathBuf,
    },
}

pub fn execute_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate { config, words, entropy_bits, passphrase, index, wordlist, reveal_secrets, output } => {
            let mut config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            if let Some(words) = words {
                config.entropy_bits = EntropyBits::from_word_count(words)?.bits();
            }
            if let Some(bits) = entropy_bits {
                config.entropy_bits = bits;
            }
            if let Some(passphrase) = passphrase {
                config.passphrase = passphrase;
            }
            if let Some(index) = index {
                config.child_index = index;
            }
            if wordlist.is_some() {
                config.wordlist = wordlist;
            }
            if let Some(output) = output {
                config.output = output;
            }
            config.reveal_secrets |= reveal_secrets;
            generate(&config)
        }
        Commands::Address { key, output } => {
            let key = Zeroizing::new(key);
            let address = hex_private_key_to_address(&key)?;
            display_address(&mut io::stdout().lock(), &address, output)
        }
        Commands::Wordlist { path } => {
            let list = Wordlist::load(&path)?;
            display_wordlist(&mut io::stdout().lock(), &list)
        }
    }
}

pub fn generate(config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    debug!(?config, "resolved configuration");
    let options = config.to_pipeline_options()?;
    let observer = TracingObserver::new(config.reveal_secrets);
    let wallet = run_pipeline(&options, &mut OsRng, observer)?;
    if wallet.child_index != options.child_index {
        eprintln!("Child index {} produced an invalid key; used index {} instead.", options.child_index, wallet.child_index);
    }
    display_wallet(&mut io::stdout().lock(), &wallet, config.output)
}

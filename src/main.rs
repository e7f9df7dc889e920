use bmpshare::cli::{distribute, recover, show_info, DistributeOptions, RecoverOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("BMPSHARE_VERSION");
const BUILD: &str = env!("BMPSHARE_BUILD");
const PROFILE: &str = env!("BMPSHARE_PROFILE");
const GIT_HASH: &str = env!("BMPSHARE_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "bmpshare")]
#[command(author, about = "(k, n) secret sharing for grayscale BMPs over LSB steganography", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a secret bitmap into shadows hidden in carrier bitmaps
    #[command(alias = "d")]
    Distribute {
        /// Secret bitmap to split
        #[arg(long, required = true)]
        secret: PathBuf,

        /// Threshold: any k shadows rebuild the secret
        #[arg(short)]
        k: u16,

        /// Total shadows (defaults to the file count in the carrier directory)
        #[arg(short)]
        n: Option<u16>,

        /// Permutation seed
        #[arg(short, long, default_value_t = 691)]
        seed: u16,

        /// Directory with the carrier bitmaps
        #[arg(long, default_value = "./")]
        dir: PathBuf,

        /// Skip the pixel permutation step
        #[arg(long)]
        no_permute: bool,
    },

    /// Rebuild a secret bitmap from k shadow files
    #[command(alias = "r")]
    Recover {
        /// Destination path for the rebuilt secret
        #[arg(long, required = true)]
        secret: PathBuf,

        /// Threshold the shadows were formed with
        #[arg(short)]
        k: u16,

        /// Width of the original secret
        #[arg(short, long)]
        width: u32,

        /// Height of the original secret (negative for top-down bitmaps)
        #[arg(short = 'H', long, allow_hyphen_values = true)]
        height: i32,

        /// Directory with the shadow bitmaps
        #[arg(long, default_value = "./")]
        dir: PathBuf,
    },

    /// Show the headers of a BMP file
    #[command(alias = "i")]
    Info {
        /// BMP file to inspect
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("bmpshare {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Distribute {
            secret,
            k,
            n,
            seed,
            dir,
            no_permute,
        } => {
            let options = DistributeOptions {
                secret,
                dir: dir.clone(),
                k,
                n,
                seed,
                permute: !no_permute,
            };

            match distribute(&options) {
                Ok(n) => {
                    println!("Hid {} shadows in {}", n, dir.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Recover {
            secret,
            k,
            width,
            height,
            dir,
        } => {
            let options = RecoverOptions {
                secret: secret.clone(),
                dir,
                k,
                width,
                height,
            };

            match recover(&options) {
                Ok(()) => {
                    println!("Recovered secret into {}", secret.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Info { file } => match show_info(&file) {
            Ok(info) => {
                print!("{}", info);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use log::debug;

use desk_utils::{
    banner::{decorate, parse_fill, parse_width, BannerRequest, Preset},
    capture::{Capturer, ProcessRunner},
    cli::{banner_json, copied_summary, print_error, print_warning},
    clipboard::SystemClipboard,
    config::Config,
    error::Result,
    logging,
};

#[derive(Parser)]
#[command(name = "desk", author, version, about = "Banner comments and desk snapshots", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/desk-utils/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit log level; overrides -v
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decorate a label as a padded banner comment
    Banner(BannerArgs),
    /// Take a webcam picture and a screenshot after a random pause
    Snap(SnapArgs),
}

#[derive(Args)]
struct BannerArgs {
    /// Text to decorate (may be empty)
    label: String,

    /// Heading level to start from
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// Field width, not counting the comment marker
    #[arg(short, long, allow_hyphen_values = true)]
    width: Option<i64>,

    /// left, center or right (also <, ^, >)
    #[arg(short, long)]
    align: Option<String>,

    /// Single padding character
    #[arg(short, long, allow_hyphen_values = true)]
    fill: Option<String>,

    /// Draw the ^ rule above the label
    #[arg(long)]
    top: bool,

    /// Draw the v rule below the label
    #[arg(long)]
    bottom: bool,

    /// Comment marker prefixed to every line
    #[arg(short, long, allow_hyphen_values = true)]
    marker: Option<String>,

    /// Copy to the clipboard instead of printing
    #[arg(long, conflicts_with = "no_copy")]
    copy: bool,

    /// Print even when the config enables copying
    #[arg(long)]
    no_copy: bool,

    /// Print the lines as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SnapArgs {
    /// Capture immediately, without the random pause
    #[arg(long)]
    now: bool,

    /// Upper bound of the random pause in seconds
    #[arg(long)]
    max_jitter: Option<u64>,

    /// Directory for webcam pictures
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Directory for screenshots
    #[arg(long)]
    screenshot_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = match &cli.log_level {
        Some(level) => logging::parse_log_level(level).to_string().to_lowercase(),
        None => logging::level_for_verbosity(cli.verbose).to_string(),
    };
    if let Err(e) = logging::init(&level) {
        print_warning(&e.to_string());
    }

    if let Err(e) = run(cli).await {
        debug!("command failed: {:?}", e);
        print_error(&e.to_string());
        process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!("effective config: {:?}", config);

    match cli.command {
        Command::Banner(args) => run_banner(&args, &config),
        Command::Snap(args) => run_snap(args, &config).await,
    }
}

/// Builds the request: preset, then config defaults, then explicit flags
fn banner_request(args: &BannerArgs, config: &Config) -> Result<BannerRequest> {
    let preset = args.preset.unwrap_or(config.banner.preset);
    let mut style = config.banner.style_for(preset);

    if let Some(width) = args.width {
        style.width = parse_width(width)?;
    }
    if let Some(align) = &args.align {
        style.alignment = align.parse()?;
    }
    if let Some(fill) = &args.fill {
        style.fill = parse_fill(fill)?;
    }
    if let Some(marker) = &args.marker {
        style.marker = marker.clone();
    }
    style.top_rule |= args.top;
    style.bottom_rule |= args.bottom;
    style.validate()?;

    Ok(BannerRequest::new(args.label.as_str()).with_style(style))
}

fn run_banner(args: &BannerArgs, config: &Config) -> Result<()> {
    let request = banner_request(args, config)?;
    let copy = (config.banner.copy || args.copy) && !args.no_copy;

    let banner = if copy {
        let mut clipboard = SystemClipboard::from_config(&config.clipboard)?;
        debug!("using {}", clipboard.describe());
        decorate(&request, true, &mut clipboard)?
    } else {
        request.render()?
    };

    if args.json {
        println!("{}", banner_json(&banner)?);
    } else if !copy {
        println!("{}", banner);
    }
    if copy {
        eprintln!("{}", copied_summary(&banner));
    }
    Ok(())
}

async fn run_snap(args: SnapArgs, config: &Config) -> Result<()> {
    let mut capture = config.capture.clone();
    if let Some(secs) = args.max_jitter {
        capture.max_jitter_secs = secs;
    }
    if let Some(dir) = args.snapshot_dir {
        capture.snapshot_dir = dir.to_string_lossy().into_owned();
    }
    if let Some(dir) = args.screenshot_dir {
        capture.screenshot_dir = dir.to_string_lossy().into_owned();
    }
    capture.validate()?;

    let mut capturer = Capturer::new(capture, ProcessRunner);
    if args.now {
        capturer = capturer.without_jitter();
    }

    let run = capturer.run().await?;
    println!("{}", run.snapshot.display());
    println!("{}", run.screenshot.display());
    Ok(())
}

use clap::{ArgAction, Parser, ValueEnum};
use prefixcss_lib::artifacts::{self, FileStatus, Options};
use prefixcss_lib::{Pipeline, Vendor};
use std::path::PathBuf;
use std::process::ExitCode;

const PREFIXCSS_INTRO: &str = "PrefixCSS - vendor prefixes for stylesheets, safe to re-run";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VendorArg {
    Ms,
    Moz,
    Webkit,
}

impl From<VendorArg> for Vendor {
    fn from(arg: VendorArg) -> Self {
        match arg {
            VendorArg::Ms => Vendor::Ms,
            VendorArg::Moz => Vendor::Moz,
            VendorArg::Webkit => Vendor::Webkit,
        }
    }
}

#[derive(Parser)]
#[command(name = "prefixcss", version)]
#[command(about = "Add vendor-prefixed duplicates to CSS files")]
struct Args {
    /// Stylesheets or directories of stylesheets.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Reprocess files whose prefixed output is already up to date.
    #[arg(short, long)]
    force: bool,

    /// Do not write the `.clean.css` artifact.
    #[arg(long)]
    no_clean: bool,

    /// Only generate these vendors (repeatable). Defaults to all of them.
    #[arg(long = "vendor", value_enum)]
    vendors: Vec<VendorArg>,

    /// Worker threads for processing several files.
    #[arg(long)]
    threads: Option<usize>,

    /// Log every inserted and removed line.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let level = match (args.quiet, args.verbose) {
        (true, _) => log::LevelFilter::Warn,
        (false, 0) => log::LevelFilter::Info,
        (false, 1) => log::LevelFilter::Debug,
        (false, _) => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    // parse the args given in terminal
    let args: Args = Args::parse();
    init_logging(&args);
    log::info!("{}", PREFIXCSS_INTRO);

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::warn!("Could not size the thread pool: {}", e);
        }
    }

    let pipeline = if args.vendors.is_empty() {
        Pipeline::standard()
    } else {
        let vendors: Vec<Vendor> = args.vendors.iter().map(|&v| v.into()).collect();
        Pipeline::only(&vendors)
    };
    let options = Options {
        force: args.force,
        write_clean: !args.no_clean,
        pipeline,
    };

    let inputs = match artifacts::collect_inputs(&args.inputs) {
        Ok(inputs) => inputs,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if inputs.is_empty() {
        log::warn!("No stylesheets found");
        return ExitCode::SUCCESS;
    }

    let (mut written, mut up_to_date, mut failed) = (0, 0, 0);
    for (_, result) in artifacts::process_files(&inputs, &options) {
        match result {
            Ok(report) => match report.status {
                FileStatus::Written { .. } => written += 1,
                FileStatus::UpToDate => up_to_date += 1,
                FileStatus::Unchanged => {}
            },
            Err(e) => {
                log::error!("{}", e);
                failed += 1;
            }
        }
    }
    log::info!(
        "{} files processed: {} written, {} up to date, {} failed",
        inputs.len(),
        written,
        up_to_date,
        failed
    );

    if failed > 0 {
        log::error!("{} of {} files failed", failed, inputs.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

use clap::{Args, Parser, Subcommand};
use miette::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vtlower_ast::Node;
use vtlower_common::{TranslateError, TranslatorConfig};
use vtlower_driver::{BundleFrontend, Translator};

#[derive(Parser)]
#[command(name = "vtlower")]
#[command(author, version, about = "Lowers a single-inheritance class model to vtable-based C++")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Common {
    /// Translation bundle (JSON) holding the frontend outputs
    bundle: PathBuf,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overriding `[output] dir`
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header AST as JSON
    HeaderAst {
        #[command(flatten)]
        common: Common,
    },

    /// Write the header file
    Header {
        #[command(flatten)]
        common: Common,

        /// Print to stdout instead of writing the file
        #[arg(long)]
        stdout: bool,
    },

    /// Print the lowered AST as JSON
    LoweredAst {
        #[command(flatten)]
        common: Common,
    },

    /// Write the implementation file
    Implementation {
        #[command(flatten)]
        common: Common,

        /// Print to stdout instead of writing the file
        #[arg(long)]
        stdout: bool,
    },

    /// Write the entry point forwarding to a class's `main`
    Main {
        #[command(flatten)]
        common: Common,

        /// Class holding `main`, overriding `[entry] main_class`
        #[arg(long)]
        class: Option<String>,

        /// Print to stdout instead of writing the file
        #[arg(long)]
        stdout: bool,
    },

    /// Write header, implementation and, with a main class, the entry point
    Run {
        #[command(flatten)]
        common: Common,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    if let Ok(filter) = EnvFilter::try_from_env("VTLOWER_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::HeaderAst { common } => {
            let translator = translator(&common)?;
            print_json(&translator.header_ast()?)?;
        }

        Commands::Header { common, stdout } => {
            let translator = translator(&common)?;
            if stdout {
                print!("{}", translator.header_text()?);
            } else {
                report(&translator.print_header()?);
            }
        }

        Commands::LoweredAst { common } => {
            let translator = translator(&common)?;
            for unit in translator.lowered_ast()? {
                print_json(&unit)?;
            }
        }

        Commands::Implementation { common, stdout } => {
            let translator = translator(&common)?;
            if stdout {
                print!("{}", translator.implementation_text()?);
            } else {
                report(&translator.print_implementation()?);
            }
        }

        Commands::Main {
            common,
            class,
            stdout,
        } => {
            let translator = translator(&common)?;
            let class = class
                .or_else(|| translator.config().entry.main_class.clone())
                .ok_or_else(|| miette::miette!("no main class: pass --class or set `[entry] main_class`"))?;
            if stdout {
                print!("{}", translator.entry_point_text(&class)?);
            } else {
                report(&translator.print_entry_point(&class)?);
            }
        }

        Commands::Run { common } => {
            let translator = translator(&common)?;
            for path in translator.run()? {
                report(&path);
            }
        }
    }

    Ok(())
}

fn translator(common: &Common) -> Result<Translator<BundleFrontend>> {
    let mut config = match &common.config {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::default(),
    };
    if let Some(out) = &common.out {
        config.output.dir = out.clone();
    }
    let frontend = BundleFrontend::from_file(&common.bundle)?;
    Ok(Translator::new(frontend, config))
}

fn print_json(node: &Node) -> Result<()> {
    let json = serde_json::to_string_pretty(node).map_err(TranslateError::from)?;
    println!("{}", json);
    Ok(())
}

fn report(path: &Path) {
    println!("Wrote {}", path.display());
}

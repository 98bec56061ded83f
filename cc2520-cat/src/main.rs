use cc2520_cat::PacketParser;
use clap::Parser;

/// `cat` for CC2520 packets.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The CC2520 packet to parse, length prefix included, as hex.
    #[clap(value_parser(clap::builder::NonEmptyStringValueParser::new()))]
    input: String,

    /// Disable colored output.
    #[clap(long)]
    no_color: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    match PacketParser::parse_hex(&args.input) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

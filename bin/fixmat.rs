use clap::Parser;
use fixmat::{run, DemoOptions};

fn main() {
    let options = DemoOptions::parse();

    let default_level = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("FIXMAT_LOG", default_level))
        .init();

    let result = match &options.output {
        Some(v) => match std::fs::File::create(v) {
            Ok(out) => run(&options, out),
            Err(e) => Err(format!("Could not create output file '{}': {}", v, e)),
        },
        None => run(&options, std::io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

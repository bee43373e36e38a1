//! Entry point for the Trailhead export CLI.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = trailhead_cli::run() {
        eprintln!("trailhead: {err}");
        std::process::exit(1);
    }
}

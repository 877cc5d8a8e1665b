use std::env;

mod cli;
mod exits;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::harden();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}

use clap::Parser;
use lc_drv::Cli;

fn main() {
    let cli = Cli::parse();
    match lc_drv::run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

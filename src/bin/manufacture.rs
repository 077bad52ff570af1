use clap::Parser;
use iconfont_gen::cli::{run_manufacture, ManufactureArgs};

fn main() {
    let args = ManufactureArgs::parse();
    if let Err(e) = run_manufacture(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

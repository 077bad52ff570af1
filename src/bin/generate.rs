use clap::Parser;
use iconfont_gen::cli::{run_generate, GenerateArgs};

fn main() {
    let args = GenerateArgs::parse();
    if let Err(e) = run_generate(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

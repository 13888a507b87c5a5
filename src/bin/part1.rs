use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::CLIArgs;

fn main() -> Result<()> {
    guard_patrol::logging::init();
    let args = CLIArgs::parse();
    let lab = guard_patrol::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    let patrol_positions = lab.patrol_positions();
    println!(
        "The guard will visit {} position(s) before leaving given laboratory.",
        patrol_positions.len()
    );

    Ok(())
}

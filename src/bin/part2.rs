use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::CLIArgs;

fn main() -> Result<()> {
    guard_patrol::logging::init();
    let args = CLIArgs::parse();
    args.init_thread_pool()?;
    let lab = guard_patrol::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    let loop_position_n = lab.loop_obstruction_count(args.execution());
    println!(
        "There is(are) {} location(s) which can make guard loops in given laboratory.",
        loop_position_n
    );

    Ok(())
}

use anyhow::Result;
use std::io::Write;
use vtlab::{cli, runner};

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse_command_line_args();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner::execute(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

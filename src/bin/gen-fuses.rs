use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    let args = avrfuses::parse(std::env::args_os()).unwrap_or_else(|err| err.exit());
    args.init_logger();

    let params = args.params();
    info!(cpu = %params.cpu, output = %args.output, "Writing fuse settings");
    args.output.write(&params)?;

    Ok(())
}

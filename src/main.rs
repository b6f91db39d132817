use edgelb_selector::{pipeline, Config, Result};
use log::error;
use tokio::io;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_envvar()?;
    pipeline::run(&config, &mut io::stdin(), &mut io::stdout()).await?;
    Ok(())
}

use std::rc::Rc;

use clap::Parser;
use i3rate::cli::Cli;
use i3rate::config::AppConfig;
use i3rate::context::{BarItem, Context};
use i3rate::error::Result;
use i3rate::i3::I3BarHeader;
use i3rate::item::NetRate;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Cli::parse();
    let config = Rc::new(AppConfig::read(&args)?);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    tokio::task::LocalSet::new().block_on(&runtime, async_main(config))
}

async fn async_main(config: Rc<AppConfig>) -> Result<()> {
    // i3 bar protocol: a header, then an infinite JSON array of arrays
    println!("{}", serde_json::to_string(&I3BarHeader::default())?);
    println!("[");

    let (item_tx, mut item_rx) = mpsc::channel(1);
    let ctx = Context::new(config, item_tx, 0);
    tokio::task::spawn_local(async move {
        if let Err(e) = Box::new(NetRate).start(ctx).await {
            log::error!("net_rate item stopped: {}", e);
        }
    });

    // single item bar: print a new revision whenever the item updates
    while let Some((item, i)) = item_rx.recv().await {
        println!("{},", serde_json::to_string(&[item.instance(i.to_string())])?);
    }

    Ok(())
}

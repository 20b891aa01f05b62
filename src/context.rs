use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use crate::config::AppConfig;
use crate::error::Result;
use crate::i3::I3Item;

/// Everything a bar item needs from the surrounding application: its
/// configuration, and a way to push updates to the bar printer.
pub struct Context {
    pub config: Rc<AppConfig>,
    // Used as an internal cache to prevent sending the same item multiple times
    last_item: RefCell<I3Item>,
    tx_item: Sender<(I3Item, usize)>,
    index: usize,
}

impl Context {
    pub fn new(config: Rc<AppConfig>, tx_item: Sender<(I3Item, usize)>, index: usize) -> Context {
        Context {
            config,
            last_item: RefCell::default(),
            tx_item,
            index,
        }
    }

    pub async fn update_item(&self, item: I3Item) -> Result<()> {
        let mut last = self.last_item.borrow_mut();
        if *last == item {
            return Ok(());
        }

        *last = item.clone();
        self.tx_item.send((item, self.index)).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
pub trait BarItem {
    async fn start(self: Box<Self>, ctx: Context) -> Result<()>;
}

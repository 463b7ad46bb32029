use anyhow::Result;

use super::{Runtime, mount_and_show};

pub async fn run(rt: &Runtime, path: &str) -> Result<()> {
    mount_and_show(rt, path).await?;
    Ok(())
}

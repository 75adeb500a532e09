use std::io;

use qcloud_pstn::{
    AccountId, AppId, Credentials, GetNum, GetNumOptions, RawMobile, VirtualNumClient,
};

fn require_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let account_id = require_env("QCLOUD_PSTN_ID")?;
    let app_id = require_env("QCLOUD_PSTN_APPID")?;
    let host = require_env("QCLOUD_PSTN_HOST")?;
    let dst = require_env("QCLOUD_PSTN_DST")?;

    let credentials = Credentials::new(AccountId::new(account_id)?, AppId::new(app_id)?);
    let client = VirtualNumClient::new(credentials, host)?;

    let request = GetNum::new(RawMobile::new(dst)?, GetNumOptions::default());
    let response = client.get_num(request).await?;
    println!(
        "virtualNum: {}, bindId: {}, refNum: {:?}",
        response.virtual_num, response.bind_id, response.ref_num
    );

    Ok(())
}

use std::io;

use qcloud_pstn::{AccountId, AppId, BindId, Credentials, DelNum, VirtualNumClient};

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
    let bind_id = require_env("QCLOUD_PSTN_BIND_ID")?;

    let credentials = Credentials::new(AccountId::new(account_id)?, AppId::new(app_id)?);
    let client = VirtualNumClient::new(credentials, host)?;

    let response = client.del_num(DelNum::new(BindId::new(bind_id)?)).await?;
    println!(
        "errorCode: {:?}, bindId: {:?}, refLeftNum: {:?}",
        response.error_code, response.bind_id, response.ref_left_num
    );

    Ok(())
}

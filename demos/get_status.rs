use std::io;

use qcloud_pstn::{AccountId, AppId, CallId, Credentials, DialerClient};

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
    let call_id = require_env("QCLOUD_PSTN_CALL_ID")?;

    let credentials = Credentials::new(AccountId::new(account_id)?, AppId::new(app_id)?);
    let client = DialerClient::new(credentials, host)?;

    let response = client.get_status(&CallId::new(call_id)?).await?;
    println!("errorCode: {:?}", response.error_code);
    for (key, value) in &response.fields {
        println!("{key}: {value}");
    }

    Ok(())
}

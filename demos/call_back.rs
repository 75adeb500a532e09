use std::io;

use qcloud_pstn::{
    AccountId, AppId, CallBack, CallBackOptions, Credentials, DialerClient, NotifyUrl, NotifyUrls,
    RawMobile, RequestId,
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
    let src = require_env("QCLOUD_PSTN_SRC")?;
    let dst = require_env("QCLOUD_PSTN_DST")?;

    let credentials = Credentials::new(AccountId::new(account_id)?, AppId::new(app_id)?);
    let mut builder = DialerClient::builder(credentials, host);
    if let Ok(status_url) = std::env::var("QCLOUD_PSTN_STATUS_URL") {
        builder = builder.notify_urls(NotifyUrls {
            status_url: Some(NotifyUrl::new(status_url)?),
            hangup_url: std::env::var("QCLOUD_PSTN_HANGUP_URL")
                .ok()
                .map(NotifyUrl::new)
                .transpose()?,
            record_url: None,
        });
    }
    let client = builder.build()?;

    let request = CallBack::new(
        RequestId::new(format!("demo-{}", std::process::id()))?,
        RawMobile::new(src)?,
        RawMobile::new(dst)?,
        CallBackOptions::default(),
    );

    let response = client.call_back(request).await?;
    println!(
        "errorCode: {:?}, callId: {:?}, requestId: {:?}",
        response.error_code, response.call_id, response.request_id
    );

    Ok(())
}

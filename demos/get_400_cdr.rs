use std::io;

use qcloud_pstn::{AccountId, AppId, CallId, Credentials, Get400Cdr, VirtualNumClient};

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
    let client = VirtualNumClient::new(credentials, host)?;

    let request = Get400Cdr {
        call_id: Some(CallId::new(call_id)?),
        ..Default::default()
    };
    let response = client.get_400_cdr(request).await?;

    let cdr = response.cdr;
    println!(
        "callId: {:?}, dstVirtualNum: {:?}, callEndStatus: {:?}, srcDuration: {:?}, dstDuration: {:?}",
        cdr.call_id, cdr.dst_virtual_num, cdr.call_end_status, cdr.src_duration, cdr.dst_duration
    );

    Ok(())
}

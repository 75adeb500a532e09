use serde::Deserialize;
use serde_json::{Map, Value};

use super::envelope::{Envelope, TransportError, TransportScalar};
use crate::domain::{
    AccountId, AppId, CallEndStatus, CallId, Cdr400, CompressMode, Get400Cdr, Get400CdrResponse,
    RawMobile,
};

#[derive(Debug, Clone, Deserialize)]
struct Cdr400JsonFields {
    #[serde(rename = "callId", default)]
    call_id: Option<TransportScalar>,
    #[serde(rename = "requestId", default)]
    request_id: Option<TransportScalar>,
    #[serde(rename = "bindId", default)]
    bind_id: Option<TransportScalar>,
    #[serde(default)]
    src: Option<TransportScalar>,
    #[serde(default)]
    dst: Option<TransportScalar>,
    #[serde(rename = "dstVirtualNum", default)]
    dst_virtual_num: Option<TransportScalar>,
    #[serde(rename = "startDstCallTime", default)]
    start_dst_call_time: Option<TransportScalar>,
    #[serde(rename = "startDstRingTime", default)]
    start_dst_ring_time: Option<TransportScalar>,
    #[serde(rename = "dstAcceptTime", default)]
    dst_accept_time: Option<TransportScalar>,
    #[serde(rename = "endCallTime", default)]
    end_call_time: Option<TransportScalar>,
    #[serde(rename = "callEndStatus", default)]
    call_end_status: Option<TransportScalar>,
    #[serde(rename = "srcDuration", default)]
    src_duration: Option<TransportScalar>,
    #[serde(rename = "dstDuration", default)]
    dst_duration: Option<TransportScalar>,
    #[serde(rename = "recordUrl", default)]
    record_url: Option<TransportScalar>,
    #[serde(rename = "callCenterAcceptTime", default)]
    call_center_accept_time: Option<TransportScalar>,
}

pub fn encode_get400cdr_body(
    account_id: &AccountId,
    app_id: &AppId,
    request: &Get400Cdr,
) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(
        AppId::VIRTUAL_FIELD.to_owned(),
        Value::from(app_id.as_str()),
    );
    body.insert(AccountId::FIELD.to_owned(), Value::from(account_id.as_str()));
    if let Some(call_id) = request.call_id.as_ref() {
        body.insert(CallId::FIELD.to_owned(), Value::from(call_id.as_str()));
    }
    if let Some(src) = request.src.as_ref() {
        body.insert(RawMobile::SRC_FIELD.to_owned(), Value::from(src.raw()));
    }
    if let Some(start) = request.start_time_stamp {
        body.insert("startTimeStamp".to_owned(), Value::from(start.value()));
    }
    if let Some(end) = request.end_time_stamp {
        body.insert("endTimeStamp".to_owned(), Value::from(end.value()));
    }
    body.insert(
        CompressMode::FIELD.to_owned(),
        Value::from(request.compress.as_flag()),
    );
    body
}

pub fn decode_get400cdr_response(envelope: Envelope) -> Result<Get400CdrResponse, TransportError> {
    let parsed: Cdr400JsonFields = serde_json::from_value(Value::Object(envelope.fields))?;
    Ok(Get400CdrResponse {
        error_code: envelope.error_code,
        msg: envelope.msg,
        cdr: Cdr400 {
            call_id: parsed.call_id.map(TransportScalar::into_string),
            request_id: parsed.request_id.map(TransportScalar::into_string),
            bind_id: parsed.bind_id.map(TransportScalar::into_string),
            src: parsed.src.map(TransportScalar::into_string),
            dst: parsed.dst.map(TransportScalar::into_string),
            dst_virtual_num: parsed.dst_virtual_num.map(TransportScalar::into_string),
            start_dst_call_time: parsed.start_dst_call_time.map(TransportScalar::into_string),
            start_dst_ring_time: parsed.start_dst_ring_time.map(TransportScalar::into_string),
            dst_accept_time: parsed.dst_accept_time.map(TransportScalar::into_string),
            end_call_time: parsed.end_call_time.map(TransportScalar::into_string),
            call_end_status: parsed
                .call_end_status
                .map(|status| CallEndStatus::new(status.into_string())),
            src_duration: parsed.src_duration.map(TransportScalar::into_string),
            dst_duration: parsed.dst_duration.map(TransportScalar::into_string),
            record_url: parsed.record_url.map(TransportScalar::into_string),
            call_center_accept_time: parsed
                .call_center_accept_time
                .map(TransportScalar::into_string),
        },
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{KnownCallEndStatus, UnixTimestamp};
    use crate::transport::envelope::decode_envelope;

    fn identifiers() -> (AccountId, AppId) {
        (
            AccountId::new("1400012345").unwrap(),
            AppId::new("app01").unwrap(),
        )
    }

    #[test]
    fn encode_empty_request_sends_identity_and_compress_only() {
        let (account_id, app_id) = identifiers();
        let body = encode_get400cdr_body(&account_id, &app_id, &Get400Cdr::default());
        assert_eq!(
            Value::Object(body),
            json!({"appid": "app01", "id": "1400012345", "compress": 0})
        );
    }

    #[test]
    fn encode_includes_selectors_when_set() {
        let (account_id, app_id) = identifiers();
        let request = Get400Cdr {
            call_id: Some(CallId::new("c-1").unwrap()),
            src: Some(RawMobile::new("0").unwrap()),
            start_time_stamp: Some(UnixTimestamp::new(1_700_000_000)),
            end_time_stamp: Some(UnixTimestamp::new(1_700_003_600)),
            compress: CompressMode::Zlib,
        };
        let body = encode_get400cdr_body(&account_id, &app_id, &request);

        assert_eq!(body.get("callId"), Some(&json!("c-1")));
        assert_eq!(body.get("src"), Some(&json!("0")));
        assert_eq!(body.get("startTimeStamp"), Some(&json!(1_700_000_000u64)));
        assert_eq!(body.get("endTimeStamp"), Some(&json!(1_700_003_600u64)));
        assert_eq!(body.get("compress"), Some(&json!(1)));
    }

    #[test]
    fn decode_maps_documented_cdr_fields() {
        let envelope = decode_envelope(
            r#"
            {
              "errorCode": "0",
              "callId": "c-1",
              "bindId": "b-1",
              "src": "008613631686024",
              "dst": "008613912345678",
              "dstVirtualNum": "4001234567",
              "callEndStatus": "1",
              "srcDuration": "65",
              "dstDuration": "60",
              "recordUrl": ""
            }
            "#,
        )
        .unwrap();
        let response = decode_get400cdr_response(envelope).unwrap();
        assert!(response.error_code.is_success());

        let cdr = response.cdr;
        assert_eq!(cdr.call_id.as_deref(), Some("c-1"));
        assert_eq!(cdr.dst_virtual_num.as_deref(), Some("4001234567"));
        assert_eq!(
            cdr.call_end_status.as_ref().and_then(CallEndStatus::known_kind),
            Some(KnownCallEndStatus::Finished)
        );
        assert_eq!(cdr.src_duration.as_deref(), Some("65"));
        assert_eq!(cdr.record_url.as_deref(), Some(""));
        assert!(cdr.request_id.is_none());
    }

    #[test]
    fn decode_tolerates_sparse_response() {
        let envelope = decode_envelope(r#"{"errorCode":"0"}"#).unwrap();
        let response = decode_get400cdr_response(envelope).unwrap();
        assert!(response.cdr.call_id.is_none());
        assert!(response.cdr.call_end_status.is_none());
    }
}

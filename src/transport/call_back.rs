use serde::Deserialize;
use serde_json::{Map, Value};

use super::envelope::{Envelope, TransportError, TransportScalar};
use crate::domain::{
    AppId, BizId, CallBack, CallBackResponse, CallId, NotifyUrl, NotifyUrls, RawMobile, RecordMode,
    RequestId, StatusFlags,
};

/// Country prefix the dialer endpoints require on `src`/`dst`.
const COUNTRY_PREFIX: &str = "0086";

/// Field name for the line-reuse hint.
const LAST_CALL_ID_FIELD: &str = "lastCallId";

#[derive(Debug, Clone, Deserialize)]
struct CallBackJsonFields {
    #[serde(rename = "callId", default)]
    call_id: Option<TransportScalar>,
    #[serde(rename = "requestId", default)]
    request_id: Option<TransportScalar>,
}

pub fn encode_call_back_body(
    app_id: &AppId,
    notify: &NotifyUrls,
    request: &CallBack,
) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(AppId::FIELD.to_owned(), Value::from(app_id.as_str()));
    body.insert(
        RequestId::FIELD.to_owned(),
        Value::from(request.request_id().as_str()),
    );
    body.insert(
        RawMobile::SRC_FIELD.to_owned(),
        Value::from(format!("{COUNTRY_PREFIX}{}", request.src().raw())),
    );
    body.insert(
        RawMobile::DST_FIELD.to_owned(),
        Value::from(format!("{COUNTRY_PREFIX}{}", request.dst().raw())),
    );

    let options = request.options();
    if let Some(num) = options.src_display_num.as_ref() {
        body.insert("srcDisplayNum".to_owned(), Value::from(num.as_str()));
    }
    if let Some(num) = options.dst_display_num.as_ref() {
        body.insert("dstDisplayNum".to_owned(), Value::from(num.as_str()));
    }
    // The dialer endpoints take record and maxAllowTime as strings.
    body.insert(
        RecordMode::FIELD.to_owned(),
        Value::from(options.record.as_str()),
    );
    body.insert(
        "maxAllowTime".to_owned(),
        Value::from(options.max_allow_time.to_string()),
    );
    body.insert(
        StatusFlags::FIELD.to_owned(),
        Value::from(options.status_flag.bits()),
    );
    if let Some(url) = notify.status_url.as_ref() {
        body.insert(NotifyUrl::STATUS_FIELD.to_owned(), Value::from(url.as_str()));
    }
    if let Some(url) = notify.hangup_url.as_ref() {
        body.insert(NotifyUrl::HANGUP_FIELD.to_owned(), Value::from(url.as_str()));
    }
    if let Some(url) = notify.record_url.as_ref() {
        body.insert(NotifyUrl::RECORD_FIELD.to_owned(), Value::from(url.as_str()));
    }
    if let Some(biz_id) = options.biz_id.as_ref() {
        body.insert(BizId::FIELD.to_owned(), Value::from(biz_id.as_str()));
    }
    if let Some(last_call_id) = options.last_call_id.as_ref() {
        body.insert(
            LAST_CALL_ID_FIELD.to_owned(),
            Value::from(last_call_id.as_str()),
        );
    }

    body
}

pub fn decode_call_back_response(envelope: Envelope) -> Result<CallBackResponse, TransportError> {
    let parsed: CallBackJsonFields = serde_json::from_value(Value::Object(envelope.fields))?;
    Ok(CallBackResponse {
        error_code: envelope.error_code,
        msg: envelope.msg,
        call_id: parsed.call_id.map(TransportScalar::into_string),
        request_id: parsed.request_id.map(TransportScalar::into_string),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{CallBackOptions, DisplayNumber};
    use crate::transport::envelope::decode_envelope;

    fn sample_request(options: CallBackOptions) -> CallBack {
        CallBack::new(
            RequestId::new("req-1").unwrap(),
            RawMobile::new("13631686024").unwrap(),
            RawMobile::new("13912345678").unwrap(),
            options,
        )
    }

    #[test]
    fn encode_prefixes_numbers_and_applies_defaults() {
        let app_id = AppId::new("app01").unwrap();
        let notify = NotifyUrls {
            status_url: Some(NotifyUrl::new("https://example.com/status").unwrap()),
            hangup_url: Some(NotifyUrl::new("https://example.com/cdr").unwrap()),
            record_url: None,
        };
        let body = encode_call_back_body(&app_id, &notify, &sample_request(Default::default()));

        assert_eq!(
            Value::Object(body),
            json!({
                "appId": "app01",
                "requestId": "req-1",
                "src": "008613631686024",
                "dst": "008613912345678",
                "record": "0",
                "maxAllowTime": "60",
                "statusFlag": 16191,
                "statusUrl": "https://example.com/status",
                "hangupUrl": "https://example.com/cdr",
            })
        );
    }

    #[test]
    fn encode_omits_absent_optionals_entirely() {
        let app_id = AppId::new("app01").unwrap();
        let body = encode_call_back_body(
            &app_id,
            &NotifyUrls::default(),
            &sample_request(Default::default()),
        );

        for key in [
            "srcDisplayNum",
            "dstDisplayNum",
            "statusUrl",
            "hangupUrl",
            "recordUrl",
            "bizId",
            "lastCallId",
        ] {
            assert!(!body.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn encode_includes_optionals_when_set() {
        let app_id = AppId::new("app01").unwrap();
        let options = CallBackOptions {
            src_display_num: Some(DisplayNumber::new("4001234567").unwrap()),
            record: crate::domain::RecordMode::On,
            status_flag: StatusFlags::CALLER_ANSWERED,
            biz_id: Some(BizId::new("meet").unwrap()),
            last_call_id: Some(CallId::new("prev-call").unwrap()),
            ..Default::default()
        };
        let body = encode_call_back_body(&app_id, &NotifyUrls::default(), &sample_request(options));

        assert_eq!(body.get("srcDisplayNum"), Some(&json!("4001234567")));
        assert_eq!(body.get("record"), Some(&json!("1")));
        assert_eq!(body.get("statusFlag"), Some(&json!(4)));
        assert_eq!(body.get("bizId"), Some(&json!("meet")));
        assert_eq!(body.get("lastCallId"), Some(&json!("prev-call")));
    }

    #[test]
    fn decode_maps_call_id_and_request_id() {
        let envelope =
            decode_envelope(r#"{"errorCode":"0","callId":"c-9","requestId":"req-1"}"#).unwrap();
        let response = decode_call_back_response(envelope).unwrap();
        assert!(response.error_code.is_success());
        assert_eq!(response.call_id.as_deref(), Some("c-9"));
        assert_eq!(response.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn decode_tolerates_numeric_ids_and_missing_fields() {
        let envelope = decode_envelope(r#"{"errorCode":"0","callId":12345}"#).unwrap();
        let response = decode_call_back_response(envelope).unwrap();
        assert_eq!(response.call_id.as_deref(), Some("12345"));
        assert!(response.request_id.is_none());
    }
}

use serde_json::{Map, Value};

use super::envelope::{Envelope, TransportError};
use crate::domain::{
    AppId, CallId, CancelCall, CancelCallResponse, CancelFlag, GetCdrResponse, GetStatusResponse,
};

pub fn encode_cancel_call_body(app_id: &AppId, request: &CancelCall) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(AppId::FIELD.to_owned(), Value::from(app_id.as_str()));
    body.insert(
        CallId::FIELD.to_owned(),
        Value::from(request.call_id().as_str()),
    );
    body.insert(
        CancelFlag::FIELD.to_owned(),
        Value::from(request.cancel_flag().value()),
    );
    body
}

/// Shared body for `getStatus` and `getCdr`: app id plus the call id.
pub fn encode_call_id_body(app_id: &AppId, call_id: &CallId) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(AppId::FIELD.to_owned(), Value::from(app_id.as_str()));
    body.insert(CallId::FIELD.to_owned(), Value::from(call_id.as_str()));
    body
}

pub fn decode_cancel_call_response(envelope: Envelope) -> Result<CancelCallResponse, TransportError> {
    Ok(CancelCallResponse {
        error_code: envelope.error_code,
        msg: envelope.msg,
    })
}

pub fn decode_get_status_response(envelope: Envelope) -> Result<GetStatusResponse, TransportError> {
    Ok(GetStatusResponse {
        error_code: envelope.error_code,
        msg: envelope.msg,
        fields: envelope.fields,
    })
}

pub fn decode_get_cdr_response(envelope: Envelope) -> Result<GetCdrResponse, TransportError> {
    Ok(GetCdrResponse {
        error_code: envelope.error_code,
        msg: envelope.msg,
        fields: envelope.fields,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::envelope::decode_envelope;

    #[test]
    fn encode_cancel_call_body_fields() {
        let app_id = AppId::new("app01").unwrap();
        let request = CancelCall::new(CallId::new("c-1").unwrap(), CancelFlag::TEAR_DOWN);
        assert_eq!(
            Value::Object(encode_cancel_call_body(&app_id, &request)),
            json!({"appId": "app01", "callId": "c-1", "cancelFlag": 0})
        );
    }

    #[test]
    fn encode_cancel_call_passes_out_of_range_flag_through() {
        let app_id = AppId::new("app01").unwrap();
        let request = CancelCall::new(CallId::new("c-1").unwrap(), CancelFlag::new(9));
        let body = encode_cancel_call_body(&app_id, &request);
        assert_eq!(body.get("cancelFlag"), Some(&json!(9)));
    }

    #[test]
    fn encode_call_id_body_fields() {
        let app_id = AppId::new("app01").unwrap();
        let call_id = CallId::new("c-2").unwrap();
        assert_eq!(
            Value::Object(encode_call_id_body(&app_id, &call_id)),
            json!({"appId": "app01", "callId": "c-2"})
        );
    }

    #[test]
    fn decode_get_status_keeps_loose_fields() {
        let envelope =
            decode_envelope(r#"{"errorCode":"0","callId":"c-1","callStatus":"2"}"#).unwrap();
        let response = decode_get_status_response(envelope).unwrap();
        assert!(response.error_code.is_success());
        assert_eq!(
            response.fields.get("callStatus").and_then(Value::as_str),
            Some("2")
        );
    }

    #[test]
    fn decode_get_cdr_keeps_loose_fields() {
        let envelope = decode_envelope(
            r#"{"errorCode":"0","callId":"c-1","srcDuration":"65","dstDuration":"60"}"#,
        )
        .unwrap();
        let response = decode_get_cdr_response(envelope).unwrap();
        assert_eq!(
            response.fields.get("srcDuration").and_then(Value::as_str),
            Some("65")
        );
    }

    #[test]
    fn decode_cancel_call_keeps_envelope_only() {
        let envelope = decode_envelope(r#"{"errorCode":"0"}"#).unwrap();
        let response = decode_cancel_call_response(envelope).unwrap();
        assert!(response.error_code.is_success());
        assert!(response.msg.is_none());
    }
}

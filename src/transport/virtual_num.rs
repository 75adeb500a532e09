use serde::Deserialize;
use serde_json::{Map, Value};

use super::envelope::{Envelope, TransportError, TransportScalar};
use crate::domain::{
    AccountId, AccreditList, AppId, BindId, BizId, CityId, DelNum, DelNumResponse, GetNum,
    GetNumResponse, NotifyUrl, RawMobile, RecordMode, RequestId, StatusFlags,
};

#[derive(Debug, Clone, Deserialize)]
struct GetNumJsonFields {
    #[serde(rename = "virtualNum")]
    virtual_num: TransportScalar,
    #[serde(rename = "bindId")]
    bind_id: TransportScalar,
    #[serde(rename = "refNum", default)]
    ref_num: Option<TransportScalar>,
    #[serde(rename = "requestId", default)]
    request_id: Option<TransportScalar>,
}

#[derive(Debug, Clone, Deserialize)]
struct DelNumJsonFields {
    #[serde(rename = "bindId", default)]
    bind_id: Option<TransportScalar>,
    #[serde(rename = "refLeftNum", default)]
    ref_left_num: Option<TransportScalar>,
    #[serde(rename = "requestId", default)]
    request_id: Option<TransportScalar>,
}

/// The virtual-number endpoints carry the account and app identifiers in the
/// body, not in the query string.
fn identity_body(account_id: &AccountId, app_id: &AppId) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(
        AppId::VIRTUAL_FIELD.to_owned(),
        Value::from(app_id.as_str()),
    );
    body.insert(AccountId::FIELD.to_owned(), Value::from(account_id.as_str()));
    body
}

pub fn encode_get_num_body(
    account_id: &AccountId,
    app_id: &AppId,
    request: &GetNum,
) -> Map<String, Value> {
    let mut body = identity_body(account_id, app_id);
    body.insert(
        RawMobile::DST_FIELD.to_owned(),
        Value::from(request.dst().raw()),
    );

    let options = request.options();
    if let Some(src) = options.src.as_ref() {
        body.insert(RawMobile::SRC_FIELD.to_owned(), Value::from(src.raw()));
    }
    if let Some(request_id) = options.request_id.as_ref() {
        body.insert(
            RequestId::FIELD.to_owned(),
            Value::from(request_id.as_str()),
        );
    }
    if let Some(list) = options.accredit_list.as_ref() {
        let numbers = list
            .numbers()
            .iter()
            .map(|number| Value::from(number.raw()))
            .collect::<Vec<_>>();
        body.insert(AccreditList::FIELD.to_owned(), Value::from(numbers));
    }
    if let Some(number) = options.assign_virtual_num.as_ref() {
        body.insert("assignVirtualNum".to_owned(), Value::from(number.raw()));
    }
    if let Some(number) = options.callee_display_num.as_ref() {
        body.insert("calleeDisplayNum".to_owned(), Value::from(number.as_str()));
    }
    // This family takes the numeric knobs as JSON numbers.
    body.insert(
        RecordMode::FIELD.to_owned(),
        Value::from(options.record.as_flag()),
    );
    if let Some(city_id) = options.city_id.as_ref() {
        body.insert(CityId::FIELD.to_owned(), Value::from(city_id.as_str()));
    }
    if let Some(biz_id) = options.biz_id.as_ref() {
        body.insert(BizId::FIELD.to_owned(), Value::from(biz_id.as_str()));
    }
    body.insert("maxAllowTime".to_owned(), Value::from(options.max_allow_time));
    body.insert(
        "maxAssignTime".to_owned(),
        Value::from(options.max_assign_time),
    );
    body.insert(
        StatusFlags::FIELD.to_owned(),
        Value::from(options.status_flag.bits()),
    );
    if let Some(url) = options.status_url.as_ref() {
        body.insert(NotifyUrl::STATUS_FIELD.to_owned(), Value::from(url.as_str()));
    }
    if let Some(url) = options.hangup_url.as_ref() {
        body.insert(NotifyUrl::HANGUP_FIELD.to_owned(), Value::from(url.as_str()));
    }
    if let Some(url) = options.record_url.as_ref() {
        body.insert(NotifyUrl::RECORD_FIELD.to_owned(), Value::from(url.as_str()));
    }

    body
}

pub fn encode_del_num_body(
    account_id: &AccountId,
    app_id: &AppId,
    request: &DelNum,
) -> Map<String, Value> {
    let mut body = identity_body(account_id, app_id);
    body.insert(
        BindId::FIELD.to_owned(),
        Value::from(request.bind_id().as_str()),
    );
    if let Some(request_id) = request.request_id() {
        body.insert(
            RequestId::FIELD.to_owned(),
            Value::from(request_id.as_str()),
        );
    }
    if let Some(biz_id) = request.biz_id() {
        body.insert(BizId::FIELD.to_owned(), Value::from(biz_id.as_str()));
    }
    body
}

pub fn decode_get_num_response(envelope: Envelope) -> Result<GetNumResponse, TransportError> {
    let parsed: GetNumJsonFields = serde_json::from_value(Value::Object(envelope.fields))?;
    Ok(GetNumResponse {
        error_code: envelope.error_code,
        msg: envelope.msg,
        virtual_num: parsed.virtual_num.into_string(),
        bind_id: parsed.bind_id.into_string(),
        ref_num: parsed.ref_num.map(TransportScalar::into_string),
        request_id: parsed.request_id.map(TransportScalar::into_string),
    })
}

pub fn decode_del_num_response(envelope: Envelope) -> Result<DelNumResponse, TransportError> {
    let parsed: DelNumJsonFields = serde_json::from_value(Value::Object(envelope.fields))?;
    Ok(DelNumResponse {
        error_code: envelope.error_code,
        msg: envelope.msg,
        bind_id: parsed.bind_id.map(TransportScalar::into_string),
        ref_left_num: parsed.ref_left_num.map(TransportScalar::into_string),
        request_id: parsed.request_id.map(TransportScalar::into_string),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::GetNumOptions;
    use crate::transport::envelope::decode_envelope;

    fn identifiers() -> (AccountId, AppId) {
        (
            AccountId::new("1400012345").unwrap(),
            AppId::new("app01").unwrap(),
        )
    }

    #[test]
    fn encode_get_num_defaults_and_identity_in_body() {
        let (account_id, app_id) = identifiers();
        let request = GetNum::new(
            RawMobile::new("008613912345678").unwrap(),
            GetNumOptions::default(),
        );
        let body = encode_get_num_body(&account_id, &app_id, &request);

        assert_eq!(
            Value::Object(body),
            json!({
                "appid": "app01",
                "id": "1400012345",
                "dst": "008613912345678",
                "record": 0,
                "maxAllowTime": 30,
                "maxAssignTime": 86400,
                "statusFlag": 16191,
            })
        );
    }

    #[test]
    fn encode_get_num_omits_src_when_absent() {
        let (account_id, app_id) = identifiers();
        let request = GetNum::new(
            RawMobile::new("008613912345678").unwrap(),
            GetNumOptions::default(),
        );
        let body = encode_get_num_body(&account_id, &app_id, &request);
        assert!(!body.contains_key("src"));
        assert!(!body.contains_key("accreditList"));
        assert!(!body.contains_key("requestId"));
    }

    #[test]
    fn encode_get_num_serializes_accredit_list_as_array() {
        let (account_id, app_id) = identifiers();
        let options = GetNumOptions {
            src: Some(RawMobile::new("008613631686024").unwrap()),
            accredit_list: Some(
                AccreditList::new(vec![
                    RawMobile::new("008613631686024").unwrap(),
                    RawMobile::new("008612345678910").unwrap(),
                ])
                .unwrap(),
            ),
            ..Default::default()
        };
        let request = GetNum::new(RawMobile::new("008613912345678").unwrap(), options);
        let body = encode_get_num_body(&account_id, &app_id, &request);

        assert_eq!(body.get("src"), Some(&json!("008613631686024")));
        assert_eq!(
            body.get("accreditList"),
            Some(&json!(["008613631686024", "008612345678910"]))
        );
    }

    #[test]
    fn encode_del_num_includes_bind_id() {
        let (account_id, app_id) = identifiers();
        let request = DelNum::new(BindId::new("b-7").unwrap())
            .with_request_id(RequestId::new("req-1").unwrap());
        let body = encode_del_num_body(&account_id, &app_id, &request);

        assert_eq!(
            Value::Object(body),
            json!({
                "appid": "app01",
                "id": "1400012345",
                "bindId": "b-7",
                "requestId": "req-1",
            })
        );
    }

    #[test]
    fn decode_get_num_maps_documented_fields() {
        let envelope = decode_envelope(
            r#"{"errorCode":"0","virtualNum":"4001234567","bindId":"abc","refNum":"1","requestId":"req-1"}"#,
        )
        .unwrap();
        let response = decode_get_num_response(envelope).unwrap();
        assert!(response.error_code.is_success());
        assert_eq!(response.virtual_num, "4001234567");
        assert_eq!(response.bind_id, "abc");
        assert_eq!(response.ref_num.as_deref(), Some("1"));
        assert_eq!(response.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn decode_get_num_requires_virtual_num_and_bind_id() {
        let envelope = decode_envelope(r#"{"errorCode":"0","bindId":"abc"}"#).unwrap();
        let err = decode_get_num_response(envelope).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_del_num_maps_ref_left_num() {
        let envelope =
            decode_envelope(r#"{"errorCode":"0","bindId":"b-7","refLeftNum":0}"#).unwrap();
        let response = decode_del_num_response(envelope).unwrap();
        assert_eq!(response.bind_id.as_deref(), Some("b-7"));
        assert_eq!(response.ref_left_num.as_deref(), Some("0"));
        assert!(response.request_id.is_none());
    }
}

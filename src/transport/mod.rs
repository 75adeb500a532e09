//! Transport layer: wire-format details (body encoding, response decoding).

mod call_back;
mod call_control;
mod envelope;
mod get400cdr;
mod params;
mod virtual_num;

pub use call_back::{decode_call_back_response, encode_call_back_body};
pub use call_control::{
    decode_cancel_call_response, decode_get_cdr_response, decode_get_status_response,
    encode_call_id_body, encode_cancel_call_body,
};
pub use envelope::{Envelope, TransportError, decode_envelope};
pub use get400cdr::{decode_get400cdr_response, encode_get400cdr_body};
pub use params::filter_absent;
pub use virtual_num::{
    decode_del_num_response, decode_get_num_response, encode_del_num_body, encode_get_num_body,
};

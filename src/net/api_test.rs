use super::*;

#[test]
fn decode_reply_accepts_reply_object() {
    let reply = decode_reply(r#"{"content":"line1\nline2"}"#).expect("decode");
    assert_eq!(reply.content(), "line1\nline2");
}

#[test]
fn decode_reply_rejects_non_json_body() {
    let err = decode_reply("<html>502 Bad Gateway</html>").expect_err("html is not json");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_reply_rejects_empty_body() {
    assert!(matches!(decode_reply(""), Err(ApiError::Decode(_))));
}

#[test]
fn api_error_messages_name_the_stage() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Encode("bad".to_owned()).to_string(), "encode request: bad");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}

#[cfg(not(feature = "csr"))]
#[test]
fn send_message_is_unavailable_natively() {
    let fut = send_message("/", "hello");
    let result = block_on_ready(fut);
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that is ready on first poll.
#[cfg(not(feature = "csr"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future was not immediately ready"),
    }
}

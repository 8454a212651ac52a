//! Blocking put/get/delete against the test client
//!
//! Each operation is checked for the three ways a call can end: a response,
//! a computation failure, and an interruption reported by the async layer.

use std::sync::Arc;

use data_object_sdk::client::{Executor, ExecutorConfig, Operation, SdkClient};
use data_object_sdk::error::{cause, Error, Interrupted};
use data_object_sdk::interrupt;
use proptest::prelude::*;

use super::*;

#[test]
fn test_put_data_object_success() {
    let client = TestClient::new();
    let request = put_request();

    let response = client.put_data_object(request.clone()).unwrap();

    assert_eq!(response, TestClient::put_response(&request));
    assert_eq!(*client.put_calls.lock().unwrap(), vec![request]);
    assert!(!interrupt::is_interrupted());
}

#[test]
fn test_put_data_object_exception() {
    let failure = cause(StoreRejected("version conflict"));
    let client = TestClient::new().with_put(Outcome::Fail(failure.clone()));

    let error = client.put_data_object(put_request()).unwrap_err();

    assert!(Arc::ptr_eq(error.cause(), &failure));
    assert_eq!(error.operation(), Operation::Put);
    assert!(!interrupt::interrupted());
    assert_eq!(client.put_calls.lock().unwrap().len(), 1);
}

#[test]
fn test_put_data_object_interrupted() {
    let signal = cause(Interrupted);
    let client = TestClient::new().with_put(Outcome::Fail(signal.clone()));

    let error = client.put_data_object(put_request()).unwrap_err();

    assert!(Arc::ptr_eq(error.cause(), &signal));
    assert!(interrupt::interrupted());
    assert_eq!(client.put_calls.lock().unwrap().len(), 1);
}

#[test]
fn test_get_data_object_success() {
    let client = TestClient::new();
    let request = get_request();

    let response = client.get_data_object(request.clone()).unwrap();

    assert_eq!(response, TestClient::get_response(&request));
    assert_eq!(*client.get_calls.lock().unwrap(), vec![request]);
    assert!(!interrupt::is_interrupted());
}

#[test]
fn test_get_data_object_exception() {
    let failure = cause(StoreRejected("index missing"));
    let client = TestClient::new().with_get(Outcome::Fail(failure.clone()));

    let error = client.get_data_object(get_request()).unwrap_err();

    assert!(Arc::ptr_eq(error.cause(), &failure));
    assert_eq!(error.operation(), Operation::Get);
    assert!(!interrupt::interrupted());
    assert_eq!(client.get_calls.lock().unwrap().len(), 1);
}

#[test]
fn test_get_data_object_interrupted() {
    let signal = cause(Interrupted);
    let client = TestClient::new().with_get(Outcome::Fail(signal.clone()));

    let error = client.get_data_object(get_request()).unwrap_err();

    assert!(Arc::ptr_eq(error.cause(), &signal));
    assert!(interrupt::interrupted());
    assert_eq!(client.get_calls.lock().unwrap().len(), 1);
}

#[test]
fn test_delete_data_object_success() {
    let client = TestClient::new();
    let request = delete_request();

    let response = client.delete_data_object(request.clone()).unwrap();

    assert_eq!(response, TestClient::delete_response(&request));
    assert_eq!(*client.delete_calls.lock().unwrap(), vec![request]);
    assert!(!interrupt::is_interrupted());
}

#[test]
fn test_delete_data_object_exception() {
    let failure = cause(StoreRejected("document locked"));
    let client = TestClient::new().with_delete(Outcome::Fail(failure.clone()));

    let error = client.delete_data_object(delete_request()).unwrap_err();

    assert!(Arc::ptr_eq(error.cause(), &failure));
    assert_eq!(error.operation(), Operation::Delete);
    assert!(!interrupt::interrupted());
    assert_eq!(client.delete_calls.lock().unwrap().len(), 1);
}

#[test]
fn test_delete_data_object_interrupted() {
    let signal = cause(Interrupted);
    let client = TestClient::new().with_delete(Outcome::Fail(signal.clone()));

    let error = client.delete_data_object(delete_request()).unwrap_err();

    assert!(Arc::ptr_eq(error.cause(), &signal));
    assert!(interrupt::interrupted());
    assert_eq!(client.delete_calls.lock().unwrap().len(), 1);
}

#[test]
fn test_operations_do_not_cross_call() {
    let client = TestClient::new();

    client.put_data_object(put_request()).unwrap();
    client.get_data_object(get_request()).unwrap();

    assert_eq!(client.put_calls.lock().unwrap().len(), 1);
    assert_eq!(client.get_calls.lock().unwrap().len(), 1);
    assert!(client.delete_calls.lock().unwrap().is_empty());
}

#[test]
fn test_spawned_operation_on_explicit_executor() {
    let executor = Executor::new(ExecutorConfig {
        worker_threads: Some(2),
        ..Default::default()
    })
    .unwrap();
    let client = TestClient::new()
        .with_put(Outcome::Spawn)
        .with_get(Outcome::Spawn)
        .with_delete(Outcome::Spawn);

    let put = client
        .put_data_object_with_executor(put_request(), &executor)
        .unwrap();
    let get = client
        .get_data_object_with_executor(get_request(), &executor)
        .unwrap();
    let delete = client
        .delete_data_object_with_executor(delete_request(), &executor)
        .unwrap();

    assert!(put.created);
    assert_eq!(get.id, "model-1");
    assert!(delete.deleted);
}

#[test]
fn test_spawned_operation_on_shared_executor() {
    let client = TestClient::new().with_get(Outcome::Spawn);
    let request = get_request();

    let response = client.get_data_object(request.clone()).unwrap();

    assert_eq!(response, TestClient::get_response(&request));
}

#[test]
fn test_error_source_chain() {
    use std::error::Error as _;

    let client = TestClient::new().with_put(Outcome::Fail(cause(StoreRejected("full"))));

    let error = client.put_data_object(put_request()).unwrap_err();

    let source = error.source().unwrap();
    assert_eq!(source.to_string(), "store rejected the request: full");
    assert!(error.cause_as::<StoreRejected>().is_some());
    assert_eq!(
        error.to_string(),
        "put data object failed: store rejected the request: full"
    );
}

#[test]
fn test_sdk_error_converts_to_crate_error() {
    let client = TestClient::new().with_delete(Outcome::Fail(cause(StoreRejected("gone"))));

    let result: data_object_sdk::Result<DeleteResponse> = client
        .delete_data_object(delete_request())
        .map_err(Error::from);

    assert!(matches!(result, Err(Error::Sdk(_))));
}

proptest! {
    #[test]
    fn prop_one_async_call_per_sync_call(ids in proptest::collection::vec("[a-z0-9-]{1,16}", 1..16)) {
        let client = TestClient::new();

        for id in &ids {
            let request = GetRequest { index: "ml-models".to_string(), id: id.clone() };
            let response = client.get_data_object(request).unwrap();
            prop_assert_eq!(&response.id, id);
        }

        let seen: Vec<String> = client.get_calls.lock().unwrap().iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(seen, ids);
        prop_assert!(client.put_calls.lock().unwrap().is_empty());
    }
}

#[test]
fn test_async_form_resolves_without_blocking_facade() {
    let executor = Executor::shared().unwrap();
    let client = TestClient::new().with_delete(Outcome::Spawn);
    let request = delete_request();

    let response = tokio_test::block_on(client.delete_data_object_async(request.clone(), &executor))
        .unwrap();

    assert_eq!(response, TestClient::delete_response(&request));
    assert_eq!(client.delete_calls.lock().unwrap().len(), 1);
}

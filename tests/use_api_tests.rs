// tests/use_api_tests.rs - AsyncAction state, notifications and callbacks

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use saffron_storefront::web_app::error::{ActionError, ApiError};
use saffron_storefront::web_app::hooks::{use_api, ActionOptions, AsyncAction, ToastLevel, ToastQueue};

fn action_with_queue<T: Clone + Send + Sync + 'static>(options: ActionOptions<T>) -> (ToastQueue, AsyncAction<T>) {
    let queue = ToastQueue::new();
    let action = use_api(Arc::new(queue.clone()), options);
    (queue, action)
}

#[tokio::test]
async fn test_loading_only_while_running() {
    let (_queue, action) = action_with_queue::<u32>(ActionOptions::default());
    assert!(!action.loading());

    let inner = action.clone();
    let result = action
        .execute(|| async move {
            assert!(inner.loading());
            Ok::<_, ApiError>(7)
        })
        .await;

    assert_eq!(result, Ok(7));
    assert!(!action.loading());
    assert_eq!(action.data(), Some(7));
    assert_eq!(action.error(), None);
}

#[tokio::test]
async fn test_success_message_and_callback() {
    let seen = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    let options = ActionOptions::default()
        .success_message("Company details saved")
        .on_success(move |value: &String| *sink.lock().unwrap() = Some(value.clone()));
    let (queue, action) = action_with_queue(options);

    action.execute(|| async { Ok::<_, ApiError>("ok".to_string()) }).await.unwrap();

    let toasts = queue.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].message, "Company details saved");
    assert_eq!(seen.lock().unwrap().as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_no_success_toast_without_message() {
    let (queue, action) = action_with_queue::<()>(ActionOptions::default());

    action.execute(|| async { Ok::<_, ApiError>(()) }).await.unwrap();

    assert!(queue.toasts().is_empty());
}

#[tokio::test]
async fn test_api_error_is_recorded_and_returned() {
    let errors = Arc::new(AtomicUsize::new(0));
    let counter = errors.clone();
    let options = ActionOptions::<u32>::default().on_error(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let (queue, action) = action_with_queue(options);

    let result = action
        .execute(|| async {
            Err::<u32, _>(ApiError::Http {
                status: 422,
                message: "Email is required".to_string(),
            })
        })
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.message, "Email is required");
    assert!(!err.not_found);
    assert!(!action.loading());
    assert_eq!(action.error(), Some(err));
    assert_eq!(errors.load(Ordering::SeqCst), 1);

    let toasts = queue.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, "Email is required");
}

#[tokio::test]
async fn test_custom_error_message_overrides_toast_only() {
    let options = ActionOptions::<u32>::default().error_message("Could not send your message");
    let (queue, action) = action_with_queue(options);

    let err = action
        .execute(|| async { Err::<u32, _>(ApiError::Transport("connection refused".to_string())) })
        .await
        .unwrap_err();

    assert_eq!(err.message, "Network error: connection refused");
    assert_eq!(queue.toasts()[0].message, "Could not send your message");
}

#[tokio::test]
async fn test_plain_string_failure_is_coerced() {
    let (_queue, action) = action_with_queue::<u32>(ActionOptions::default());

    let err = action.execute(|| async { Err::<u32, _>("plain failure") }).await.unwrap_err();

    assert_eq!(err, ActionError::new("plain failure"));
    assert!(!action.loading());
}

#[tokio::test]
async fn test_anyhow_failure_is_coerced() {
    let (_queue, action) = action_with_queue::<u32>(ActionOptions::default());

    let err = action
        .execute(|| async { Err::<u32, _>(anyhow::anyhow!("upload rejected")) })
        .await
        .unwrap_err();

    assert_eq!(err.message, "upload rejected");
}

#[tokio::test]
async fn test_not_found_flag_survives_coercion() {
    let (_queue, action) = action_with_queue::<u32>(ActionOptions::default());

    let err = action
        .execute(|| async { Err::<u32, _>(ApiError::NotFound("Company details".to_string())) })
        .await
        .unwrap_err();

    assert!(err.not_found);
}

#[tokio::test]
async fn test_failure_keeps_previous_data_and_next_success_clears_error() {
    let (_queue, action) = action_with_queue::<u32>(ActionOptions::default());
    action.execute(|| async { Ok::<_, ApiError>(1) }).await.unwrap();

    let _ = action.execute(|| async { Err::<u32, _>("boom") }).await;
    assert_eq!(action.data(), Some(1));
    assert!(action.error().is_some());

    action.execute(|| async { Ok::<_, ApiError>(2) }).await.unwrap();
    assert_eq!(action.data(), Some(2));
    assert_eq!(action.error(), None);
}

#[tokio::test]
async fn test_silent_action_and_reset() {
    let action = AsyncAction::<u32>::new(None, ActionOptions::default().success_message("unused"));

    let _ = action.execute(|| async { Err::<u32, _>("offline") }).await;
    assert_eq!(action.error().map(|e| e.message), Some("offline".to_string()));

    action.reset();
    let state = action.state();
    assert_eq!(state.data, None);
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

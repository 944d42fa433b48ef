//! Always-on-top mode tests
//!
//! Enter/exit behavior, tooltips, panel suppression, window scaling and
//! retention, and error-message rendering in the compact overlay.

mod common;

use calcdriver::wire::keys;

#[tokio::test]
async fn aot_enter_exit_keep_on_top() {
    let (session, page) = common::standard_page().await;

    page.always_on_top.enter_always_on_top().await.unwrap();
    assert!(page.always_on_top.window_size_within_range().await.unwrap());
    assert!(page
        .always_on_top
        .window_position_within_range()
        .await
        .unwrap());
    page.always_on_top.exit_always_on_top().await.unwrap();
    assert!(!page.always_on_top.is_always_on_top().await.unwrap());

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_tooltip() {
    let (session, page) = common::standard_page().await;

    assert_eq!(
        page.always_on_top.tooltip_text().await.unwrap(),
        "Keep on top"
    );
    page.always_on_top.enter_always_on_top().await.unwrap();
    assert_eq!(
        page.always_on_top.tooltip_text().await.unwrap(),
        "Back to full view"
    );

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_no_memory_function() {
    let (session, page) = common::standard_page().await;

    page.operators.number_pad.num9_button().click().await.unwrap();
    page.operators.minus_button().click().await.unwrap();
    page.operators.number_pad.num3_button().click().await.unwrap();
    page.always_on_top.enter_always_on_top().await.unwrap();

    let window = page.app.window();
    window.send_keys(&keys::ENTER.to_string()).await.unwrap();
    // Memory hotkeys must be dead in the compact overlay
    window
        .send_keys(&keys::chord(keys::CONTROL, "P"))
        .await
        .unwrap();

    page.always_on_top.exit_always_on_top().await.unwrap();
    page.memory.open_memory_panel().await.unwrap();
    assert!(page.memory.is_empty().await.unwrap());

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_history_function() {
    let (session, page) = common::standard_page().await;

    page.operators.number_pad.num3_button().click().await.unwrap();
    page.operators.plus_button().click().await.unwrap();
    page.operators.number_pad.num3_button().click().await.unwrap();
    page.always_on_top.enter_always_on_top().await.unwrap();
    page.operators.equal_button().click().await.unwrap();

    // The history flyout cannot be opened while on top...
    page.app
        .window()
        .send_keys(&keys::chord(keys::CONTROL, "H"))
        .await
        .unwrap();
    let source = session.page_source().await.unwrap();
    assert!(!source.contains("HistoryFlyout"));

    // ...but the calculation is still recorded for later
    page.always_on_top.exit_always_on_top().await.unwrap();
    let items = page.history.all_items().await.unwrap();
    assert_eq!(items[0].text().await.unwrap(), "3 + 3= 6");

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_button_only_in_standard() {
    let (session, page) = common::standard_page().await;
    let navigation = &page.navigation;

    navigation
        .change_mode(calcdriver::pages::CalculatorMode::Scientific)
        .await
        .unwrap();
    assert_eq!(page.app.header_text().await.unwrap(), "Scientific");
    assert!(!page.always_on_top.button_present().await.unwrap());

    navigation
        .change_mode(calcdriver::pages::CalculatorMode::Programmer)
        .await
        .unwrap();
    assert_eq!(page.app.header_text().await.unwrap(), "Programmer");
    assert!(!page.always_on_top.button_present().await.unwrap());

    navigation
        .change_mode(calcdriver::pages::CalculatorMode::Date)
        .await
        .unwrap();
    assert_eq!(page.app.header_text().await.unwrap(), "Date Calculation");
    assert!(!page.always_on_top.button_present().await.unwrap());

    navigation
        .change_mode(calcdriver::pages::CalculatorMode::Standard)
        .await
        .unwrap();
    assert_eq!(page.app.header_text().await.unwrap(), "Standard");
    assert!(page.always_on_top.button_present().await.unwrap());

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_scaling() {
    let (session, page) = common::standard_page().await;

    page.always_on_top.enter_always_on_top().await.unwrap();
    assert!(page.always_on_top.window_size_within_range().await.unwrap());

    page.app.resize_window(161, 168).await.unwrap();
    assert_eq!(page.app.window_size().await.unwrap(), (161, 168));
    page.app.resize_window(502, 502).await.unwrap();
    assert_eq!(page.app.window_size().await.unwrap(), (502, 502));
    page.app.resize_window(396, 322).await.unwrap();
    assert_eq!(page.app.window_size().await.unwrap(), (396, 322));

    page.always_on_top
        .resize_window_to_display_invert_button()
        .await
        .unwrap();

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_scale_retention() {
    let (session, page) = common::standard_page().await;

    page.app.resize_window(464, 502).await.unwrap();
    let standard_size = page.app.window_size().await.unwrap();

    page.always_on_top.enter_always_on_top().await.unwrap();
    let aot_size = page.app.window_size().await.unwrap();
    assert_ne!(aot_size, standard_size);

    page.always_on_top.exit_always_on_top().await.unwrap();
    assert_eq!(page.app.window_size().await.unwrap(), standard_size);

    page.always_on_top.enter_always_on_top().await.unwrap();
    assert_eq!(page.app.window_size().await.unwrap(), aot_size);

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_error_message_result_undefined() {
    let (session, page) = common::standard_page().await;

    page.always_on_top.enter_always_on_top().await.unwrap();
    page.always_on_top
        .resize_window_to_display_invert_button()
        .await
        .unwrap();
    page.operators.divide_button().click().await.unwrap();
    page.operators.number_pad.num0_button().click().await.unwrap();
    page.operators.equal_button().click().await.unwrap();

    assert!(page.always_on_top.is_always_on_top().await.unwrap());
    assert_eq!(
        page.results.aot_result_text().await.unwrap(),
        "Result is undefined"
    );

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_error_message_cannot_divide_by_zero() {
    let (session, page) = common::standard_page().await;

    page.always_on_top.enter_always_on_top().await.unwrap();
    page.always_on_top
        .resize_window_to_display_invert_button()
        .await
        .unwrap();
    page.operators.clear_button().click().await.unwrap();
    page.operators.invert_button().click().await.unwrap();

    assert!(page.always_on_top.is_always_on_top().await.unwrap());
    assert_eq!(
        page.results.aot_result_text().await.unwrap(),
        "Cannot divide by zero"
    );

    session.teardown().await.unwrap();
}

#[tokio::test]
async fn aot_error_message_retained_on_exit() {
    let (session, page) = common::standard_page().await;

    page.always_on_top.enter_always_on_top().await.unwrap();
    page.always_on_top
        .resize_window_to_display_invert_button()
        .await
        .unwrap();
    page.operators.clear_button().click().await.unwrap();
    page.operators.invert_button().click().await.unwrap();
    assert_eq!(
        page.results.aot_result_text().await.unwrap(),
        "Cannot divide by zero"
    );

    page.always_on_top.exit_always_on_top().await.unwrap();
    assert!(!page.always_on_top.is_always_on_top().await.unwrap());
    assert_eq!(
        page.results.result_text().await.unwrap(),
        "Cannot divide by zero"
    );

    session.teardown().await.unwrap();
}

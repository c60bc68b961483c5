use super::*;

#[test]
fn log_level_defaults_to_info() {
    assert_eq!(log_level(""), log::Level::Info);
    assert_eq!(log_level("?page=2"), log::Level::Info);
}

#[test]
fn log_level_debug_flag() {
    assert_eq!(log_level("?debug=1"), log::Level::Debug);
    assert_eq!(log_level("?x=1&debug=true"), log::Level::Debug);
}

#[test]
fn log_level_ignores_lookalike_params() {
    assert_eq!(log_level("?nodebug=1"), log::Level::Info);
    assert_eq!(log_level("?debug=10"), log::Level::Info);
}

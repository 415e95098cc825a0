use mprj_fir::image::BoundaryKind;
use mprj_fir::runtime::config;

#[test]
fn set_and_get() {
    config::set("iterations", 5i64);
    assert_eq!(config::config().iterations, 5);

    config::set("boundary", "taps");
    assert_eq!(config::config().boundary, BoundaryKind::Taps);

    config::set("monitor", "la");
    assert_eq!(config::get::<String>("monitor"), Some("la".to_string()));
    assert!(config::get_value("monitor").is_some());
    assert_eq!(config::get::<u32>("monitor"), None);
    assert!(config::get_value("missing").is_none());
}

#[test]
fn logging_init_twice() {
    mprj_fir::runtime::init();
    mprj_fir::runtime::init();
}

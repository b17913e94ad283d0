#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use doolhof_web::a11y;
use doolhof_web::game::{Grid, Session, SessionStore, WebSessionStore};
use doolhof_web::i18n;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_round_trips_through_local_storage() {
    let grid = Grid::default_maze();
    let mut session = Session::new(&grid, 2, vec!["Bos".into(), "Strand".into()]);
    session.maze.step(&grid, doolhof_web::game::Direction::Right);

    let store = WebSessionStore;
    store.save(&session).expect("save");
    let loaded = store.load().expect("load").expect("saved session present");
    assert_eq!(loaded, session);

    store.clear().expect("clear");
    assert!(store.load().expect("load after clear").is_none());
}

#[wasm_bindgen_test]
fn high_contrast_toggles_the_root_class_and_persists() {
    a11y::set_high_contrast(true);
    let html = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .expect("document element");
    assert!(html.class_list().contains("hc"));
    assert!(a11y::high_contrast_enabled());

    a11y::set_high_contrast(false);
    assert!(!html.class_list().contains("hc"));
    assert!(!a11y::high_contrast_enabled());
}

#[wasm_bindgen_test]
fn changing_language_updates_the_html_lang_attribute() {
    i18n::set_lang("en");
    let html = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .expect("document element");
    assert_eq!(html.get_attribute("lang").as_deref(), Some("en"));
    assert_eq!(i18n::current_lang(), "en");

    i18n::set_lang("nl");
    assert_eq!(html.get_attribute("lang").as_deref(), Some("nl"));
}

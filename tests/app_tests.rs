// Key handling and the bundled demo page

use std::path::Path;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::controller::theme::Theme;
use folio::controller::Controller;
use folio::dom::ROW_HEIGHT_PX;
use folio::markup::load_page;
use folio::store::MemoryStore;
use folio::ui::App;

fn demo_app(fragment: Option<&str>) -> App<MemoryStore> {
    let page = load_page(Path::new("demos/portfolio.toml")).expect("Failed to read demo page");
    let mut controller = Controller::new(page.document, MemoryStore::new(), page.config);
    controller.load(fragment);
    App::new(controller)
}

fn press(app: &mut App<MemoryStore>, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_demo_page_contract() {
    let app = demo_app(None);
    let elements = app.controller.elements();
    assert_eq!(elements.slides.len(), 4);
    assert_eq!(elements.nav_links.len(), 4);
    assert!(elements.prev_button.is_some());
    assert!(elements.next_button.is_some());
    assert!(elements.menu_toggle.is_some());
    assert!(elements.nav_menu.is_some());
    assert!(elements.theme_toggle.is_some());
    assert!(elements.typed_text.is_some());
    assert_eq!(elements.bars.len(), 5);
    assert_eq!(elements.fade_ins.len(), 4);
    assert_eq!(app.controller.theme(), Theme::Light);
}

#[test]
fn test_arrow_and_button_keys() {
    let mut app = demo_app(None);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.controller.current_slide(), 1);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.controller.current_slide(), 2);
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Left);
    assert_eq!(app.controller.current_slide(), 0);
    assert_eq!(app.controller.document().location.hash(), "#slide-0");
}

#[test]
fn test_digit_keys_follow_nav_links() {
    let mut app = demo_app(None);
    press(&mut app, KeyCode::Char('m'));
    assert!(app.controller.is_menu_open());
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.controller.current_slide(), 3);
    assert!(!app.controller.is_menu_open());

    press(&mut app, KeyCode::Char('7'));
    assert_eq!(app.controller.current_slide(), 3);
    assert_eq!(app.status_message, "No nav link 7");
}

#[test]
fn test_escape_closes_menu() {
    let mut app = demo_app(None);
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.controller.is_menu_open());
    press(&mut app, KeyCode::Esc);
    assert!(!app.controller.is_menu_open());
}

#[test]
fn test_theme_key() {
    let mut app = demo_app(None);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.controller.theme(), Theme::Dark);
    assert_eq!(app.status_message, "Theme: dark");
}

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut app = demo_app(Some("slide-2"));
    // 6 visible rows of pane content
    app.resize(6 + 6);
    let viewport = app.controller.viewport();
    assert_eq!(viewport.height, 6 * ROW_HEIGHT_PX);

    press(&mut app, KeyCode::Up);
    assert_eq!(app.controller.viewport().scroll_y, 0);

    for _ in 0..50 {
        press(&mut app, KeyCode::Down);
    }
    // heading + five two-row bars = 11 rows, 6 visible
    assert_eq!(app.controller.viewport().scroll_y, 5 * ROW_HEIGHT_PX);

    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.controller.viewport().scroll_y, 0);
}

#[test]
fn test_changing_slides_resets_scroll() {
    let mut app = demo_app(Some("slide-2"));
    app.resize(12);
    press(&mut app, KeyCode::Down);
    assert!(app.controller.viewport().scroll_y > 0);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.controller.viewport().scroll_y, 0);
}

#[test]
fn test_quit() {
    let mut app = demo_app(None);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_demo_hero_types_first_phrase() {
    let mut app = demo_app(None);
    app.controller.advance(Duration::from_millis(500));
    let typed = app.controller.elements().typed_text.unwrap();
    assert_eq!(app.controller.document().get(typed).text, "a Com");
}

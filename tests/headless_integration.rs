use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use folio::animator::Animator;
use folio::config::MemoryThemeStore;
use folio::menu::{MenuController, MENU_BREAKPOINT};
use folio::runtime::{FixedTicker, FolioEvent, Runner, TestEventSource};
use folio::theme::{Theme, ThemeController};

fn key(c: char) -> FolioEvent {
    FolioEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless menu flow using the internal runtime without a TTY: toggle
// key, outside click, and a widening resize drive the state machine.
#[test]
fn headless_menu_flow() {
    let mut menu = MenuController::new();

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    tx.send(key('m')).unwrap();
    tx.send(FolioEvent::Click(40, 12)).unwrap();
    tx.send(key('m')).unwrap();
    tx.send(FolioEvent::Resize(MENU_BREAKPOINT + 32, 40)).unwrap();
    drop(tx);

    let mut observed = Vec::new();
    for _ in 0..100u32 {
        match runner.step() {
            FolioEvent::Key(k) if k.code == KeyCode::Char('m') => {
                menu.toggle();
                observed.push(menu.is_open());
            }
            FolioEvent::Click(_, _) => {
                menu.on_outside_click();
                observed.push(menu.is_open());
            }
            FolioEvent::Resize(w, _) => {
                menu.on_resize(w);
                observed.push(menu.is_open());
                break;
            }
            FolioEvent::Key(_) | FolioEvent::Tick => {
                if observed.len() >= 4 {
                    break;
                }
            }
        }
    }

    // open, closed by outside click, reopened, closed by resize
    assert_eq!(observed, vec![true, false, true, false]);
}

// The animator advances only on ticks and keeps cycling phrases.
#[test]
fn headless_animation_progresses_on_ticks() {
    let mut animator =
        Animator::new(vec!["ab".to_string(), "c".to_string()]).expect("phrases present");

    let (_tx, rx) = mpsc::channel::<FolioEvent>();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(1));
    let runner = Runner::new(es, ticker);

    let mut steps = 0;
    while steps < 2 {
        if let FolioEvent::Tick = runner.step() {
            animator.step();
            steps += 1;
        }
    }
    assert_eq!(animator.display(), "ab");

    while steps < 4 {
        if let FolioEvent::Tick = runner.step() {
            animator.step();
            steps += 1;
        }
    }
    assert_eq!(animator.display(), "");
    assert_eq!(animator.current_phrase(), "c");
}

// Theme toggles driven through the event loop stay consistent with the
// store after every change.
#[test]
fn headless_theme_flow_stays_consistent() {
    let mut controller = ThemeController::init(MemoryThemeStore::default(), true);
    assert_eq!(controller.theme(), Theme::Light);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    for _ in 0..3 {
        tx.send(key('t')).unwrap();
    }
    drop(tx);

    let mut toggles = 0;
    for _ in 0..100u32 {
        match runner.step() {
            FolioEvent::Key(k) if k.code == KeyCode::Char('t') => {
                controller.toggle();
                toggles += 1;

                let icons = controller.state().icons().unwrap();
                assert_eq!(icons.sun_visible, controller.theme() == Theme::Light);
                assert_eq!(icons.moon_visible, controller.theme() == Theme::Dark);
            }
            _ => {
                if toggles == 3 {
                    break;
                }
            }
        }
    }

    assert_eq!(toggles, 3);
    assert_eq!(controller.theme(), Theme::Dark);
}

//! Drives a dropdown end to end against the headless scene: open it, hover
//! and navigate, filter, commit a selection and dismiss it again.
//!
//! Run with `cargo run --example simple_dropdown`; set `RUST_LOG=trace` to
//! watch the state machine.

use std::rc::Rc;

use dropdown_kit::prelude::*;

struct PrintingAudio;

impl AudioService for PrintingAudio {
    fn play(&self, cue: Cue) {
        println!("♪ {}", cue.sample_name());
    }
}

fn main() {
    if let Ok(env_filter) = tracing_subscriber::EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("info")
            .compact()
            .init();
    }

    let scene = Rc::new(HeadlessScene::new());
    let services = Services::new(scene.clone())
        .with_audio(Rc::new(PrintingAudio))
        .with_theme(Theme::dark());

    let mut dropdown = Dropdown::new(&services, DropdownStyle::default())
        .with_items(vec![
            MenuItem::new("Apple", "apple"),
            MenuItem::new("Banana", "banana").disabled(),
            MenuItem::new("Grape", "grape"),
            MenuItem::new("Pineapple", "pineapple"),
        ])
        .with_search()
        .with_on_value_changed(Rc::new(|value: &&str| {
            println!("value changed to {value:?}");
        }));

    println!("-- open via header click");
    dropdown.header_activated();

    println!("-- keyboard navigation skips the disabled row");
    dropdown.navigate_next(); // Apple
    dropdown.navigate_next(); // Grape (Banana is disabled)

    println!("-- narrow with the search filter");
    dropdown.set_filter_text("apple"); // leaves Apple and Pineapple
    dropdown.navigate_next(); // pre-selection left the filtered-out row, start over
    dropdown.commit_pre_selected();

    println!("-- commit by pointer");
    dropdown.header_activated(); // reopens with the filter cleared
    dropdown.row_hovered(2);
    dropdown.row_clicked(2);
    println!(
        "header now reads {:?}",
        dropdown.header().borrow().label()
    );

    println!("-- dismiss without selecting");
    dropdown.header_activated();
    let consumed = dropdown.handle_dismiss(DismissAction::new());
    println!("dismiss consumed: {consumed}, open: {}", dropdown.is_open());

    println!("-- replay of the recorded animation intents");
    for intent in scene.intents() {
        println!("{intent:?}");
    }
}

//! Nested panels demo: borders, scrolled content and z-ordered overlap.

use gridloom::{Borders, Panel, Rect, Scroll};

fn main() {
    let log = Panel::new(Rect::from_size(26, 6))
        .unwrap()
        .at(1, 1)
        .with_borders(Borders::light())
        .with_scroll(Scroll::new(3))
        .with_content(
            "task 1: ok\ntask 2: ok\ntask 3: retrying\ntask 4: ok\ntask 5: queued\ntask 6: queued\ntask 7: queued",
        );

    let badge = Panel::from_text("[3 queued]")
        .unwrap()
        .at(15, 0)
        .with_z_index(1);

    let root = Panel::new(Rect::from_size(30, 9))
        .unwrap()
        .with_borders(Borders::double())
        .with_child(log)
        .with_child(badge);

    println!("{}", root.render());
}

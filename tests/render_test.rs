//! Full-frame rendering through the App.

mod common;

use common::{file_complaint, memory_app, MOBILE};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use suvidha::app::App;
use suvidha::models::Department;
use suvidha::ui;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_receipt_shows_request_id() {
    let (mut app, _backend, _temp) = memory_app();
    app.login(MOBILE).unwrap();
    let complaint = file_complaint(&mut app, Department::Electricity, "Power Outage", "No power since morning");

    let text = screen_text(&app);
    assert!(text.contains(&complaint.id));
    assert!(text.contains("Request Submitted Successfully"));
    assert!(text.contains("Power Outage"));
}

#[test]
fn test_admin_lists_complaints_and_chart() {
    let (mut app, _backend, _temp) = memory_app();
    app.login(MOBILE).unwrap();
    let complaint = file_complaint(&mut app, Department::Gas, "Leakage Report", "Smell");
    app.logout().unwrap();
    app.open_admin();

    let text = screen_text(&app);
    assert!(text.contains("Requests by department"));
    assert!(text.contains(&complaint.id));
}

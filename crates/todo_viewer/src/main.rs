//! Native entry point for `todo_viewer`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(todo_viewer::TITLE)
            .with_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        todo_viewer::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(todo_viewer::TodoApp::new(cc)))),
    )
}

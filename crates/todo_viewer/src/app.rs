use poll_promise::Promise;

use crate::{
    Activity, EhttpFetcher, Element, EventLog, FetchError, Fetcher, Settings, TodoButton,
    todo::{error_text, loading_text},
};

/// Shown as the window title and as the heading.
pub const TITLE: &str = "Example Windows App";

const BUTTON_SIZE: egui::Vec2 = egui::vec2(100.0, 20.0);

const RESPONSE_TEXT_ID: &str = "ResponseTextBox";

/// The request whose result we are waiting for.
struct PendingFetch {
    todo_id: u32,
    promise: Promise<Result<String, FetchError>>,
}

/// Load [`Settings`] saved by a previous run, or the defaults.
pub fn restore_settings(storage: Option<&dyn eframe::Storage>) -> Settings {
    #[cfg(feature = "persistence")]
    if let Some(storage) = storage
        && let Some(settings) = eframe::get_value(storage, eframe::APP_KEY)
    {
        return settings;
    }
    #[cfg(not(feature = "persistence"))]
    let _ = storage;

    Settings::default()
}

/// Three buttons and a read-only text area showing what the last click fetched.
pub struct TodoApp {
    settings: Settings,

    /// Contents of the text area.
    output: String,

    pending: Option<PendingFetch>,

    fetcher: Box<dyn Fetcher>,

    event_log: EventLog,

    closing: bool,
}

impl TodoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_fetcher(restore_settings(cc.storage), Box::new(EhttpFetcher))
            .with_event_log(EventLog::open_default())
    }

    /// Use a custom [`Fetcher`] instead of the network.
    ///
    /// Events are only logged through the `log` facade until [`Self::with_event_log`] is called.
    pub fn with_fetcher(settings: Settings, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            settings,
            output: String::new(),
            pending: None,
            fetcher,
            event_log: EventLog::console_only(),
            closing: false,
        }
    }

    #[must_use]
    pub fn with_event_log(mut self, event_log: EventLog) -> Self {
        self.event_log = event_log;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// What the text area currently shows.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Escape was pressed and the window was asked to close.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Start fetching the todo bound to `button`.
    ///
    /// Replaces any request still in flight; its result will be ignored.
    pub fn fetch_todo(&mut self, ctx: &egui::Context, button: TodoButton) {
        let todo_id = button.todo_id();
        let url = self.settings.todo_url(todo_id);

        if let Some(stale) = &self.pending {
            log::debug!(
                "Abandoning request for product {} in favor of {todo_id}",
                stale.todo_id
            );
        }

        self.output = loading_text(todo_id);

        let (sender, promise) = Promise::new();
        let ctx = ctx.clone();
        self.fetcher.fetch_text(
            &url,
            Box::new(move |result| {
                sender.send(result);
                ctx.request_repaint(); // wake up UI thread
            }),
        );

        self.pending = Some(PendingFetch { todo_id, promise });
    }

    /// Move a finished result into the text area.
    fn poll_pending(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let Some(result) = pending.promise.ready() else {
            return;
        };

        self.output = match result {
            Ok(body) => body.clone(),
            Err(error) => {
                log::warn!("Failed to fetch product {}: {error}", pending.todo_id);
                error_text(pending.todo_id, error)
            }
        };
        self.pending = None;
    }

    /// Record this frame's clicks and key presses; close on Escape.
    fn track_activity(&mut self, ctx: &egui::Context, elements: &[Element]) {
        let events = ctx.input(|i| i.events.clone());
        for activity in Activity::from_events(&events, elements) {
            if self.settings.record_events {
                self.event_log.record(&activity.to_string());
            }
            if activity == Activity::Escape {
                self.closing = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Lay out the whole window.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.poll_pending();

        let mut elements = Vec::new();

        egui::TopBottomPanel::bottom("settings_panel").show(ctx, |ui| {
            let header = egui::CollapsingHeader::new("Settings")
                .default_open(false)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Base URL:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.settings.base_url)
                                .desired_width(f32::INFINITY),
                        );
                    });
                    ui.checkbox(&mut self.settings.record_events, "Record UI events");
                });
            elements.push(Element::new("Settings", "Settings", header.header_response.rect));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(TITLE);
            ui.add_space(8.0);

            let mut clicked = None;
            ui.horizontal(|ui| {
                for button in TodoButton::ALL {
                    let response = ui
                        .push_id(button.automation_id(), |ui| {
                            ui.add_sized(BUTTON_SIZE, egui::Button::new(button.label()))
                        })
                        .inner;
                    elements.push(Element::new(
                        button.label(),
                        button.automation_id(),
                        response.rect,
                    ));
                    if response.clicked() {
                        clicked = Some(button);
                    }
                }
            });
            if let Some(button) = clicked {
                self.fetch_todo(ui.ctx(), button);
            }

            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    // A `&str` buffer makes the text edit read-only while keeping it selectable.
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut self.output.as_str())
                            .id_salt(RESPONSE_TEXT_ID)
                            .font(egui::TextStyle::Monospace)
                            .desired_rows(12)
                            .desired_width(f32::INFINITY),
                    );
                    elements.push(Element::new("", RESPONSE_TEXT_ID, response.rect));
                });
        });

        self.track_activity(ctx, &elements);
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    #[cfg(feature = "persistence")]
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}

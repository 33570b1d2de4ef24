//! Turning raw input events into loggable user activity.

use crate::TITLE;

/// A widget a mouse press can land on.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,

    /// Stable identifier, independent of the visible text.
    pub automation_id: &'static str,

    pub rect: egui::Rect,
}

impl Element {
    pub fn new(name: impl Into<String>, automation_id: &'static str, rect: egui::Rect) -> Self {
        Self {
            name: name.into(),
            automation_id,
            rect,
        }
    }
}

/// Something the user did this frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Activity {
    /// Primary button pressed at `pos`, over `element` if any.
    MouseDown {
        pos: egui::Pos2,
        element: Option<Element>,
    },

    KeyDown { key: egui::Key },

    /// Escape pressed: the window should close.
    Escape,
}

impl Activity {
    /// Extract activity from one frame's input events.
    ///
    /// Elements later in `elements` win when rects overlap.
    pub fn from_events(events: &[egui::Event], elements: &[Element]) -> Vec<Self> {
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => Some(Self::MouseDown {
                    pos: *pos,
                    element: elements
                        .iter()
                        .rev()
                        .find(|element| element.rect.contains(*pos))
                        .cloned(),
                }),
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => Some(if *key == egui::Key::Escape {
                    Self::Escape
                } else {
                    Self::KeyDown { key: *key }
                }),
                _ => None,
            })
            .collect()
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pid = std::process::id();
        match self {
            Self::MouseDown { pos, element } => {
                write!(f, "Mouse Down: Pos=({:.0}, {:.0})", pos.x, pos.y)?;
                match element {
                    Some(element) => write!(
                        f,
                        ", Element: App='{TITLE}' (PID={pid}), Name='{}', AutomationID='{}'",
                        element.name, element.automation_id
                    ),
                    None => write!(f, ", Element: <none>"),
                }
            }
            Self::KeyDown { key } => {
                write!(f, "Key Down: App='{TITLE}' (PID={pid}), Key: {}", key.name())
            }
            Self::Escape => f.write_str("ESC key pressed, closing the window."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f32, y: f32) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn key(key: egui::Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn elements() -> Vec<Element> {
        vec![
            Element::new(
                "Button A",
                "ButtonA",
                egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 20.0)),
            ),
            Element::new(
                "Button B",
                "ButtonB",
                egui::Rect::from_min_size(egui::pos2(110.0, 0.0), egui::vec2(100.0, 20.0)),
            ),
        ]
    }

    #[test]
    fn press_is_matched_to_element() {
        let activity = Activity::from_events(&[press(150.0, 10.0), press(500.0, 500.0)], &elements());
        assert_eq!(activity.len(), 2);

        assert_eq!(
            activity[0].to_string(),
            format!(
                "Mouse Down: Pos=(150, 10), Element: App='Example Windows App' (PID={}), Name='Button B', AutomationID='ButtonB'",
                std::process::id()
            )
        );
        assert_eq!(
            activity[1].to_string(),
            "Mouse Down: Pos=(500, 500), Element: <none>"
        );
    }

    #[test]
    fn releases_and_repeats_are_ignored() {
        let release = egui::Event::PointerButton {
            pos: egui::pos2(10.0, 10.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        let events = [
            release,
            key(egui::Key::A, false, false),
            key(egui::Key::A, true, true),
            egui::Event::Text("a".to_owned()),
        ];
        assert!(Activity::from_events(&events, &elements()).is_empty());
    }

    #[test]
    fn keys_and_escape() {
        let events = [key(egui::Key::A, true, false), key(egui::Key::Escape, true, false)];
        let activity = Activity::from_events(&events, &[]);
        assert_eq!(
            activity,
            [Activity::KeyDown { key: egui::Key::A }, Activity::Escape]
        );
        assert_eq!(
            activity[0].to_string(),
            format!(
                "Key Down: App='Example Windows App' (PID={}), Key: A",
                std::process::id()
            )
        );
    }
}

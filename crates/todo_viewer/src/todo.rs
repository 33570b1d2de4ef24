use crate::FetchError;

/// The public test API queried by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// One of the three buttons in the window, each bound to one todo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TodoButton {
    A,
    B,
    C,
}

impl TodoButton {
    /// All buttons, in the order they are laid out.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    pub fn label(self) -> &'static str {
        match self {
            Self::A => "Button A",
            Self::B => "Button B",
            Self::C => "Button C",
        }
    }

    /// Stable identifier reported in the event log.
    pub fn automation_id(self) -> &'static str {
        match self {
            Self::A => "ButtonA",
            Self::B => "ButtonB",
            Self::C => "ButtonC",
        }
    }

    /// The id of the todo this button fetches.
    pub fn todo_id(self) -> u32 {
        match self {
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
        }
    }
}

impl std::fmt::Display for TodoButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// User-editable configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Scheme and host of the API, e.g. `https://jsonplaceholder.typicode.com`.
    pub base_url: String,

    /// Record clicks and key presses to the event log.
    pub record_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            record_events: true,
        }
    }
}

impl Settings {
    pub fn todo_url(&self, id: u32) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        format!("{base_url}/todos/{id}")
    }
}

/// Shown while the request for `id` is in flight.
pub fn loading_text(id: u32) -> String {
    format!("Loading product {id}...")
}

/// Shown when the request for `id` failed.
pub fn error_text(id: u32, error: &FetchError) -> String {
    format!("Error fetching product {id}: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_consecutive_ids() {
        let ids: Vec<u32> = TodoButton::ALL.iter().map(|b| b.todo_id()).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(TodoButton::B.to_string(), "Button B");
        assert_eq!(TodoButton::C.automation_id(), "ButtonC");
    }

    #[test]
    fn todo_url_uses_base_url() {
        let settings = Settings::default();
        assert_eq!(
            settings.todo_url(2),
            "https://jsonplaceholder.typicode.com/todos/2"
        );

        let settings = Settings {
            base_url: "http://localhost:3000/".to_owned(),
            ..Default::default()
        };
        assert_eq!(settings.todo_url(3), "http://localhost:3000/todos/3");
    }

    #[test]
    fn status_texts() {
        assert_eq!(loading_text(1), "Loading product 1...");

        let error = FetchError::Status {
            status: 404,
            status_text: "Not Found".to_owned(),
        };
        assert_eq!(
            error_text(3, &error),
            "Error fetching product 3: Response status code does not indicate success: 404 (Not Found)."
        );
    }
}

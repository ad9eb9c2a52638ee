//! Command Type Resolver
//!
//! Refines an intent into the user-facing label the dispatcher shows and
//! logs. Rule order below is priority order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::Intent;
use super::classifier::IntentClassifier;
use super::tables::{
    FALLBACK_CLICK, FALLBACK_EXIT, FALLBACK_FORM, FALLBACK_HELP, FALLBACK_NAVIGATION,
    FALLBACK_SEARCH,
};

/// Human-readable command label; serialized as the same spaced label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandType {
    Navigation,
    #[serde(rename = "Email Input")]
    EmailInput,
    #[serde(rename = "Password Input")]
    PasswordInput,
    #[serde(rename = "Button Click")]
    ButtonClick,
    #[serde(rename = "Tab Selection")]
    TabSelection,
    #[serde(rename = "Login Action")]
    LoginAction,
    #[serde(rename = "Element Click")]
    ElementClick,
    #[serde(rename = "State Search")]
    StateSearch,
    #[serde(rename = "County Search")]
    CountySearch,
    Search,
    #[serde(rename = "Help Request")]
    HelpRequest,
    #[serde(rename = "Exit Command")]
    ExitCommand,
    #[serde(rename = "Form Filling")]
    FormFilling,
    Unknown,
}

impl CommandType {
    pub fn label(&self) -> &'static str {
        match self {
            CommandType::Navigation => "Navigation",
            CommandType::EmailInput => "Email Input",
            CommandType::PasswordInput => "Password Input",
            CommandType::ButtonClick => "Button Click",
            CommandType::TabSelection => "Tab Selection",
            CommandType::LoginAction => "Login Action",
            CommandType::ElementClick => "Element Click",
            CommandType::StateSearch => "State Search",
            CommandType::CountySearch => "County Search",
            CommandType::Search => "Search",
            CommandType::HelpRequest => "Help Request",
            CommandType::ExitCommand => "Exit Command",
            CommandType::FormFilling => "Form Filling",
            CommandType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Credential sub-rules: password outranks email
fn credential_type(text: &str) -> Option<CommandType> {
    if text.contains("password") {
        Some(CommandType::PasswordInput)
    } else if text.contains("email") || text.contains('@') {
        Some(CommandType::EmailInput)
    } else {
        None
    }
}

fn form_type(text: &str) -> CommandType {
    credential_type(text).unwrap_or(CommandType::FormFilling)
}

fn click_type(text: &str) -> CommandType {
    if text.contains("tab") {
        CommandType::TabSelection
    } else if text.contains("login") || text.contains("sign in") {
        CommandType::LoginAction
    } else if text.contains("button") {
        CommandType::ButtonClick
    } else {
        CommandType::ElementClick
    }
}

fn search_type(text: &str) -> CommandType {
    if text.contains("state") {
        CommandType::StateSearch
    } else if text.contains("county") {
        CommandType::CountySearch
    } else {
        CommandType::Search
    }
}

/// Keyword scan for text the catalog could not place
fn backstop_type(text: &str) -> CommandType {
    if contains_any(text, FALLBACK_NAVIGATION) {
        CommandType::Navigation
    } else if contains_any(text, FALLBACK_FORM) {
        form_type(text)
    } else if contains_any(text, FALLBACK_CLICK) {
        click_type(text)
    } else if contains_any(text, FALLBACK_SEARCH) {
        search_type(text)
    } else if contains_any(text, FALLBACK_HELP) {
        CommandType::HelpRequest
    } else if contains_any(text, FALLBACK_EXIT) {
        CommandType::ExitCommand
    } else {
        CommandType::Unknown
    }
}

/// Label for already-lowercased text with a known intent
pub fn type_for_intent(text: &str, intent: Intent) -> CommandType {
    match intent {
        Intent::FormFilling => form_type(text),
        Intent::Click => click_type(text),
        Intent::Login => credential_type(text).unwrap_or(CommandType::LoginAction),
        Intent::Search => search_type(text),
        Intent::Navigation => CommandType::Navigation,
        Intent::Help => CommandType::HelpRequest,
        Intent::Exit => CommandType::ExitCommand,
        Intent::Unknown => backstop_type(text),
    }
}

/// Classify `text` and refine the result into a `CommandType`
pub fn resolve_type(classifier: &IntentClassifier, text: &str) -> CommandType {
    let text = text.to_lowercase();
    let intent = classifier.classify(&text);
    type_for_intent(&text, intent)
}

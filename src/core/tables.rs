//! Built-in vocabulary tables
//!
//! Fixed data compiled into the process. Order matters everywhere in this
//! file: correction rules run top to bottom, and intent categories are
//! checked in the order listed.

use super::catalog::Intent;

/// Misheard website names and their canonical domain.
///
/// Longer spellings come before their prefixes so that a rule never leaves a
/// dangling `.in` behind.
pub const DOMAIN_CORRECTIONS: &[(&str, &str)] = &[
    ("redberyltest.in", "redbus.in"),
    ("redberrytest.in", "redbus.in"),
    ("red beryl test.in", "redbus.in"),
    ("red berry test.in", "redbus.in"),
    ("red barrel test.in", "redbus.in"),
    ("red barely test.in", "redbus.in"),
    ("red very test.in", "redbus.in"),
    ("red berry.in", "redbus.in"),
    ("red barrel.in", "redbus.in"),
    ("red barely.in", "redbus.in"),
    ("red bus.in", "redbus.in"),
    ("red beryl test", "redbus.in"),
    ("red berry test", "redbus.in"),
    ("redberyl test", "redbus.in"),
    ("redberry test", "redbus.in"),
    ("redberyltest", "redbus.in"),
    ("redberrytest", "redbus.in"),
];

/// Misheard everyday words, matched on word boundaries.
pub const WORD_CORRECTIONS: &[(&str, &str)] = &[
    // password
    ("oassword", "password"),
    ("passward", "password"),
    ("pasword", "password"),
    ("passwd", "password"),
    ("wth", "with"),
    // email
    ("emaol", "email"),
    ("e-mail", "email"),
    ("email adddress", "email address"),
    // verbs
    ("clcik", "click"),
    ("clik", "click"),
    ("clck", "click"),
    ("clk", "click"),
    ("selct", "select"),
    ("slect", "select"),
    ("navigat", "navigate"),
    ("navigte", "navigate"),
    ("serch", "search"),
    ("srch", "search"),
    // button
    ("buttn", "button"),
    ("buton", "button"),
    // login
    ("logn", "login"),
    ("loign", "login"),
    ("signin", "sign in"),
    ("sign-in", "sign in"),
    // state
    ("stat", "state"),
    ("stte", "state"),
    // county
    ("conty", "county"),
    ("counti", "county"),
];

/// Trigger phrases per intent, in priority order.
pub const INTENT_PHRASES: &[(Intent, &[&str])] = &[
    (
        Intent::Navigation,
        &[
            "go to",
            "navigate to",
            "open",
            "visit",
            "browse to",
            "take me to",
            "load",
            "show me",
            "bring up",
            "access",
            "view",
            "display",
            "get",
            "pull up",
            "launch",
        ],
    ),
    (
        Intent::FormFilling,
        &[
            "enter", "input", "type", "fill", "write", "put", "insert", "set", "provide", "supply",
            "submit", "populate", "complete", "add",
        ],
    ),
    (
        Intent::Click,
        &[
            "click", "press", "select", "choose", "pick", "tap", "hit", "activate", "trigger",
            "push", "click on", "press on", "tap on",
        ],
    ),
    (
        Intent::Login,
        &[
            "login",
            "log in",
            "sign in",
            "signin",
            "authenticate",
            "access account",
            "enter credentials",
            "log me in",
            "sign me in",
        ],
    ),
    (
        Intent::Search,
        &[
            "search",
            "find",
            "look for",
            "locate",
            "search for",
            "query",
            "hunt for",
            "seek",
            "browse for",
            "scan for",
        ],
    ),
    (
        Intent::Help,
        &[
            "help",
            "assist",
            "support",
            "guide",
            "aid",
            "what can you do",
            "show commands",
            "available commands",
            "show help",
            "need help",
            "assistance",
            "command list",
            "list commands",
            "how to",
        ],
    ),
    (
        Intent::Exit,
        &[
            "exit",
            "quit",
            "goodbye",
            "bye",
            "stop",
            "close",
            "end",
            "terminate",
            "shut down",
            "leave",
            "finish",
            "done",
        ],
    ),
];

/// Keyword backstop used when the catalog yields no intent.
pub const FALLBACK_NAVIGATION: &[&str] = &["go to", "navigate to", "open", "visit"];
pub const FALLBACK_FORM: &[&str] = &["enter", "input", "type", "fill", "write"];
pub const FALLBACK_CLICK: &[&str] = &["click", "press", "select", "choose"];
pub const FALLBACK_SEARCH: &[&str] = &["search", "find", "look for"];
pub const FALLBACK_HELP: &[&str] = &["help", "what can you do", "commands"];
pub const FALLBACK_EXIT: &[&str] = &["exit", "quit", "goodbye", "bye", "stop"];

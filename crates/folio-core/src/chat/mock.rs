//! Rule-based demo responder used in mock mode.
//!
//! The input is trimmed, lower-cased, and tested against an ordered list of
//! patterns. The first match decides the [`Intent`]; input that matches
//! nothing is acknowledged when short and echoed otherwise. Replies are a
//! pure function of the input, so the same message always gets the same
//! answer.

use std::sync::LazyLock;

use regex::Regex;

/// Inputs at or below this many characters get the short-input reply.
const SHORT_INPUT_MAX_CHARS: usize = 6;

/// What a mock-mode message is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Empty,
    Greeting,
    Identity,
    Projects,
    Skills,
    Contact,
    Resume,
    BuildInfo,
    ShortInput,
    Echo,
}

/// Pattern rules in priority order. Tested against lower-cased input.
static RULES: LazyLock<Vec<(Intent, Regex)>> = LazyLock::new(|| {
    [
        (Intent::Greeting, r"(?-u:\b)(hi|hello|hey|yo|sup)(?-u:\b)"),
        (Intent::Identity, r"who\s+are\s+you|about\s+you|your\s+name"),
        (Intent::Projects, r"project|portfolio|work|recent"),
        (Intent::Skills, r"skill|stack|tech|tools?"),
        (Intent::Contact, r"contact|email|reach|hire"),
        (Intent::Resume, r"resume|cv"),
        (Intent::BuildInfo, r"chatbot|how.*built|how did you build"),
    ]
    .into_iter()
    .map(|(intent, pattern)| {
        (
            intent,
            Regex::new(pattern).expect("mock intent patterns are valid regexes"),
        )
    })
    .collect()
});

/// Fabricates canned replies without calling any upstream service.
#[derive(Debug, Clone)]
pub struct MockResponder {
    assistant_name: String,
}

impl MockResponder {
    pub fn new(assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
        }
    }

    /// Classify a raw user message.
    pub fn classify(&self, input: &str) -> Intent {
        let text = input.trim();
        if text.is_empty() {
            return Intent::Empty;
        }

        let lower = text.to_lowercase();
        if let Some((intent, _)) = RULES.iter().find(|(_, re)| re.is_match(&lower)) {
            return *intent;
        }

        if text.chars().count() <= SHORT_INPUT_MAX_CHARS {
            Intent::ShortInput
        } else {
            Intent::Echo
        }
    }

    /// Produce the canned reply for a raw user message.
    pub fn reply(&self, input: &str) -> String {
        let text = input.trim();
        match self.classify(input) {
            Intent::Empty => {
                "Hey! 👋 I’m in demo mode. Ask me about my projects, skills, or how this site was built."
                    .to_string()
            }
            Intent::Greeting => "Hey there! 👋 What can I help you with?".to_string(),
            Intent::Identity => format!(
                "I’m {}’s site bot in demo mode. I can point you to sections and answer quick questions.",
                self.assistant_name
            ),
            Intent::Projects => {
                "Check the Projects section for highlights. Want a quick summary of a specific project?"
                    .to_string()
            }
            Intent::Skills => {
                "Typical stack: React + Vite + Tailwind on the front, Node/Express on the back. I also use GSAP and Framer Motion."
                    .to_string()
            }
            Intent::Contact => {
                "Head to the Contact section or use the footer links. Happy to chat!".to_string()
            }
            Intent::Resume => {
                "You’ll find the resume/CV link in the navbar. Want me to highlight key experience?"
                    .to_string()
            }
            Intent::BuildInfo => {
                "This widget is React + Tailwind. Backend is a Vercel function. In dev I’m replying with a simple mock."
                    .to_string()
            }
            Intent::ShortInput => {
                format!("“{text}” — got it. Tell me a bit more so I can help 🙂")
            }
            Intent::Echo => format!(
                "You said: “{text}”. I’m in demo mode now, but I can still guide you around the site."
            ),
        }
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new("Jek")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> MockResponder {
        MockResponder::default()
    }

    #[test]
    fn empty_and_whitespace_get_demo_greeting() {
        let r = responder();
        assert_eq!(r.classify(""), Intent::Empty);
        assert_eq!(r.classify("   \n"), Intent::Empty);
        assert!(r.reply("").contains("I’m in demo mode"));
    }

    #[test]
    fn greetings_match_whole_words_case_insensitively() {
        let r = responder();
        for input in ["hello", "Hi there", "HEY!", "yo", "sup?"] {
            assert_eq!(r.classify(input), Intent::Greeting, "input: {input}");
            assert_eq!(r.reply(input), "Hey there! 👋 What can I help you with?");
        }
        // "this" contains "hi" but not as a word.
        assert_ne!(r.classify("this is long text"), Intent::Greeting);
    }

    #[test]
    fn greeting_word_boundaries_are_ascii_only() {
        let r = responder();
        // Non-ASCII letters do not count as word characters.
        assert_eq!(r.classify("éhi"), Intent::Greeting);
        assert_eq!(r.classify("heyñ, what's new"), Intent::Greeting);
        assert_ne!(r.classify("ohio is long text"), Intent::Greeting);
    }

    #[test]
    fn identity_reply_uses_assistant_name() {
        let r = MockResponder::new("Ada");
        assert_eq!(r.classify("Who are you?"), Intent::Identity);
        assert!(r.reply("what is your name").starts_with("I’m Ada’s site bot"));
    }

    #[test]
    fn topic_rules() {
        let r = responder();
        assert_eq!(r.classify("Show me your portfolio"), Intent::Projects);
        assert_eq!(r.classify("What tools do you use?"), Intent::Skills);
        assert_eq!(r.classify("How can I contact Jek"), Intent::Contact);
        assert_eq!(r.classify("Do you have a resume"), Intent::Resume);
        assert_eq!(r.classify("how was this site built"), Intent::BuildInfo);
    }

    #[test]
    fn earlier_rules_win() {
        let r = responder();
        // Greeting beats projects.
        assert_eq!(r.classify("hey, show me a project"), Intent::Greeting);
        // Projects beats contact ("work" is listed before "hire").
        assert_eq!(r.classify("can I hire you for work"), Intent::Projects);
        // Skills is checked before build info.
        assert_eq!(r.classify("how is the tech built"), Intent::Skills);
    }

    #[test]
    fn short_unmatched_input_is_acknowledged() {
        let r = responder();
        assert_eq!(r.classify("ok"), Intent::ShortInput);
        assert_eq!(r.classify("thanks"), Intent::ShortInput);
        assert_eq!(r.reply("  ok  "), "“ok” — got it. Tell me a bit more so I can help 🙂");
    }

    #[test]
    fn short_input_counts_characters_not_bytes() {
        let r = responder();
        // Six characters, well over six bytes.
        assert_eq!(r.classify("日本語です。"), Intent::ShortInput);
    }

    #[test]
    fn unmatched_input_is_echoed_verbatim() {
        let r = responder();
        let input = "Tell me a joke please";
        assert_eq!(r.classify(input), Intent::Echo);
        let reply = r.reply(input);
        assert!(reply.contains("“Tell me a joke please”"));
        assert!(reply.starts_with("You said:"));
    }

    #[test]
    fn replies_are_deterministic() {
        let r = responder();
        let input = "Tell me a joke please";
        assert_eq!(r.reply(input), r.reply(input));
    }
}

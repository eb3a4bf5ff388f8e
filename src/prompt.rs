use crate::types::Message;

pub const CLEAR_COMMAND: &str = "/clean";

pub const SYSTEM_INSTRUCTIONS: &str = "You are a chatbot that remembers past interactions to provide relevant responses. However, you should not explicitly reveal that you remember past messages. Respond concisely, within 30 words, unless the user requests more details.";

/// `/clean` in any case, ignoring surrounding whitespace.
pub fn is_clear_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CLEAR_COMMAND)
}

/// Render prior messages as `User: ...` / `Bot: ...` lines, oldest first.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.author().transcript_label(), msg.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the single query string sent to the endpoint for `input`, given the
/// history as it was before `input` was appended.
pub fn compose_query(input: &str, prior: &[Message]) -> String {
    format!(
        "Query: {input}\nMemory:\n{}\nSystem Instructions:\n{SYSTEM_INSTRUCTIONS}",
        render_transcript(prior)
    )
}

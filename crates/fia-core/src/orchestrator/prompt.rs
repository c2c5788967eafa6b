//! Grounded prompt composition.
//!
//! Layout, always in this order:
//!
//! ```text
//! <instruction>
//!
//! --- RELEVANT SHOPPING HISTORY/CONTEXT ---   (only with ≥ 1 record)
//! - <record content>
//! --- END CONTEXT ---
//!
//! USER QUERY: <query>
//! ```

use crate::types::MemoryRecord;

/// Role and domain constraints for the assistant.
pub const SYSTEM_INSTRUCTION: &str = "You are a world-class, helpful Fashion Shopping Assistant. \
Your responses must be concise, accurate, and highly focused on style, fit, and sizing advice for the user's shopping needs. \
Always consider the user's previous context (if provided in the CONTEXT block). \
Examples of expertise: size recommendations based on weight/height, outfit pairings, and trend analysis. \
Address the user's query directly using the context provided below.";

pub const CONTEXT_HEADER: &str = "--- RELEVANT SHOPPING HISTORY/CONTEXT ---";
pub const CONTEXT_FOOTER: &str = "--- END CONTEXT ---";
pub const QUERY_PREFIX: &str = "USER QUERY: ";

/// Compose the prompt handed to the assistant.
pub fn compose_prompt(query: &str, records: &[MemoryRecord]) -> String {
    let mut prompt = String::from(SYSTEM_INSTRUCTION);
    prompt.push_str("\n\n");

    if !records.is_empty() {
        prompt.push_str(CONTEXT_HEADER);
        prompt.push('\n');
        for record in records {
            prompt.push_str("- ");
            prompt.push_str(&record.content);
            prompt.push('\n');
        }
        prompt.push_str(CONTEXT_FOOTER);
        prompt.push_str("\n\n");
    }

    prompt.push_str(QUERY_PREFIX);
    prompt.push_str(query);
    prompt
}

//! User prompt composition.
//!
//! The user prompt body is driven by the context mode: no context, a
//! single tweet, or a multi-tweet thread. A sanitized image list appends a
//! `[Visual Context]` block regardless of which branch produced the body.
//! The mode payload never shapes the user prompt; its influence is
//! confined to the system prompt and the temperature.

use std::fmt::Write as _;

use crate::types::{ContextMode, PromptConfiguration, ReplyContext};

/// Fixed instruction used when there is nothing to reply to.
const NO_CONTEXT_INSTRUCTION: &str = "\
Write an engaging tweet. Pick a concrete angle and make it sound like a \
person talking, not a brand.";

/// Build the user prompt for a sanitized configuration.
///
/// A missing `tweet_text` always degrades to the no-context instruction,
/// whatever the context mode says: absence of source text is meaningful
/// and is never papered over.
pub fn build_user_prompt(config: &PromptConfiguration) -> String {
    let context = &config.context;

    let mut prompt = match (&config.context_mode, &context.tweet_text) {
        (ContextMode::None, _) | (_, None) => NO_CONTEXT_INSTRUCTION.to_owned(),
        (ContextMode::Single, Some(tweet_text)) => single_tweet_body(tweet_text),
        (ContextMode::Thread, Some(tweet_text)) => thread_body(context, tweet_text),
    };

    if !context.images.is_empty() {
        prompt.push_str(&visual_context_block(&context.images));
    }

    prompt
}

fn single_tweet_body(tweet_text: &str) -> String {
    format!(
        "Write a reply to this tweet:\n\n\
         \"{tweet_text}\"\n\n\
         Your reply must address the tweet's content directly."
    )
}

/// Thread formatting: announcement line, one `"author: text"` line per
/// surviving entry in original order, then the latest tweet labeled with
/// the author handle when the scraper found one.
fn thread_body(context: &ReplyContext, tweet_text: &str) -> String {
    let mut body = String::from(
        "You are replying to the latest tweet in a Twitter conversation thread.\n",
    );

    if !context.thread_entries.is_empty() {
        body.push_str("\nThread so far:\n");
        for entry in &context.thread_entries {
            let _ = writeln!(body, "{}: {}", entry.author, entry.text);
        }
    }

    match &context.author_handle {
        Some(handle) => {
            let _ = writeln!(body, "\n{handle}: {tweet_text}");
        }
        None => {
            let _ = writeln!(body, "\nLatest tweet: {tweet_text}");
        }
    }

    body.push_str("\nWrite a reply that addresses the latest tweet directly.");
    body
}

fn visual_context_block(images: &[String]) -> String {
    let mut block = String::from("\n\n[Visual Context]\n");
    for (index, image) in images.iter().enumerate() {
        let _ = writeln!(block, "Image {}: {image}", index.saturating_add(1));
    }
    block.push_str("Take the visual content of the attached images into account when writing your reply.");
    block
}
